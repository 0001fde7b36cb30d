//! Console rendering helpers for the menu surface.

use std::env;

const MIN_BOX_WIDTH: usize = 40;
const MAX_BOX_WIDTH: usize = 50;

pub fn terminal_width() -> usize {
    env::var("TERM_WIDTH")
        .ok()
        .and_then(|w| w.parse().ok())
        .or_else(|| env::var("COLUMNS").ok().and_then(|c| c.parse().ok()))
        .unwrap_or(80)
}

fn effective_width() -> usize {
    terminal_width().max(MIN_BOX_WIDTH).min(MAX_BOX_WIDTH)
}

pub fn box_top(width: usize) -> String {
    let w = width.max(MIN_BOX_WIDTH).min(effective_width());
    format!("╔{}╗", "═".repeat(w - 2))
}

pub fn box_bottom(width: usize) -> String {
    let w = width.max(MIN_BOX_WIDTH).min(effective_width());
    format!("╚{}╝", "═".repeat(w - 2))
}

pub fn box_row(content: &str, width: usize) -> String {
    let w = width.max(MIN_BOX_WIDTH).min(effective_width());
    let content_len = content.chars().count();
    let padding = w.saturating_sub(2).saturating_sub(content_len);
    let left_pad = padding / 2;
    let right_pad = padding - left_pad;
    format!("║{}{}{}║", " ".repeat(left_pad), content, " ".repeat(right_pad))
}

/// Three-line banner box used as each screen's header.
pub fn banner(title: &str) {
    use colored::Colorize;

    let width = effective_width();
    println!();
    println!("{}", box_top(width).bright_cyan());
    println!("{}", box_row(title, width).bright_cyan().bold());
    println!("{}", box_bottom(width).bright_cyan());
    println!();
}

/// Screen heading for a single action, e.g. `[+] CREATE TEAM`.
pub fn heading(text: &str) {
    use colored::Colorize;
    println!("\n{}\n", text.bold());
}

pub fn success(message: &str) {
    use colored::Colorize;
    println!("{}", message.green());
}

/// Operator-facing warning; also used for validation and not-found
/// messages, which are reported here and never retried.
pub fn warn(message: &str) {
    use colored::Colorize;
    println!("{}", format!("[!] {message}").red());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_row_centers_and_closes() {
        let row = box_row("TEAMS", 40);
        assert!(row.starts_with('║'));
        assert!(row.ends_with('║'));
        assert_eq!(row.chars().count(), 40);
        assert!(row.contains("TEAMS"));
    }

    #[test]
    fn box_edges_match_requested_width() {
        assert_eq!(box_top(40).chars().count(), 40);
        assert_eq!(box_bottom(40).chars().count(), 40);
    }
}
