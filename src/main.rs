use std::process;

fn main() {
    if let Err(err) = cardkeeper::run() {
        eprintln!("[!] {err}");
        process::exit(1);
    }
}
