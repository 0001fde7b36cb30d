//! The interactive numbered-menu loop.
//!
//! Four top-level screens — Teams, Players, Cards, Queries & Reports —
//! each offering create/read/update/delete. Validation and not-found
//! conditions are reported right here and the loop continues; store
//! errors propagate out of [`run_menu`] and terminate the process.

use crate::core::aggregate;
use crate::core::error::CardKeeperError;
use crate::core::id::DocumentId;
use crate::core::model::{CardUpdate, PlayerUpdate, TeamUpdate, POWER_MAX, POWER_MIN};
use crate::core::reports;
use crate::core::store::TeamStore;
use crate::core::tui;
use std::io::{self, BufRead, Write};

/// How many players a selection list shows before eliding the rest.
const PLAYER_LIST_LIMIT: usize = 10;

pub fn run_menu(store: &impl TeamStore) -> Result<(), CardKeeperError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        tui::banner("SOCCER CARD MANAGER");
        println!("1. Manage Teams");
        println!("2. Manage Players");
        println!("3. Manage Cards");
        println!("4. Queries & Reports");
        println!("5. Exit");
        let choice = prompt(&mut input, "\n[?] Choose an option (1-5): ")?;
        match choice.as_str() {
            "1" => team_menu(store, &mut input)?,
            "2" => player_menu(store, &mut input)?,
            "3" => card_menu(store, &mut input)?,
            "4" => query_menu(store, &mut input)?,
            "5" => {
                println!("\nThanks for using Soccer Card Manager! Goodbye!");
                return Ok(());
            }
            _ => tui::warn("Invalid choice. Try again."),
        }
    }
}

fn print_crud_options() {
    println!("1. Create");
    println!("2. Read");
    println!("3. Update");
    println!("4. Delete");
    println!("5. Back");
}

fn team_menu(store: &impl TeamStore, input: &mut impl BufRead) -> Result<(), CardKeeperError> {
    loop {
        tui::banner("TEAMS");
        print_crud_options();
        let choice = prompt(input, "\n[?] Choose an option (1-5): ")?;
        match choice.as_str() {
            "1" => create_team_screen(store, input)?,
            "2" => read_teams_screen(store)?,
            "3" => update_team_screen(store, input)?,
            "4" => delete_team_screen(store, input)?,
            "5" => return Ok(()),
            _ => {
                tui::warn("Invalid choice.");
                continue;
            }
        }
        pause(input)?;
    }
}

fn create_team_screen(
    store: &impl TeamStore,
    input: &mut impl BufRead,
) -> Result<(), CardKeeperError> {
    tui::heading("[+] CREATE TEAM");
    let name = prompt(input, "Team Name: ")?;
    let country = prompt(input, "Country: ")?;
    report(
        aggregate::create_team(store, &name, &country)
            .map(|team| format!("Team '{}' created! ID: {}", team.name, team.id)),
    )
}

fn read_teams_screen(store: &impl TeamStore) -> Result<(), CardKeeperError> {
    tui::heading("[*] ALL TEAMS");
    let teams = store.find_all()?;
    if teams.is_empty() {
        tui::warn("No teams found.");
        return Ok(());
    }
    for team in &teams {
        println!(
            "[ID: {}] {} | {} | {} players",
            team.id,
            team.name,
            team.country,
            team.players.len()
        );
    }
    Ok(())
}

fn update_team_screen(
    store: &impl TeamStore,
    input: &mut impl BufRead,
) -> Result<(), CardKeeperError> {
    tui::heading("[~] UPDATE TEAM");
    read_teams_screen(store)?;

    let Some(team_id) = prompt_id(input, "\nEnter Team ID to update: ")? else {
        return Ok(());
    };
    let teams = store.find_all()?;
    let Some(team) = teams.iter().find(|t| t.id == team_id) else {
        tui::warn("Team not found.");
        return Ok(());
    };

    let name = prompt(input, &format!("New Name ({}): ", team.name))?;
    let country = prompt(input, &format!("New Country ({}): ", team.country))?;
    let update = TeamUpdate::from_input(&name, &country);
    report(aggregate::update_team(store, team_id, &update).map(|_| "Team updated!".to_string()))
}

fn delete_team_screen(
    store: &impl TeamStore,
    input: &mut impl BufRead,
) -> Result<(), CardKeeperError> {
    tui::heading("[X] DELETE TEAM");
    read_teams_screen(store)?;

    let Some(team_id) = prompt_id(input, "\nEnter Team ID to delete: ")? else {
        return Ok(());
    };
    report(
        aggregate::delete_team(store, team_id)
            .map(|team| format!("Team '{}' deleted!", team.name)),
    )
}

fn player_menu(store: &impl TeamStore, input: &mut impl BufRead) -> Result<(), CardKeeperError> {
    loop {
        tui::banner("PLAYERS");
        print_crud_options();
        let choice = prompt(input, "\n[?] Choose an option (1-5): ")?;
        match choice.as_str() {
            "1" => create_player_screen(store, input)?,
            "2" => read_players_screen(store)?,
            "3" => update_player_screen(store, input)?,
            "4" => delete_player_screen(store, input)?,
            "5" => return Ok(()),
            _ => {
                tui::warn("Invalid choice.");
                continue;
            }
        }
        pause(input)?;
    }
}

fn create_player_screen(
    store: &impl TeamStore,
    input: &mut impl BufRead,
) -> Result<(), CardKeeperError> {
    tui::heading("[+] CREATE PLAYER");
    let teams = store.find_all()?;
    if teams.is_empty() {
        tui::warn("No teams exist. Create a team first!");
        return Ok(());
    }

    println!("Available Teams:");
    for team in &teams {
        println!("[ID: {}] {}", team.id, team.name);
    }
    let Some(team_id) = prompt_id(input, "\nSelect Team ID: ")? else {
        return Ok(());
    };
    if !teams.iter().any(|t| t.id == team_id) {
        tui::warn("Team not found.");
        return Ok(());
    }

    let first_name = prompt(input, "First Name: ")?;
    let last_name = prompt(input, "Last Name: ")?;
    let position = prompt(
        input,
        "Position (e.g., Goalkeeper, Defender, Midfielder, Forward): ",
    )?;
    report(
        aggregate::add_player(store, team_id, &first_name, &last_name, &position)
            .map(|player| format!("Player '{}' created! ID: {}", player.full_name(), player.id)),
    )
}

fn read_players_screen(store: &impl TeamStore) -> Result<(), CardKeeperError> {
    tui::heading("[*] ALL PLAYERS");
    let teams = store.find_all()?;
    if teams.is_empty() {
        tui::warn("No teams found.");
        return Ok(());
    }
    for team in &teams {
        println!("\n[Team: {}]", team.name);
        if team.players.is_empty() {
            println!("  [!] No players");
            continue;
        }
        for player in &team.players {
            println!(
                "  [ID: {}] {} ({}) | {} cards",
                player.id,
                player.full_name(),
                player.position,
                player.cards.len()
            );
        }
    }
    Ok(())
}

fn update_player_screen(
    store: &impl TeamStore,
    input: &mut impl BufRead,
) -> Result<(), CardKeeperError> {
    tui::heading("[~] UPDATE PLAYER");
    read_players_screen(store)?;

    let Some(player_id) = prompt_id(input, "\nEnter Player ID to update: ")? else {
        return Ok(());
    };
    let teams = store.find_all()?;
    let Some((_, player)) = aggregate::find_player(&teams, player_id) else {
        tui::warn("Player not found.");
        return Ok(());
    };

    let first_name = prompt(input, &format!("New First Name ({}): ", player.first_name))?;
    let last_name = prompt(input, &format!("New Last Name ({}): ", player.last_name))?;
    let position = prompt(input, &format!("New Position ({}): ", player.position))?;
    let update = PlayerUpdate::from_input(&first_name, &last_name, &position);
    report(
        aggregate::update_player(store, player_id, &update).map(|_| "Player updated!".to_string()),
    )
}

fn delete_player_screen(
    store: &impl TeamStore,
    input: &mut impl BufRead,
) -> Result<(), CardKeeperError> {
    tui::heading("[X] DELETE PLAYER");
    read_players_screen(store)?;

    let Some(player_id) = prompt_id(input, "\nEnter Player ID to delete: ")? else {
        return Ok(());
    };
    report(
        aggregate::delete_player(store, player_id)
            .map(|player| format!("Player '{}' deleted!", player.full_name())),
    )
}

fn card_menu(store: &impl TeamStore, input: &mut impl BufRead) -> Result<(), CardKeeperError> {
    loop {
        tui::banner("CARDS");
        print_crud_options();
        let choice = prompt(input, "\n[?] Choose an option (1-5): ")?;
        match choice.as_str() {
            "1" => create_card_screen(store, input)?,
            "2" => read_cards_screen(store)?,
            "3" => update_card_screen(store, input)?,
            "4" => delete_card_screen(store, input)?,
            "5" => return Ok(()),
            _ => {
                tui::warn("Invalid choice.");
                continue;
            }
        }
        pause(input)?;
    }
}

fn create_card_screen(
    store: &impl TeamStore,
    input: &mut impl BufRead,
) -> Result<(), CardKeeperError> {
    tui::heading("[+] CREATE CARD");
    let teams = store.find_all()?;
    let players = reports::all_players(&teams);
    if players.is_empty() {
        tui::warn("No players exist. Create a player first!");
        return Ok(());
    }

    println!("Available Players:");
    for (_, player) in players.iter().take(PLAYER_LIST_LIMIT) {
        println!("[ID: {}] {}", player.id, player.full_name());
    }
    if players.len() > PLAYER_LIST_LIMIT {
        println!("... and {} more", players.len() - PLAYER_LIST_LIMIT);
    }

    let Some(player_id) = prompt_id(input, "\nSelect Player ID: ")? else {
        return Ok(());
    };
    if aggregate::find_player(&teams, player_id).is_none() {
        tui::warn("Player not found.");
        return Ok(());
    }

    let card_number = prompt(input, "Card Number: ")?;
    let rarity = prompt(input, "Rarity (e.g., Common, Rare, Ultra Rare): ")?;
    let power_raw = prompt(input, &format!("Power ({POWER_MIN}-{POWER_MAX}): "))?;
    let power = match power_raw.parse::<i64>() {
        Ok(power) if (POWER_MIN..=POWER_MAX).contains(&power) => power,
        _ => {
            tui::warn(&format!("Invalid power value ({POWER_MIN}-{POWER_MAX})."));
            return Ok(());
        }
    };
    report(
        aggregate::add_card(store, player_id, &card_number, &rarity, power)
            .map(|card| format!("Card created! ID: {}", card.id)),
    )
}

fn read_cards_screen(store: &impl TeamStore) -> Result<(), CardKeeperError> {
    tui::heading("[*] ALL CARDS");
    let teams = store.find_all()?;
    if teams.is_empty() {
        tui::warn("No teams found.");
        return Ok(());
    }
    for team in &teams {
        for player in &team.players {
            if player.cards.is_empty() {
                continue;
            }
            println!("\n[{}]", player.full_name());
            for card in &player.cards {
                println!(
                    "  [ID: {}] #{} | {} | Power: {}",
                    card.id, card.card_number, card.rarity, card.power
                );
            }
        }
    }
    Ok(())
}

fn update_card_screen(
    store: &impl TeamStore,
    input: &mut impl BufRead,
) -> Result<(), CardKeeperError> {
    tui::heading("[~] UPDATE CARD");
    read_cards_screen(store)?;

    let Some(card_id) = prompt_id(input, "\nEnter Card ID to update: ")? else {
        return Ok(());
    };
    let teams = store.find_all()?;
    let Some((_, _, card)) = aggregate::find_card(&teams, card_id) else {
        tui::warn("Card not found.");
        return Ok(());
    };

    let card_number = prompt(input, &format!("New Card Number ({}): ", card.card_number))?;
    let rarity = prompt(input, &format!("New Rarity ({}): ", card.rarity))?;
    let power = prompt(input, &format!("New Power ({}): ", card.power))?;
    let update = CardUpdate::from_input(&card_number, &rarity, &power);
    report(aggregate::update_card(store, card_id, &update).map(|_| "Card updated!".to_string()))
}

fn delete_card_screen(
    store: &impl TeamStore,
    input: &mut impl BufRead,
) -> Result<(), CardKeeperError> {
    tui::heading("[X] DELETE CARD");
    read_cards_screen(store)?;

    let Some(card_id) = prompt_id(input, "\nEnter Card ID to delete: ")? else {
        return Ok(());
    };
    report(aggregate::delete_card(store, card_id).map(|_| "Card deleted!".to_string()))
}

fn query_menu(store: &impl TeamStore, input: &mut impl BufRead) -> Result<(), CardKeeperError> {
    loop {
        tui::banner("QUERIES & REPORTS");
        println!("1. Show Player's Cards");
        println!("2. Show Team Statistics");
        println!("3. Show All Cards by Power");
        println!("4. Back");
        let choice = prompt(input, "\n[?] Choose an option (1-4): ")?;
        match choice.as_str() {
            "1" => player_cards_screen(store, input)?,
            "2" => team_stats_screen(store, input)?,
            "3" => cards_by_power_screen(store)?,
            "4" => return Ok(()),
            _ => {
                tui::warn("Invalid choice.");
                continue;
            }
        }
        pause(input)?;
    }
}

fn player_cards_screen(
    store: &impl TeamStore,
    input: &mut impl BufRead,
) -> Result<(), CardKeeperError> {
    tui::heading("[*] PLAYER'S CARDS");
    let teams = store.find_all()?;
    let players = reports::all_players(&teams);

    println!("Available Players:");
    for (_, player) in players.iter().take(PLAYER_LIST_LIMIT) {
        println!("[ID: {}] {}", player.id, player.full_name());
    }

    let Some(player_id) = prompt_id(input, "\nSelect Player ID: ")? else {
        return Ok(());
    };
    let Some((_, player)) = aggregate::find_player(&teams, player_id) else {
        tui::warn("Player not found.");
        return Ok(());
    };

    tui::heading(&format!("[*] {} ({})", player.full_name(), player.position));
    if player.cards.is_empty() {
        tui::warn("No cards found.");
        return Ok(());
    }
    for card in &player.cards {
        println!(
            "[ID: {}] #{} | {} | Power: {}",
            card.id, card.card_number, card.rarity, card.power
        );
    }
    Ok(())
}

fn team_stats_screen(
    store: &impl TeamStore,
    input: &mut impl BufRead,
) -> Result<(), CardKeeperError> {
    tui::heading("[*] TEAM STATISTICS");
    let teams = store.find_all()?;

    println!("Available Teams:");
    for team in &teams {
        println!("[ID: {}] {}", team.id, team.name);
    }

    let Some(team_id) = prompt_id(input, "\nSelect Team ID: ")? else {
        return Ok(());
    };
    let Some(team) = teams.iter().find(|t| t.id == team_id) else {
        tui::warn("Team not found.");
        return Ok(());
    };

    let stats = reports::team_stats(team);
    tui::heading(&format!("[*] {} ({})", team.name, team.country));
    println!("Total Players: {}", stats.player_count);
    println!("Total Cards: {}", stats.card_count);
    println!("Average Power: {}", stats.average_power);

    println!("\n[Players]");
    for player in &team.players {
        println!(
            "  {} ({}) - {} cards",
            player.full_name(),
            player.position,
            player.cards.len()
        );
    }
    Ok(())
}

fn cards_by_power_screen(store: &impl TeamStore) -> Result<(), CardKeeperError> {
    tui::heading("[*] CARDS SORTED BY POWER");
    let teams = store.find_all()?;
    let ranked = reports::cards_by_power(&teams);
    if ranked.is_empty() {
        tui::warn("No cards found.");
        return Ok(());
    }
    for (player, card) in ranked {
        println!(
            "[Power: {}] #{} ({}) - {}",
            card.power,
            card.card_number,
            card.rarity,
            player.full_name()
        );
    }
    Ok(())
}

/// Prints a success message, or reports validation/not-found conditions
/// to the operator and carries on. Anything else propagates and ends the
/// session.
fn report(result: Result<String, CardKeeperError>) -> Result<(), CardKeeperError> {
    match result {
        Ok(message) => {
            tui::success(&message);
            Ok(())
        }
        Err(CardKeeperError::ValidationError(msg)) => {
            tui::warn(&msg);
            Ok(())
        }
        Err(CardKeeperError::NotFound(msg)) => {
            tui::warn(&format!("Not found: {msg}"));
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String, CardKeeperError> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // A closed stdin must end the session, not spin on empty reads.
        return Err(CardKeeperError::IoError(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "console input closed",
        )));
    }
    Ok(line.trim().to_string())
}

/// Reads an identifier; malformed input is reported and `None` returned
/// so the current screen aborts without touching the store.
fn prompt_id(
    input: &mut impl BufRead,
    label: &str,
) -> Result<Option<DocumentId>, CardKeeperError> {
    let raw = prompt(input, label)?;
    match DocumentId::parse(&raw) {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            tui::warn("Invalid ID.");
            Ok(None)
        }
    }
}

fn pause(input: &mut impl BufRead) -> Result<(), CardKeeperError> {
    prompt(input, "\nPress Enter to continue...")?;
    Ok(())
}
