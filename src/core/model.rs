//! The persisted aggregate: a team of players, each holding cards.
//!
//! `Team` is the root and the only entity the store addresses directly.
//! Players and cards exist purely inside their parent's list — no
//! back-pointers, no cross-document references. Deleting a parent takes
//! its children with it.

use crate::core::error::CardKeeperError;
use crate::core::id::DocumentId;
use serde::{Deserialize, Serialize};

pub const POWER_MIN: i64 = 1;
pub const POWER_MAX: i64 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: DocumentId,
    pub card_number: String,
    pub rarity: String,
    pub power: i64,
}

impl Card {
    pub fn new(card_number: &str, rarity: &str, power: i64) -> Result<Self, CardKeeperError> {
        let card_number = card_number.trim();
        let rarity = rarity.trim();
        if card_number.is_empty() || rarity.is_empty() {
            return Err(CardKeeperError::ValidationError(
                "card number and rarity are required".to_string(),
            ));
        }
        if !(POWER_MIN..=POWER_MAX).contains(&power) {
            return Err(CardKeeperError::ValidationError(format!(
                "power must be between {POWER_MIN} and {POWER_MAX}"
            )));
        }
        Ok(Self {
            id: DocumentId::generate(),
            card_number: card_number.to_string(),
            rarity: rarity.to_string(),
            power,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: DocumentId,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub cards: Vec<Card>,
}

impl Player {
    pub fn new(first_name: &str, last_name: &str, position: &str) -> Result<Self, CardKeeperError> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        let position = position.trim();
        if first_name.is_empty() || last_name.is_empty() || position.is_empty() {
            return Err(CardKeeperError::ValidationError(
                "first name, last name, and position are required".to_string(),
            ));
        }
        Ok(Self {
            id: DocumentId::generate(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            position: position.to_string(),
            cards: Vec::new(),
        })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: DocumentId,
    pub name: String,
    pub country: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(name: &str, country: &str) -> Result<Self, CardKeeperError> {
        let name = name.trim();
        let country = country.trim();
        if name.is_empty() || country.is_empty() {
            return Err(CardKeeperError::ValidationError(
                "name and country are required".to_string(),
            ));
        }
        Ok(Self {
            id: DocumentId::generate(),
            name: name.to_string(),
            country: country.to_string(),
            players: Vec::new(),
        })
    }

    pub fn owns_player(&self, player_id: DocumentId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn owns_card(&self, card_id: DocumentId) -> bool {
        self.players
            .iter()
            .any(|p| p.cards.iter().any(|c| c.id == card_id))
    }

    pub fn player(&self, player_id: DocumentId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn player_mut(&mut self, player_id: DocumentId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == player_id)
    }

    /// The player whose card list holds `card_id`, if any.
    pub fn card_owner_mut(&mut self, card_id: DocumentId) -> Option<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.cards.iter().any(|c| c.id == card_id))
    }
}

/// Field patch for a team. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub country: Option<String>,
}

impl TeamUpdate {
    /// Maps raw console input: an empty answer keeps the current value.
    pub fn from_input(name: &str, country: &str) -> Self {
        Self {
            name: non_empty(name),
            country: non_empty(country),
        }
    }

    pub fn apply(&self, team: &mut Team) {
        if let Some(name) = &self.name {
            team.name = name.clone();
        }
        if let Some(country) = &self.country {
            team.country = country.clone();
        }
    }
}

/// Field patch for a player. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
}

impl PlayerUpdate {
    pub fn from_input(first_name: &str, last_name: &str, position: &str) -> Self {
        Self {
            first_name: non_empty(first_name),
            last_name: non_empty(last_name),
            position: non_empty(position),
        }
    }

    pub fn apply(&self, player: &mut Player) {
        if let Some(first_name) = &self.first_name {
            player.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            player.last_name = last_name.clone();
        }
        if let Some(position) = &self.position {
            player.position = position.clone();
        }
    }
}

/// Field patch for a card. `None` leaves the field as it is.
#[derive(Debug, Clone, Default)]
pub struct CardUpdate {
    pub card_number: Option<String>,
    pub rarity: Option<String>,
    pub power: Option<i64>,
}

impl CardUpdate {
    /// Maps raw console input. Power input that does not parse or falls
    /// outside `[POWER_MIN, POWER_MAX]` keeps the current value without
    /// a message, like the empty-string case for the other fields.
    pub fn from_input(card_number: &str, rarity: &str, power: &str) -> Self {
        Self {
            card_number: non_empty(card_number),
            rarity: non_empty(rarity),
            power: power
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|p| (POWER_MIN..=POWER_MAX).contains(p)),
        }
    }

    pub fn apply(&self, card: &mut Card) {
        if let Some(card_number) = &self.card_number {
            card.card_number = card_number.clone();
        }
        if let Some(rarity) = &self.rarity {
            card.rarity = rarity.clone();
        }
        if let Some(power) = self.power {
            card.power = power;
        }
    }
}

fn non_empty(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
