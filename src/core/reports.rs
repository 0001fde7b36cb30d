//! Flattened views and summary statistics over the fetched collection.
//!
//! Everything here is a pure function over `&[Team]`; callers fetch the
//! collection once and derive whatever view they need.

use crate::core::model::{Card, Player, Team};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStats {
    pub player_count: usize,
    pub card_count: usize,
    /// Mean card power truncated to an integer; 0 when the team has no
    /// cards at all.
    pub average_power: i64,
}

pub fn team_stats(team: &Team) -> TeamStats {
    let powers: Vec<i64> = team
        .players
        .iter()
        .flat_map(|p| p.cards.iter().map(|c| c.power))
        .collect();
    let average_power = if powers.is_empty() {
        0
    } else {
        powers.iter().sum::<i64>() / powers.len() as i64
    };
    TeamStats {
        player_count: team.players.len(),
        card_count: powers.len(),
        average_power,
    }
}

/// Every player, flattened by team then by insertion order.
pub fn all_players(teams: &[Team]) -> Vec<(&Team, &Player)> {
    teams
        .iter()
        .flat_map(|t| t.players.iter().map(move |p| (t, p)))
        .collect()
}

/// Every card in nested team -> player -> card order.
pub fn all_cards(teams: &[Team]) -> Vec<(&Player, &Card)> {
    teams
        .iter()
        .flat_map(|t| t.players.iter())
        .flat_map(|p| p.cards.iter().map(move |c| (p, c)))
        .collect()
}

/// Every card ranked by descending power. The sort is stable, so cards
/// with equal power keep their nested encounter order.
pub fn cards_by_power(teams: &[Team]) -> Vec<(&Player, &Card)> {
    let mut ranked = all_cards(teams);
    ranked.sort_by(|a, b| b.1.power.cmp(&a.1.power));
    ranked
}
