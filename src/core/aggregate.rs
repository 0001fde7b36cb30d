//! The whole-aggregate mutation protocol.
//!
//! The store can only replace entire team documents, so every mutation —
//! whatever its depth — funnels through one shape: fetch every root,
//! linearly find the first team that owns the target identifier, mutate
//! the in-memory copy, and persist that team back whole. A miss at any
//! depth is a not-found error with no store interaction and no side
//! effect. The replace is last-write-wins; nothing guards against a
//! concurrent writer between fetch and replace.

use crate::core::error::CardKeeperError;
use crate::core::id::DocumentId;
use crate::core::model::{Card, CardUpdate, Player, PlayerUpdate, Team, TeamUpdate};
use crate::core::store::TeamStore;

/// Fetches all roots, applies `mutate` to the first team `owns` matches,
/// and replaces that team's document. First-match semantics are load-
/// bearing: were an identifier ever duplicated across roots, only the
/// first encountered root would be touched.
pub fn mutate_owning_team<S, P, F, T>(
    store: &S,
    owns: P,
    missing: &str,
    mutate: F,
) -> Result<T, CardKeeperError>
where
    S: TeamStore + ?Sized,
    P: Fn(&Team) -> bool,
    F: FnOnce(&mut Team) -> T,
{
    let mut teams = store.find_all()?;
    let Some(team) = teams.iter_mut().find(|t| owns(t)) else {
        return Err(CardKeeperError::NotFound(missing.to_string()));
    };
    let out = mutate(team);
    store.replace_one(team.id, team)?;
    Ok(out)
}

// ----- depth 0: teams -----

pub fn create_team(
    store: &impl TeamStore,
    name: &str,
    country: &str,
) -> Result<Team, CardKeeperError> {
    let team = Team::new(name, country)?;
    store.insert_one(&team)?;
    Ok(team)
}

pub fn find_team(store: &impl TeamStore, team_id: DocumentId) -> Result<Team, CardKeeperError> {
    store
        .find_all()?
        .into_iter()
        .find(|t| t.id == team_id)
        .ok_or_else(|| CardKeeperError::NotFound(format!("team {team_id}")))
}

pub fn update_team(
    store: &impl TeamStore,
    team_id: DocumentId,
    update: &TeamUpdate,
) -> Result<Team, CardKeeperError> {
    mutate_owning_team(store, |t| t.id == team_id, &format!("team {team_id}"), |team| {
        update.apply(team);
        team.clone()
    })
}

pub fn delete_team(store: &impl TeamStore, team_id: DocumentId) -> Result<Team, CardKeeperError> {
    let team = find_team(store, team_id)?;
    store.delete_one(team_id)?;
    Ok(team)
}

// ----- depth 1: players -----

pub fn add_player(
    store: &impl TeamStore,
    team_id: DocumentId,
    first_name: &str,
    last_name: &str,
    position: &str,
) -> Result<Player, CardKeeperError> {
    let player = Player::new(first_name, last_name, position)?;
    let created = player.clone();
    mutate_owning_team(store, |t| t.id == team_id, &format!("team {team_id}"), |team| {
        team.players.push(player);
    })?;
    Ok(created)
}

pub fn update_player(
    store: &impl TeamStore,
    player_id: DocumentId,
    update: &PlayerUpdate,
) -> Result<Player, CardKeeperError> {
    let missing = format!("player {player_id}");
    mutate_owning_team(store, |t| t.owns_player(player_id), &missing, |team| {
        team.player_mut(player_id).map(|player| {
            update.apply(player);
            player.clone()
        })
    })?
    .ok_or(CardKeeperError::NotFound(missing))
}

pub fn delete_player(
    store: &impl TeamStore,
    player_id: DocumentId,
) -> Result<Player, CardKeeperError> {
    let missing = format!("player {player_id}");
    mutate_owning_team(store, |t| t.owns_player(player_id), &missing, |team| {
        team.players
            .iter()
            .position(|p| p.id == player_id)
            .map(|idx| team.players.remove(idx))
    })?
    .ok_or(CardKeeperError::NotFound(missing))
}

// ----- depth 2: cards -----

pub fn add_card(
    store: &impl TeamStore,
    player_id: DocumentId,
    card_number: &str,
    rarity: &str,
    power: i64,
) -> Result<Card, CardKeeperError> {
    let card = Card::new(card_number, rarity, power)?;
    let created = card.clone();
    let missing = format!("player {player_id}");
    mutate_owning_team(store, |t| t.owns_player(player_id), &missing, |team| {
        team.player_mut(player_id).map(|player| player.cards.push(card))
    })?
    .ok_or(CardKeeperError::NotFound(missing))?;
    Ok(created)
}

pub fn update_card(
    store: &impl TeamStore,
    card_id: DocumentId,
    update: &CardUpdate,
) -> Result<Card, CardKeeperError> {
    let missing = format!("card {card_id}");
    mutate_owning_team(store, |t| t.owns_card(card_id), &missing, |team| {
        team.card_owner_mut(card_id)
            .and_then(|player| player.cards.iter_mut().find(|c| c.id == card_id))
            .map(|card| {
                update.apply(card);
                card.clone()
            })
    })?
    .ok_or(CardKeeperError::NotFound(missing))
}

pub fn delete_card(store: &impl TeamStore, card_id: DocumentId) -> Result<Card, CardKeeperError> {
    let missing = format!("card {card_id}");
    mutate_owning_team(store, |t| t.owns_card(card_id), &missing, |team| {
        team.card_owner_mut(card_id).and_then(|player| {
            player
                .cards
                .iter()
                .position(|c| c.id == card_id)
                .map(|idx| player.cards.remove(idx))
        })
    })?
    .ok_or(CardKeeperError::NotFound(missing))
}

// ----- read-side lookups over an already-fetched collection -----

pub fn find_player(teams: &[Team], player_id: DocumentId) -> Option<(&Team, &Player)> {
    let team = teams.iter().find(|t| t.owns_player(player_id))?;
    let player = team.player(player_id)?;
    Some((team, player))
}

pub fn find_card(teams: &[Team], card_id: DocumentId) -> Option<(&Team, &Player, &Card)> {
    let team = teams.iter().find(|t| t.owns_card(card_id))?;
    let player = team
        .players
        .iter()
        .find(|p| p.cards.iter().any(|c| c.id == card_id))?;
    let card = player.cards.iter().find(|c| c.id == card_id)?;
    Some((team, player, card))
}
