use cardkeeper::core::aggregate;
use cardkeeper::core::error::CardKeeperError;
use cardkeeper::core::id::DocumentId;
use cardkeeper::core::model::{CardUpdate, Player, PlayerUpdate, TeamUpdate};
use cardkeeper::core::reports;
use cardkeeper::core::store::{MemoryTeamStore, TeamStore};

#[test]
fn created_team_is_retrievable_with_empty_roster() {
    let store = MemoryTeamStore::new();
    let team = aggregate::create_team(&store, "Lions", "Kenya").expect("create team");

    let fetched = aggregate::find_team(&store, team.id).expect("retrievable by id");
    assert_eq!(fetched.name, "Lions");
    assert_eq!(fetched.country, "Kenya");
    assert!(fetched.players.is_empty());
}

#[test]
fn create_team_rejects_missing_fields_without_store_interaction() {
    let store = MemoryTeamStore::new();
    let err = aggregate::create_team(&store, "", "Kenya").unwrap_err();
    assert!(matches!(err, CardKeeperError::ValidationError(_)));
    assert!(store.find_all().expect("find_all").is_empty());
}

#[test]
fn add_player_grows_exactly_the_target_team() {
    let store = MemoryTeamStore::new();
    let lions = aggregate::create_team(&store, "Lions", "Kenya").expect("lions");
    let eagles = aggregate::create_team(&store, "Eagles", "Nigeria").expect("eagles");

    let player =
        aggregate::add_player(&store, eagles.id, "Amon", "Otieno", "Forward").expect("add player");

    let teams = store.find_all().expect("find_all");
    let lions_after = teams.iter().find(|t| t.id == lions.id).expect("lions row");
    let eagles_after = teams.iter().find(|t| t.id == eagles.id).expect("eagles row");
    assert!(lions_after.players.is_empty());
    assert_eq!(eagles_after.players.len(), 1);
    assert_eq!(eagles_after.players[0].id, player.id);
    assert_eq!(eagles_after.players[0].full_name(), "Amon Otieno");
    assert_eq!(eagles_after.players[0].position, "Forward");
}

#[test]
fn add_player_to_unknown_team_is_not_found() {
    let store = MemoryTeamStore::new();
    aggregate::create_team(&store, "Lions", "Kenya").expect("create team");
    let before = store.find_all().expect("before");

    let err = aggregate::add_player(&store, DocumentId::generate(), "Amon", "Otieno", "Forward")
        .unwrap_err();
    assert!(matches!(err, CardKeeperError::NotFound(_)));
    assert_eq!(store.find_all().expect("after"), before);
}

#[test]
fn add_card_grows_exactly_the_target_player() {
    let store = MemoryTeamStore::new();
    let team = aggregate::create_team(&store, "Lions", "Kenya").expect("team");
    let amon = aggregate::add_player(&store, team.id, "Amon", "Otieno", "Forward").expect("amon");
    let juma = aggregate::add_player(&store, team.id, "Juma", "Baraka", "Keeper").expect("juma");

    aggregate::add_card(&store, amon.id, "L-01", "Rare", 77).expect("add card");

    let after = aggregate::find_team(&store, team.id).expect("team after");
    assert_eq!(after.player(amon.id).expect("amon row").cards.len(), 1);
    assert!(after.player(juma.id).expect("juma row").cards.is_empty());
}

#[test]
fn update_persists_partial_patches_through_the_owning_team() {
    let store = MemoryTeamStore::new();
    let team = aggregate::create_team(&store, "Lions", "Kenya").expect("team");
    let player = aggregate::add_player(&store, team.id, "Amon", "Otieno", "Forward").expect("p");

    // Empty input keeps the field; non-empty replaces it exactly.
    let update = PlayerUpdate::from_input("", "Owino", "");
    aggregate::update_player(&store, player.id, &update).expect("update");

    let after = aggregate::find_team(&store, team.id).expect("after");
    let player_after = after.player(player.id).expect("player row");
    assert_eq!(player_after.first_name, "Amon");
    assert_eq!(player_after.last_name, "Owino");
    assert_eq!(player_after.position, "Forward");

    let update = TeamUpdate::from_input("", "Uganda");
    aggregate::update_team(&store, team.id, &update).expect("team update");
    let after = aggregate::find_team(&store, team.id).expect("after");
    assert_eq!(after.name, "Lions");
    assert_eq!(after.country, "Uganda");
}

#[test]
fn invalid_power_input_leaves_power_unchanged_end_to_end() {
    let store = MemoryTeamStore::new();
    let team = aggregate::create_team(&store, "Lions", "Kenya").expect("team");
    let player = aggregate::add_player(&store, team.id, "Amon", "Otieno", "Forward").expect("p");
    let card = aggregate::add_card(&store, player.id, "L-01", "Rare", 77).expect("card");

    let update = CardUpdate::from_input("", "Ultra Rare", "999");
    let updated = aggregate::update_card(&store, card.id, &update).expect("update");
    assert_eq!(updated.rarity, "Ultra Rare");
    assert_eq!(updated.power, 77);

    let update = CardUpdate::from_input("", "", "90");
    let updated = aggregate::update_card(&store, card.id, &update).expect("update");
    assert_eq!(updated.power, 90);
}

#[test]
fn delete_player_removes_exactly_one_and_persists() {
    let store = MemoryTeamStore::new();
    let team = aggregate::create_team(&store, "Lions", "Kenya").expect("team");
    let amon = aggregate::add_player(&store, team.id, "Amon", "Otieno", "Forward").expect("amon");
    let juma = aggregate::add_player(&store, team.id, "Juma", "Baraka", "Keeper").expect("juma");

    let removed = aggregate::delete_player(&store, amon.id).expect("delete");
    assert_eq!(removed.id, amon.id);

    let after = aggregate::find_team(&store, team.id).expect("after");
    assert_eq!(after.players.len(), 1);
    assert_eq!(after.players[0].id, juma.id);
}

#[test]
fn delete_card_removes_exactly_one_and_persists() {
    let store = MemoryTeamStore::new();
    let team = aggregate::create_team(&store, "Lions", "Kenya").expect("team");
    let player = aggregate::add_player(&store, team.id, "Amon", "Otieno", "Forward").expect("p");
    let keep = aggregate::add_card(&store, player.id, "L-01", "Rare", 77).expect("keep");
    let drop = aggregate::add_card(&store, player.id, "L-02", "Common", 30).expect("drop");

    aggregate::delete_card(&store, drop.id).expect("delete");

    let after = aggregate::find_team(&store, team.id).expect("after");
    let cards = &after.player(player.id).expect("player row").cards;
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, keep.id);
}

#[test]
fn deleting_unknown_ids_is_a_not_found_no_op() {
    let store = MemoryTeamStore::new();
    let team = aggregate::create_team(&store, "Lions", "Kenya").expect("team");
    aggregate::add_player(&store, team.id, "Amon", "Otieno", "Forward").expect("player");
    let before = store.find_all().expect("before");

    for err in [
        aggregate::delete_team(&store, DocumentId::generate()).unwrap_err(),
        aggregate::delete_player(&store, DocumentId::generate()).unwrap_err(),
        aggregate::delete_card(&store, DocumentId::generate()).unwrap_err(),
    ] {
        assert!(matches!(err, CardKeeperError::NotFound(_)));
    }
    assert_eq!(store.find_all().expect("after"), before);
}

#[test]
fn deleting_a_team_takes_its_players_and_cards_with_it() {
    let store = MemoryTeamStore::new();
    let team = aggregate::create_team(&store, "Lions", "Kenya").expect("team");
    let player = aggregate::add_player(&store, team.id, "Amon", "Otieno", "Forward").expect("p");
    aggregate::add_card(&store, player.id, "L-01", "Rare", 77).expect("card");

    aggregate::delete_team(&store, team.id).expect("delete");
    assert!(store.find_all().expect("after").is_empty());
    let err = aggregate::delete_player(&store, player.id).unwrap_err();
    assert!(matches!(err, CardKeeperError::NotFound(_)));
}

#[test]
fn duplicated_ids_across_roots_only_touch_the_first_match() {
    let store = MemoryTeamStore::new();
    let alpha = aggregate::create_team(&store, "Alpha", "Kenya").expect("alpha");
    let beta = aggregate::create_team(&store, "Beta", "Uganda").expect("beta");

    // Force the pathological case the generator is trusted to avoid.
    let twin = Player::new("Same", "Everywhere", "Forward").expect("twin");
    for team_id in [alpha.id, beta.id] {
        let mut team = aggregate::find_team(&store, team_id).expect("team");
        team.players.push(twin.clone());
        store.replace_one(team_id, &team).expect("seed");
    }

    let update = PlayerUpdate::from_input("Changed", "", "");
    aggregate::update_player(&store, twin.id, &update).expect("update");

    let teams = store.find_all().expect("teams");
    assert_eq!(teams[0].players[0].first_name, "Changed");
    assert_eq!(teams[1].players[0].first_name, "Same");
}

#[test]
fn lions_scenario_lists_and_ranks_cards() {
    let store = MemoryTeamStore::new();
    let lions = aggregate::create_team(&store, "Lions", "Kenya").expect("lions");
    let amon = aggregate::add_player(&store, lions.id, "Amon", "Otieno", "Forward").expect("amon");
    aggregate::add_card(&store, amon.id, "L-01", "Rare", 77).expect("card");

    let teams = store.find_all().expect("teams");
    let cards = reports::all_cards(&teams);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].0.full_name(), "Amon Otieno");
    assert_eq!(cards[0].1.power, 77);

    let eagles = aggregate::create_team(&store, "Eagles", "Nigeria").expect("eagles");
    let chidi = aggregate::add_player(&store, eagles.id, "Chidi", "Okafor", "Striker").expect("c");
    aggregate::add_card(&store, chidi.id, "E-09", "Ultra Rare", 90).expect("card");

    let teams = store.find_all().expect("teams");
    let ranked = reports::cards_by_power(&teams);
    let powers: Vec<i64> = ranked.iter().map(|(_, c)| c.power).collect();
    assert_eq!(powers, vec![90, 77]);
}
