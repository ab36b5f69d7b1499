use quizship::store::{self, StoreError};
use quizship::{Coord, GameState, TeamId};
use tempfile::tempdir;

fn coord(s: &str) -> Coord {
    s.parse().unwrap()
}

#[test]
fn save_then_load_round_trips_the_state() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("save.json");

    let mut state = GameState::new();
    state.start_game("Red", "Blue");
    state.probe_cell(coord("C3"));
    state.award_team(TeamId::Two, 6);
    state.mark_resolved("q4");
    state.switch_turn();

    store::save(&path, &state).unwrap();
    let loaded = store::load(&path).unwrap().unwrap();
    assert_eq!(loaded, state);
}

#[test]
fn missing_save_file_means_nothing_to_resume() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.json");
    assert!(store::load(&path).unwrap().is_none());
    assert!(!store::exists(&path));
}

#[test]
fn corrupt_save_file_is_reported_not_swallowed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("save.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        store::load(&path),
        Err(StoreError::Corrupt { .. })
    ));
}

#[test]
fn clear_removes_the_file_and_tolerates_absence() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("save.json");

    let state = GameState::new();
    store::save(&path, &state).unwrap();
    assert!(store::exists(&path));

    store::clear(&path).unwrap();
    assert!(!store::exists(&path));
    // Clearing again is fine.
    store::clear(&path).unwrap();
}
