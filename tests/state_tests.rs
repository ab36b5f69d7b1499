use quizship::{generate_board, Coord, GameState, GridDims, TeamId};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn coord(s: &str) -> Coord {
    s.parse().unwrap()
}

fn started() -> GameState {
    let mut state = GameState::new();
    state.start_game("Red", "Blue");
    state
}

#[test]
fn start_game_opens_with_team_one_and_zero_scores() {
    let state = started();
    assert!(state.game_started);
    assert_eq!(state.current_turn, TeamId::One);
    assert_eq!(state.team1.name, "Red");
    assert_eq!(state.team2.name, "Blue");
    assert_eq!(state.team1.score, 0);
    assert_eq!(state.team2.score, 0);
    assert!(state.probed_cells.is_empty());
    assert!(state.resolved_questions.is_empty());
}

#[test]
fn probe_then_revert_restores_the_probed_set() {
    let mut state = started();
    state.award_team(TeamId::One, 5);
    let scores = (state.team1.score, state.team2.score);
    let turn = state.current_turn;

    state.probe_cell(coord("C3"));
    assert!(state.probed_cells.contains(&coord("C3")));
    state.revert_probe(coord("C3"));
    assert!(!state.probed_cells.contains(&coord("C3")));

    assert_eq!((state.team1.score, state.team2.score), scores);
    assert_eq!(state.current_turn, turn);
}

#[test]
fn awards_target_the_right_team() {
    let mut state = started();
    state.award_team(TeamId::One, 3);
    state.award_team(TeamId::Two, 7);
    assert_eq!(state.team1.score, 3);
    assert_eq!(state.team2.score, 7);

    state.award_both(2);
    assert_eq!(state.team1.score, 5);
    assert_eq!(state.team2.score, 9);
}

#[test]
fn scores_saturate_instead_of_wrapping() {
    let mut state = started();
    state.award_team(TeamId::One, u32::MAX);
    state.award_team(TeamId::One, 10);
    assert_eq!(state.team1.score, u32::MAX);
}

#[test]
fn switch_turn_flips_between_the_two_teams() {
    let mut state = started();
    state.switch_turn();
    assert_eq!(state.current_turn, TeamId::Two);
    state.switch_turn();
    assert_eq!(state.current_turn, TeamId::One);
}

#[test]
fn mark_resolved_is_idempotent() {
    let mut state = started();
    state.mark_resolved("q1");
    state.mark_resolved("q1");
    assert!(state.is_resolved("q1"));
    assert_eq!(state.resolved_questions.len(), 1);
}

#[test]
fn enabling_edit_mode_forces_view_mode_on() {
    let mut state = started();
    assert!(!state.view_mode);
    state.toggle_edit_mode();
    assert!(state.edit_mode);
    assert!(state.view_mode);

    // Disabling edit leaves view as-is.
    state.toggle_edit_mode();
    assert!(!state.edit_mode);
    assert!(state.view_mode);

    state.toggle_view_mode();
    assert!(!state.view_mode);
}

#[test]
fn reset_is_idempotent() {
    let mut state = started();
    state.award_both(4);
    state.probe_cell(coord("A1"));
    state.mark_resolved("q1");
    state.switch_turn();

    state.reset();
    let once = state.clone();
    state.reset();

    assert_eq!(state.team1.score, once.team1.score);
    assert_eq!(state.team1.name, "");
    assert_eq!(state.team2.name, "");
    assert_eq!(state.current_turn, TeamId::One);
    assert!(state.probed_cells.is_empty());
    assert!(state.resolved_questions.is_empty());
    assert!(!state.game_started);
}

#[test]
fn load_saved_replaces_the_state_wholesale() {
    let mut saved = started();
    saved.award_team(TeamId::Two, 12);
    saved.probe_cell(coord("E5"));
    saved.switch_turn();

    let mut state = GameState::new();
    state.load_saved(saved.clone());
    assert_eq!(state, saved);
}

#[test]
fn completion_flips_exactly_at_the_last_piece_cell() {
    let dims = GridDims::new(10, 10).unwrap();
    let mut rng = SmallRng::seed_from_u64(99);
    let board = generate_board(dims, &[4, 3, 3, 2, 2, 2, 1, 1, 1, 1], 3, &mut rng).unwrap();
    // 20 ship cells plus 3 bombs.
    assert_eq!(board.piece_cell_count(), 23);

    let mut state = started();
    let cells: Vec<Coord> = board.piece_cells().collect();
    for (i, &cell) in cells.iter().enumerate() {
        assert!(!state.is_completed(&board), "complete after {} probes", i);
        state.probe_cell(cell);
    }
    assert!(state.is_completed(&board));
}

#[test]
fn an_empty_board_is_never_completed() {
    let state = started();
    assert!(!state.is_completed(&quizship::Board::default()));
}

#[test]
fn leader_reports_the_higher_score_or_a_tie() {
    let mut state = started();
    assert_eq!(state.leader(), None);
    state.award_team(TeamId::One, 2);
    assert_eq!(state.leader(), Some(TeamId::One));
    state.award_team(TeamId::Two, 5);
    assert_eq!(state.leader(), Some(TeamId::Two));
}

#[test]
fn state_round_trips_through_json() {
    let mut state = started();
    state.probe_cell(coord("B4"));
    state.mark_resolved("q7");
    state.toggle_view_mode();

    let text = serde_json::to_string(&state).unwrap();
    assert!(text.contains("\"currentTurn\":1"));
    assert!(text.contains("\"probedCells\""));
    let back: GameState = serde_json::from_str(&text).unwrap();
    assert_eq!(back, state);
}
