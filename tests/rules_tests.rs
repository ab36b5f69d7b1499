use quizship::{
    probe, resolve, Board, Bomb, Coord, Difficulty, GameEvent, GameState, PieceKind,
    ProbeOutcome, Question, QuestionKind, Ship, TeamId, Verdict,
};

fn coord(s: &str) -> Coord {
    s.parse().unwrap()
}

fn question(id: &str, kind: QuestionKind, points: u32) -> Question {
    Question {
        id: id.to_string(),
        category: "History".to_string(),
        kind,
        difficulty: Difficulty::Easy,
        points,
        question: "?".to_string(),
        answer: "!".to_string(),
        media_path: None,
        answer_images: None,
    }
}

fn sample_board() -> Board {
    Board {
        ships: vec![Ship {
            id: "ship-1".to_string(),
            name: "Cruiser".to_string(),
            cells: vec![coord("B2"), coord("C2")],
            question_ids: vec!["q1".to_string(), "q2".to_string()],
        }],
        bombs: vec![Bomb {
            cell: coord("H8"),
            question_id: "q3".to_string(),
        }],
    }
}

fn started() -> GameState {
    let mut state = GameState::new();
    state.start_game("Red", "Blue");
    state
}

#[test]
fn a_miss_switches_the_turn_immediately() {
    let board = sample_board();
    let mut state = started();
    assert_eq!(probe(&mut state, &board, coord("A9")), ProbeOutcome::Miss);
    assert_eq!(state.current_turn, TeamId::Two);
    assert!(state.probed_cells.contains(&coord("A9")));
}

#[test]
fn turn_parity_over_a_run_of_misses() {
    let board = sample_board();
    let empties = ["A5", "A6", "A7", "A8", "A9"];
    for n in 0..empties.len() {
        let mut state = started();
        for cell in &empties[..n] {
            probe(&mut state, &board, coord(cell));
        }
        let expected = if n % 2 == 0 { TeamId::One } else { TeamId::Two };
        assert_eq!(state.current_turn, expected, "after {} misses", n);
    }
}

#[test]
fn probing_a_piece_waits_for_a_verdict() {
    let board = sample_board();
    let mut state = started();
    assert_eq!(
        probe(&mut state, &board, coord("B2")),
        ProbeOutcome::Question {
            kind: PieceKind::Ship,
            question_id: "q1".to_string()
        }
    );
    assert_eq!(state.current_turn, TeamId::One);
    assert_eq!(state.team1.score, 0);
}

#[test]
fn correct_ship_answer_scores_and_keeps_the_turn() {
    let board = sample_board();
    let mut state = started();
    probe(&mut state, &board, coord("B2"));
    let q = question("q1", QuestionKind::Text, 3);
    let events = resolve(&mut state, &board, coord("B2"), &q, Verdict::Correct);
    assert_eq!(state.team1.score, 3);
    assert_eq!(state.team2.score, 0);
    assert_eq!(state.current_turn, TeamId::One);
    assert!(state.is_resolved("q1"));
    assert_eq!(events, vec![GameEvent::Correct]);
}

#[test]
fn wrong_answer_switches_the_turn_and_resolves_the_question() {
    let board = sample_board();
    let mut state = started();
    probe(&mut state, &board, coord("B2"));
    let q = question("q1", QuestionKind::Text, 3);
    let events = resolve(&mut state, &board, coord("B2"), &q, Verdict::Wrong);
    assert_eq!(state.team1.score, 0);
    assert_eq!(state.current_turn, TeamId::Two);
    assert!(state.is_resolved("q1"));
    assert!(state.probed_cells.contains(&coord("B2")));
    assert_eq!(events, vec![GameEvent::Wrong]);
}

#[test]
fn skip_reverts_the_probe_and_switches_the_turn() {
    let board = sample_board();
    let mut state = started();
    probe(&mut state, &board, coord("B2"));
    let q = question("q1", QuestionKind::Text, 3);
    let events = resolve(&mut state, &board, coord("B2"), &q, Verdict::Skipped);
    assert!(!state.probed_cells.contains(&coord("B2")));
    assert!(!state.is_resolved("q1"));
    assert_eq!(state.current_turn, TeamId::Two);
    assert!(events.is_empty());
}

#[test]
fn a_correct_bomb_answer_scores_but_still_costs_the_turn() {
    let board = sample_board();
    let mut state = started();
    assert_eq!(
        probe(&mut state, &board, coord("H8")),
        ProbeOutcome::Question {
            kind: PieceKind::Bomb,
            question_id: "q3".to_string()
        }
    );
    let q = question("q3", QuestionKind::Text, 5);
    resolve(&mut state, &board, coord("H8"), &q, Verdict::Correct);
    assert_eq!(state.team1.score, 5);
    assert_eq!(state.current_turn, TeamId::Two);
}

#[test]
fn together_questions_award_both_teams_and_never_switch() {
    let board = sample_board();
    let mut state = started();
    probe(&mut state, &board, coord("B2"));
    let q = question("q1", QuestionKind::Together, 4);
    resolve(&mut state, &board, coord("B2"), &q, Verdict::Correct);
    assert_eq!(state.team1.score, 4);
    assert_eq!(state.team2.score, 4);
    assert_eq!(state.current_turn, TeamId::One);
}

#[test]
fn transfer_switches_the_turn_but_leaves_the_question_pending() {
    let board = sample_board();
    let mut state = started();
    probe(&mut state, &board, coord("B2"));
    let q = question("q1", QuestionKind::Text, 3);
    let events = resolve(&mut state, &board, coord("B2"), &q, Verdict::Transferred);
    assert!(events.is_empty());
    assert_eq!(state.current_turn, TeamId::Two);
    assert!(state.probed_cells.contains(&coord("B2")));
    assert!(!state.is_resolved("q1"));

    // The other team answers the same pending question.
    resolve(&mut state, &board, coord("B2"), &q, Verdict::Correct);
    assert_eq!(state.team2.score, 3);
    assert_eq!(state.current_turn, TeamId::Two);
}

#[test]
fn a_steal_leaves_the_turn_with_the_stealing_team() {
    let q_ship = question("q1", QuestionKind::Text, 3);
    let q_bomb = question("q3", QuestionKind::Text, 5);

    // Ship cell, stolen by the non-active team: they take the turn.
    let board = sample_board();
    let mut state = started();
    probe(&mut state, &board, coord("B2"));
    resolve(&mut state, &board, coord("B2"), &q_ship, Verdict::StolenBy(TeamId::Two));
    assert_eq!(state.team2.score, 3);
    assert_eq!(state.team1.score, 0);
    assert_eq!(state.current_turn, TeamId::Two);

    // Ship cell credited to the active team behaves like a plain correct
    // answer: the turn stays.
    let mut state = started();
    probe(&mut state, &board, coord("B2"));
    resolve(&mut state, &board, coord("B2"), &q_ship, Verdict::StolenBy(TeamId::One));
    assert_eq!(state.team1.score, 3);
    assert_eq!(state.current_turn, TeamId::One);

    // Bomb cell stolen by the other team: the bomb passes the turn to them
    // anyway, so it simply stays there.
    let mut state = started();
    probe(&mut state, &board, coord("H8"));
    resolve(&mut state, &board, coord("H8"), &q_bomb, Verdict::StolenBy(TeamId::Two));
    assert_eq!(state.team2.score, 5);
    assert_eq!(state.current_turn, TeamId::Two);
}

#[test]
fn verdicts_for_empty_cells_are_ignored() {
    let board = sample_board();
    let mut state = started();
    let q = question("q1", QuestionKind::Text, 3);
    let events = resolve(&mut state, &board, coord("A9"), &q, Verdict::Correct);
    assert!(events.is_empty());
    assert_eq!(state.team1.score, 0);
    assert_eq!(state.current_turn, TeamId::One);
}

#[test]
fn victory_fires_when_the_last_piece_cell_is_resolved() {
    let board = sample_board();
    let mut state = started();

    let q1 = question("q1", QuestionKind::Text, 2);
    probe(&mut state, &board, coord("B2"));
    resolve(&mut state, &board, coord("B2"), &q1, Verdict::Correct);

    let q2 = question("q2", QuestionKind::Text, 2);
    probe(&mut state, &board, coord("C2"));
    resolve(&mut state, &board, coord("C2"), &q2, Verdict::Correct);

    let q3 = question("q3", QuestionKind::Text, 1);
    probe(&mut state, &board, coord("H8"));
    let events = resolve(&mut state, &board, coord("H8"), &q3, Verdict::Wrong);
    assert!(state.is_completed(&board));
    assert_eq!(
        events,
        vec![
            GameEvent::Wrong,
            GameEvent::Victory {
                winner: Some(TeamId::One)
            }
        ]
    );
}
