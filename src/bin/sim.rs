//! Seeded end-to-end simulation: generate a board, play random probes with
//! random verdicts until the board is complete, print a JSON summary.

use anyhow::anyhow;
use quizship::{
    generate_board, probe, resolve, Coord, Difficulty, GameState, GridDims, ProbeOutcome,
    Question, QuestionKind, Verdict,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

const SHIP_LENGTHS: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];
const BOMB_COUNT: usize = 3;

fn synth_question(index: usize, id: &str) -> Question {
    Question {
        id: id.to_string(),
        category: "General".to_string(),
        kind: if index % 7 == 0 {
            QuestionKind::Together
        } else {
            QuestionKind::Text
        },
        difficulty: Difficulty::Medium,
        points: (index % 3 + 1) as u32,
        question: format!("Simulated question {}", index + 1),
        answer: format!("Answer {}", index + 1),
        media_path: None,
        answer_images: None,
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let dims = GridDims::new(10, 10)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    let board = generate_board(dims, &SHIP_LENGTHS, BOMB_COUNT, &mut rng)?;
    let questions: Vec<Question> = board
        .question_ids()
        .enumerate()
        .map(|(i, id)| synth_question(i, id))
        .collect();

    let mut state = GameState::new();
    state.start_game("Alpha", "Bravo");

    let mut probes = 0usize;
    while !state.is_completed(&board) {
        let remaining: Vec<Coord> = dims
            .coords()
            .filter(|c| !state.probed_cells.contains(c))
            .collect();
        let coord = remaining[rng.random_range(0..remaining.len())];
        probes += 1;
        if let ProbeOutcome::Question { question_id, .. } = probe(&mut state, &board, coord) {
            let question = questions
                .iter()
                .find(|q| q.id == question_id)
                .ok_or_else(|| anyhow!("board references unknown question {}", question_id))?;
            let verdict = if rng.random() {
                Verdict::Correct
            } else {
                Verdict::Wrong
            };
            resolve(&mut state, &board, coord, question, verdict);
        }
    }

    let winner = state.leader().map(|id| state.team(id).name.clone());
    let result = json!({
        "seed": seed,
        "probes": probes,
        "team1": {"name": state.team1.name, "score": state.team1.score},
        "team2": {"name": state.team2.name, "score": state.team2.score},
        "winner": winner,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
