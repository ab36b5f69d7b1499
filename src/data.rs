//! Game data files: a questions catalog plus the placed ships and bombs,
//! one directory per game mode.

use crate::board::{Board, BoardError, Bomb, Ship};
use crate::grid::GridDims;
use crate::question::Question;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub const QUESTIONS_FILE: &str = "questions.json";
pub const SHIPS_FILE: &str = "ships.json";
pub const BOMBS_FILE: &str = "bombs.json";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot access {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid data in {}: {}", path.display(), source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Board(#[from] BoardError),
}

#[derive(Debug, Serialize, Deserialize)]
struct QuestionsFile {
    questions: Vec<Question>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ShipsFile {
    ships: Vec<Ship>,
}

#[derive(Debug, Serialize, Deserialize)]
struct BombsFile {
    bombs: Vec<Bomb>,
}

/// Everything a hosted game needs, loaded and validated.
#[derive(Debug)]
pub struct GameData {
    pub questions: Vec<Question>,
    pub board: Board,
}

impl GameData {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let text = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), DataError> {
    let text = serde_json::to_string_pretty(value).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a full game data directory.
pub fn load_game_data(dir: &Path, dims: GridDims) -> Result<GameData, DataError> {
    let questions: QuestionsFile = read_json(&dir.join(QUESTIONS_FILE))?;
    let board = load_board(dir)?;
    board.validate(dims)?;
    for id in board.question_ids() {
        if !questions.questions.iter().any(|q| q.id == id) {
            warn!(question = id, "piece references a question not in the catalog");
        }
    }
    info!(
        questions = questions.questions.len(),
        ships = board.ships.len(),
        bombs = board.bombs.len(),
        "game data loaded"
    );
    Ok(GameData {
        questions: questions.questions,
        board,
    })
}

/// Load just the board files, without bounds validation. Regeneration only
/// needs piece identities and lengths.
pub fn load_board(dir: &Path) -> Result<Board, DataError> {
    let ships: ShipsFile = read_json(&dir.join(SHIPS_FILE))?;
    let bombs: BombsFile = read_json(&dir.join(BOMBS_FILE))?;
    Ok(Board {
        ships: ships.ships,
        bombs: bombs.bombs,
    })
}

/// Load just the questions catalog.
pub fn load_questions(dir: &Path) -> Result<Vec<Question>, DataError> {
    let questions: QuestionsFile = read_json(&dir.join(QUESTIONS_FILE))?;
    Ok(questions.questions)
}

/// Write the board back out as `ships.json` and `bombs.json`.
pub fn save_board(dir: &Path, board: &Board) -> Result<(), DataError> {
    write_json(
        &dir.join(SHIPS_FILE),
        &ShipsFile {
            ships: board.ships.clone(),
        },
    )?;
    write_json(
        &dir.join(BOMBS_FILE),
        &BombsFile {
            bombs: board.bombs.clone(),
        },
    )
}
