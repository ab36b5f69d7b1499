//! Static board data: ships and bombs, and what a coordinate holds.

use crate::grid::{Coord, GridDims};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A run of cells hiding one question per cell. `question_ids` is parallel
/// to `cells`; the cells form one straight contiguous run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub id: String,
    pub name: String,
    pub cells: Vec<Coord>,
    pub question_ids: Vec<String>,
}

impl Ship {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Single-cell piece whose question switches the turn even when answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bomb {
    pub cell: Coord,
    pub question_id: String,
}

/// What a coordinate turned out to hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    Empty,
    Ship { question_id: String },
    Bomb { question_id: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("ship '{0}' has {1} cells but {2} question ids")]
    QuestionArity(String, usize, usize),
    #[error("cell {0} is used by more than one piece")]
    OverlappingCell(Coord),
    #[error("cell {0} lies outside the {1}x{2} grid")]
    OutOfBounds(Coord, usize, usize),
    #[error("ship '{0}' cells are not one straight contiguous run")]
    BrokenRun(String),
    #[error("no ship or bomb occupies {0}")]
    NotAPiece(Coord),
}

/// All placed pieces. Read-only at runtime except for question reassignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub ships: Vec<Ship>,
    pub bombs: Vec<Bomb>,
}

impl Board {
    /// Classify a coordinate: bombs take precedence, then ships in storage
    /// order. Total and deterministic.
    pub fn classify(&self, coord: Coord) -> CellContent {
        if let Some(bomb) = self.bombs.iter().find(|b| b.cell == coord) {
            return CellContent::Bomb {
                question_id: bomb.question_id.clone(),
            };
        }
        for ship in &self.ships {
            if let Some(idx) = ship.cells.iter().position(|&c| c == coord) {
                // A cell past the question list (an arity mismatch validate
                // would have caught) classifies as empty rather than panic.
                return match ship.question_ids.get(idx) {
                    Some(question_id) => CellContent::Ship {
                        question_id: question_id.clone(),
                    },
                    None => CellContent::Empty,
                };
            }
        }
        CellContent::Empty
    }

    /// The ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ships.iter().find(|s| s.cells.contains(&coord))
    }

    /// Every ship and bomb cell, ships first in storage order.
    pub fn piece_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.ships
            .iter()
            .flat_map(|s| s.cells.iter().copied())
            .chain(self.bombs.iter().map(|b| b.cell))
    }

    pub fn piece_cell_count(&self) -> usize {
        self.ships.iter().map(Ship::len).sum::<usize>() + self.bombs.len()
    }

    /// Every question id referenced by a piece, in piece order.
    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.ships
            .iter()
            .flat_map(|s| s.question_ids.iter().map(String::as_str))
            .chain(self.bombs.iter().map(|b| b.question_id.as_str()))
    }

    /// Swap the question reference at a ship or bomb cell. The occupancy
    /// layout never changes through this path.
    pub fn assign_question(&mut self, coord: Coord, question_id: &str) -> Result<(), BoardError> {
        if let Some(bomb) = self.bombs.iter_mut().find(|b| b.cell == coord) {
            bomb.question_id = question_id.to_string();
            return Ok(());
        }
        for ship in &mut self.ships {
            if let Some(idx) = ship.cells.iter().position(|&c| c == coord) {
                ship.question_ids[idx] = question_id.to_string();
                return Ok(());
            }
        }
        Err(BoardError::NotAPiece(coord))
    }

    /// Check the invariants hand-authored data files can break: question
    /// arity, straight runs, bounds, and single occupancy per cell.
    pub fn validate(&self, dims: GridDims) -> Result<(), BoardError> {
        let mut seen = HashSet::new();
        for ship in &self.ships {
            if ship.cells.len() != ship.question_ids.len() {
                return Err(BoardError::QuestionArity(
                    ship.id.clone(),
                    ship.cells.len(),
                    ship.question_ids.len(),
                ));
            }
            if !is_straight_run(&ship.cells) {
                return Err(BoardError::BrokenRun(ship.id.clone()));
            }
            for &cell in &ship.cells {
                if !dims.contains(cell) {
                    return Err(BoardError::OutOfBounds(cell, dims.width(), dims.height()));
                }
                if !seen.insert(cell) {
                    return Err(BoardError::OverlappingCell(cell));
                }
            }
        }
        for bomb in &self.bombs {
            if !dims.contains(bomb.cell) {
                return Err(BoardError::OutOfBounds(
                    bomb.cell,
                    dims.width(),
                    dims.height(),
                ));
            }
            if !seen.insert(bomb.cell) {
                return Err(BoardError::OverlappingCell(bomb.cell));
            }
        }
        Ok(())
    }
}

/// Ascending horizontal or vertical run with no gaps. Cell order in the
/// data files is the run order.
fn is_straight_run(cells: &[Coord]) -> bool {
    match cells.len() {
        0 => false,
        1 => true,
        _ => {
            let horizontal = cells
                .windows(2)
                .all(|w| w[1].row == w[0].row && w[1].col == w[0].col + 1);
            let vertical = cells
                .windows(2)
                .all(|w| w[1].col == w[0].col && w[1].row == w[0].row + 1);
            horizontal || vertical
        }
    }
}
