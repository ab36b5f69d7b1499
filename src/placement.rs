//! Random layout generation with a bounded retry budget per piece.

use crate::board::{Board, Bomb, Ship};
use crate::grid::{Coord, GridDims};
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// Attempts per piece before generation is abandoned.
pub const MAX_ATTEMPTS: usize = 100;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// No spot satisfied the spacing rule within the attempt budget. Fatal
    /// for the whole generation run; the caller reports the named piece.
    #[error("unable to place {piece} (size {size}) after {attempts} attempts")]
    Exhausted {
        piece: String,
        size: usize,
        attempts: usize,
    },
}

/// Places pieces one at a time. Occupancy holds only the cells of pieces
/// already committed, so a candidate run is tested against its neighbours
/// but never against its own body. Cells join the set only after the whole
/// piece validates.
pub struct Placer<R> {
    dims: GridDims,
    occupied: HashSet<Coord>,
    rng: R,
}

impl<R: Rng> Placer<R> {
    pub fn new(dims: GridDims, rng: R) -> Self {
        Self {
            dims,
            occupied: HashSet::new(),
            rng,
        }
    }

    /// A cell is blocked when it, or any of its eight neighbours, already
    /// holds a committed piece.
    fn is_blocked(&self, coord: Coord) -> bool {
        self.occupied.contains(&coord)
            || self
                .dims
                .neighbors(coord)
                .any(|n| self.occupied.contains(&n))
    }

    /// One attempt at a run of `len` cells: uniform random orientation, then
    /// a uniform random start the run fits from. None when the spacing rule
    /// rejects any cell or the run cannot fit this orientation.
    fn attempt_run(&mut self, len: usize) -> Option<Vec<Coord>> {
        if len == 0 {
            return None;
        }
        let horizontal: bool = self.rng.random();
        let max_col = if horizontal {
            self.dims.width().checked_sub(len)?
        } else {
            self.dims.width() - 1
        };
        let max_row = if horizontal {
            self.dims.height() - 1
        } else {
            self.dims.height().checked_sub(len)?
        };
        let start_col = self.rng.random_range(0..=max_col);
        let start_row = self.rng.random_range(0..=max_row);
        let mut cells = Vec::with_capacity(len);
        for i in 0..len {
            let coord = Coord::new(
                start_col + if horizontal { i } else { 0 },
                start_row + if horizontal { 0 } else { i },
            );
            if self.is_blocked(coord) {
                return None;
            }
            cells.push(coord);
        }
        Some(cells)
    }

    /// Place a straight run of `len` cells, retrying up to the budget.
    pub fn place_run(&mut self, len: usize, label: &str) -> Result<Vec<Coord>, PlacementError> {
        for _ in 0..MAX_ATTEMPTS {
            if let Some(cells) = self.attempt_run(len) {
                self.occupied.extend(cells.iter().copied());
                return Ok(cells);
            }
        }
        Err(PlacementError::Exhausted {
            piece: label.to_string(),
            size: len,
            attempts: MAX_ATTEMPTS,
        })
    }

    /// Place a single cell, retrying up to the budget.
    pub fn place_single(&mut self, label: &str) -> Result<Coord, PlacementError> {
        for _ in 0..MAX_ATTEMPTS {
            let coord = Coord::new(
                self.rng.random_range(0..self.dims.width()),
                self.rng.random_range(0..self.dims.height()),
            );
            if self.is_blocked(coord) {
                continue;
            }
            self.occupied.insert(coord);
            return Ok(coord);
        }
        Err(PlacementError::Exhausted {
            piece: label.to_string(),
            size: 1,
            attempts: MAX_ATTEMPTS,
        })
    }
}

/// Build a fresh board from a ship-length inventory. Ships are placed first
/// in input order, then bombs; identities and question ids are synthesized
/// sequentially (`ship-1`, `q1`, ...).
pub fn generate_board<R: Rng>(
    dims: GridDims,
    ship_lengths: &[usize],
    bomb_count: usize,
    rng: &mut R,
) -> Result<Board, PlacementError> {
    let mut placer = Placer::new(dims, rng);
    let mut next_qid = 0usize;
    let mut qid = move || {
        next_qid += 1;
        format!("q{}", next_qid)
    };

    let mut ships = Vec::with_capacity(ship_lengths.len());
    for (i, &len) in ship_lengths.iter().enumerate() {
        let name = format!("Ship {}", i + 1);
        let cells = placer.place_run(len, &name)?;
        let question_ids = cells.iter().map(|_| qid()).collect();
        ships.push(Ship {
            id: format!("ship-{}", i + 1),
            name,
            cells,
            question_ids,
        });
    }

    let mut bombs = Vec::with_capacity(bomb_count);
    for i in 0..bomb_count {
        let cell = placer.place_single(&format!("bomb {}", i + 1))?;
        bombs.push(Bomb {
            cell,
            question_id: qid(),
        });
    }

    Ok(Board { ships, bombs })
}

/// Re-place an existing board: fresh random coordinates, same piece order,
/// and every id, name and question reference preserved.
pub fn regenerate_board<R: Rng>(
    dims: GridDims,
    board: &Board,
    rng: &mut R,
) -> Result<Board, PlacementError> {
    let mut placer = Placer::new(dims, rng);

    let mut ships = Vec::with_capacity(board.ships.len());
    for ship in &board.ships {
        let cells = placer.place_run(ship.cells.len(), &ship.name)?;
        ships.push(Ship {
            id: ship.id.clone(),
            name: ship.name.clone(),
            cells,
            question_ids: ship.question_ids.clone(),
        });
    }

    let mut bombs = Vec::with_capacity(board.bombs.len());
    for (i, bomb) in board.bombs.iter().enumerate() {
        let cell = placer.place_single(&format!("bomb {}", i + 1))?;
        bombs.push(Bomb {
            cell,
            question_id: bomb.question_id.clone(),
        });
    }

    Ok(Board { ships, bombs })
}
