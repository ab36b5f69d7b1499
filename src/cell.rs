//! Pure projection from board data plus interaction history to per-cell
//! display state. Never mutates anything.

use crate::board::{Board, CellContent};
use crate::grid::Coord;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStatus {
    Untouched,
    Miss,
    Hit,
    Sunk,
    Bomb,
    RevealedShip,
    RevealedBomb,
}

impl CellStatus {
    /// Whether the status itself allows a probe. The host still guards
    /// against re-probing, since view mode reveals probed cells too.
    pub fn is_probeable(self) -> bool {
        matches!(
            self,
            CellStatus::Untouched | CellStatus::RevealedShip | CellStatus::RevealedBomb
        )
    }
}

/// Status of one cell. View mode shows every piece cell as revealed
/// regardless of probe history; empty cells keep their normal status.
/// A probed ship cell reads Sunk only once all of that ship's cells are
/// probed.
pub fn cell_status(
    coord: Coord,
    board: &Board,
    probed: &HashSet<Coord>,
    view_mode: bool,
) -> CellStatus {
    let content = board.classify(coord);
    if view_mode {
        match content {
            CellContent::Ship { .. } => return CellStatus::RevealedShip,
            CellContent::Bomb { .. } => return CellStatus::RevealedBomb,
            CellContent::Empty => {}
        }
    }
    if !probed.contains(&coord) {
        return CellStatus::Untouched;
    }
    match content {
        CellContent::Empty => CellStatus::Miss,
        CellContent::Bomb { .. } => CellStatus::Bomb,
        CellContent::Ship { .. } => {
            let sunk = board
                .ship_at(coord)
                .map(|ship| ship.cells.iter().all(|c| probed.contains(c)))
                .unwrap_or(false);
            if sunk {
                CellStatus::Sunk
            } else {
                CellStatus::Hit
            }
        }
    }
}
