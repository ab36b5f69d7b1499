//! Probe resolution and the turn-switching policy.
//!
//! Misses pass the turn immediately. A piece cell opens a question; the
//! host collects a verdict and applies it here. A correct answer on a ship
//! keeps the turn, everything else passes it, and bombs pass it even when
//! answered correctly. A steal credits the named team and leaves the turn
//! with it.

use crate::board::{Board, CellContent};
use crate::grid::Coord;
use crate::question::{Question, QuestionKind};
use crate::state::{GameState, TeamId};
use tracing::{debug, warn};

/// Which kind of piece a probe uncovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Ship,
    Bomb,
}

/// Immediate result of probing a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Empty water. The turn has already passed to the other team.
    Miss,
    /// A piece holding a question. The host presents it and reports a
    /// verdict through [`resolve`].
    Question {
        kind: PieceKind,
        question_id: String,
    },
}

impl ProbeOutcome {
    pub fn event(&self) -> GameEvent {
        match self {
            ProbeOutcome::Miss => GameEvent::Miss,
            ProbeOutcome::Question { .. } => GameEvent::Hit,
        }
    }
}

/// Host judgement on a presented question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The active team answered correctly.
    Correct,
    /// The active team answered incorrectly.
    Wrong,
    /// Question withdrawn: the probe is reverted, the question stays
    /// available, and the turn passes.
    Skipped,
    /// Handed to the other team unanswered; the question stays pending and
    /// a further verdict is expected.
    Transferred,
    /// The named team answered out of turn. It takes the points and probes
    /// next.
    StolenBy(TeamId),
}

/// Feedback events for the host's audio/visual layer. Delivery failures on
/// that layer must never feed back into state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Miss,
    Hit,
    Correct,
    Wrong,
    Victory { winner: Option<TeamId> },
}

/// Record a probe and classify the cell. Empty cells switch the turn here;
/// piece cells wait for a verdict.
pub fn probe(state: &mut GameState, board: &Board, coord: Coord) -> ProbeOutcome {
    state.probe_cell(coord);
    match board.classify(coord) {
        CellContent::Empty => {
            state.switch_turn();
            ProbeOutcome::Miss
        }
        CellContent::Ship { question_id } => ProbeOutcome::Question {
            kind: PieceKind::Ship,
            question_id,
        },
        CellContent::Bomb { question_id } => ProbeOutcome::Question {
            kind: PieceKind::Bomb,
            question_id,
        },
    }
}

fn award(state: &mut GameState, question: &Question, team: TeamId) {
    if question.kind == QuestionKind::Together {
        state.award_both(question.points);
    } else {
        state.award_team(team, question.points);
    }
}

/// Apply a verdict for the question uncovered at `coord`.
///
/// Skipped and transferred questions stay unresolved; a transfer keeps the
/// question pending, so completion is only checked once a concluding
/// verdict lands.
pub fn resolve(
    state: &mut GameState,
    board: &Board,
    coord: Coord,
    question: &Question,
    verdict: Verdict,
) -> Vec<GameEvent> {
    let kind = match board.classify(coord) {
        CellContent::Bomb { .. } => PieceKind::Bomb,
        CellContent::Ship { .. } => PieceKind::Ship,
        CellContent::Empty => {
            warn!(%coord, "verdict for an empty cell ignored");
            return Vec::new();
        }
    };
    debug!(%coord, ?kind, ?verdict, question = %question.id, "verdict applied");

    let mut events = Vec::new();
    match verdict {
        Verdict::Correct => {
            let team = state.current_turn;
            award(state, question, team);
            state.mark_resolved(&question.id);
            if kind == PieceKind::Bomb {
                state.switch_turn();
            }
            events.push(GameEvent::Correct);
        }
        Verdict::Wrong => {
            state.mark_resolved(&question.id);
            state.switch_turn();
            events.push(GameEvent::Wrong);
        }
        Verdict::Skipped => {
            state.revert_probe(coord);
            state.switch_turn();
        }
        Verdict::Transferred => {
            state.switch_turn();
        }
        Verdict::StolenBy(team) => {
            // Baseline turn rule first (bomb switches, ship keeps), then one
            // more switch only when the credited team is not the baseline
            // keeper. Net effect: the stealing team probes next.
            let keeper = match kind {
                PieceKind::Ship => state.current_turn,
                PieceKind::Bomb => state.current_turn.other(),
            };
            award(state, question, team);
            state.mark_resolved(&question.id);
            if kind == PieceKind::Bomb {
                state.switch_turn();
            }
            if team != keeper {
                state.switch_turn();
            }
            events.push(GameEvent::Correct);
        }
    }

    let concluded = matches!(
        verdict,
        Verdict::Correct | Verdict::Wrong | Verdict::StolenBy(_)
    );
    if concluded && state.is_completed(board) {
        events.push(GameEvent::Victory {
            winner: state.leader(),
        });
    }
    events
}
