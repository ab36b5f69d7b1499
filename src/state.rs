//! Live game state and its transitions.
//!
//! The state is an explicit value the host owns: construct at session
//! start, persist after every transition, discard on reset. Mutate through
//! the transition methods so `last_update` stays accurate.

use crate::board::Board;
use crate::grid::Coord;
use chrono::{DateTime, Utc};
use core::cmp::Ordering;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// One of the two competing teams. Serializes as `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TeamId {
    One,
    Two,
}

impl TeamId {
    pub fn other(self) -> TeamId {
        match self {
            TeamId::One => TeamId::Two,
            TeamId::Two => TeamId::One,
        }
    }
}

impl From<TeamId> for u8 {
    fn from(id: TeamId) -> u8 {
        match id {
            TeamId::One => 1,
            TeamId::Two => 2,
        }
    }
}

impl TryFrom<u8> for TeamId {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(TeamId::One),
            2 => Ok(TeamId::Two),
            other => Err(format!("invalid team number {}", other)),
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team {}", u8::from(*self))
    }
}

/// Scores are unsigned and additions saturate, so no transition can drive
/// a score negative or wrap it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub team1: Team,
    pub team2: Team,
    pub current_turn: TeamId,
    pub probed_cells: HashSet<Coord>,
    pub resolved_questions: HashSet<String>,
    pub game_started: bool,
    pub view_mode: bool,
    pub edit_mode: bool,
    pub last_update: DateTime<Utc>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            team1: Team::default(),
            team2: Team::default(),
            current_turn: TeamId::One,
            probed_cells: HashSet::new(),
            resolved_questions: HashSet::new(),
            game_started: false,
            view_mode: false,
            edit_mode: false,
            last_update: Utc::now(),
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    fn touch(&mut self) {
        self.last_update = Utc::now();
    }

    pub fn team(&self, id: TeamId) -> &Team {
        match id {
            TeamId::One => &self.team1,
            TeamId::Two => &self.team2,
        }
    }

    fn team_mut(&mut self, id: TeamId) -> &mut Team {
        match id {
            TeamId::One => &mut self.team1,
            TeamId::Two => &mut self.team2,
        }
    }

    pub fn current_team(&self) -> &Team {
        self.team(self.current_turn)
    }

    /// Fresh game: zeroed scores, cleared history, team one opens.
    pub fn start_game(&mut self, team1_name: &str, team2_name: &str) {
        self.team1 = Team {
            name: team1_name.to_string(),
            score: 0,
        };
        self.team2 = Team {
            name: team2_name.to_string(),
            score: 0,
        };
        self.current_turn = TeamId::One;
        self.probed_cells.clear();
        self.resolved_questions.clear();
        self.game_started = true;
        self.view_mode = false;
        self.edit_mode = false;
        self.touch();
        debug!(team1 = team1_name, team2 = team2_name, "game started");
    }

    /// Record a probe. Scores and turn are untouched; the caller classifies
    /// the cell and drives the consequences.
    pub fn probe_cell(&mut self, coord: Coord) {
        self.probed_cells.insert(coord);
        self.touch();
        debug!(%coord, "cell probed");
    }

    /// Forget a probe, e.g. when its question is skipped. Scores and turn
    /// are untouched.
    pub fn revert_probe(&mut self, coord: Coord) {
        self.probed_cells.remove(&coord);
        self.touch();
        debug!(%coord, "probe reverted");
    }

    pub fn award_team(&mut self, id: TeamId, points: u32) {
        let team = self.team_mut(id);
        team.score = team.score.saturating_add(points);
        self.touch();
        debug!(team = %id, points, "points awarded");
    }

    pub fn award_both(&mut self, points: u32) {
        self.team1.score = self.team1.score.saturating_add(points);
        self.team2.score = self.team2.score.saturating_add(points);
        self.touch();
        debug!(points, "points awarded to both teams");
    }

    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.other();
        self.touch();
        debug!(turn = %self.current_turn, "turn switched");
    }

    /// Idempotent: marking an already-resolved question changes nothing
    /// but the timestamp.
    pub fn mark_resolved(&mut self, question_id: &str) {
        self.resolved_questions.insert(question_id.to_string());
        self.touch();
    }

    pub fn is_resolved(&self, question_id: &str) -> bool {
        self.resolved_questions.contains(question_id)
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = !self.view_mode;
        self.touch();
    }

    /// Enabling edit mode forces view mode on; disabling it leaves view
    /// mode as it was.
    pub fn toggle_edit_mode(&mut self) {
        self.edit_mode = !self.edit_mode;
        if self.edit_mode {
            self.view_mode = true;
        }
        self.touch();
    }

    /// Back to the initial state: zeroed scores, empty sets, names cleared.
    pub fn reset(&mut self) {
        *self = GameState::default();
        debug!("game reset");
    }

    /// Wholesale replacement with a previously saved state.
    pub fn load_saved(&mut self, saved: GameState) {
        *self = saved;
        debug!("saved game loaded");
    }

    /// Derived, never stored: the game is complete when every ship and
    /// bomb cell has been probed.
    pub fn is_completed(&self, board: &Board) -> bool {
        board.piece_cell_count() > 0
            && board.piece_cells().all(|c| self.probed_cells.contains(&c))
    }

    /// Team with the higher score, or None on a tie.
    pub fn leader(&self) -> Option<TeamId> {
        match self.team1.score.cmp(&self.team2.score) {
            Ordering::Greater => Some(TeamId::One),
            Ordering::Less => Some(TeamId::Two),
            Ordering::Equal => None,
        }
    }
}
