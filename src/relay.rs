//! Mirroring the host's screen to a second, audience-facing display.
//!
//! The host console drives the game; whatever is currently being asked is
//! pushed through a [`PresentationRelay`] so a projector view can show the
//! question without the answer. Publishing is fire-and-forget: a missing
//! or broken display must never stall the game.

use crate::question::Question;
use crate::rules::GameEvent;
use tracing::debug;

pub trait PresentationRelay {
    /// A question was just uncovered and is being read out.
    fn publish_question(&self, question: &Question);

    /// The question was resolved one way or another; blank the display.
    fn clear_question(&self);

    /// A hit, miss, verdict or victory, for sound and banner effects.
    fn publish_event(&self, event: GameEvent);

    /// The game started or was reset.
    fn publish_game_status(&self, started: bool);
}

/// Relay for headless runs. Drops everything.
pub struct NullRelay;

impl PresentationRelay for NullRelay {
    fn publish_question(&self, _question: &Question) {}

    fn clear_question(&self) {}

    fn publish_event(&self, _event: GameEvent) {}

    fn publish_game_status(&self, _started: bool) {}
}

/// Relay that traces what would be shown. Stands in until a real
/// second-screen transport is wired up.
pub struct LogRelay;

impl PresentationRelay for LogRelay {
    fn publish_question(&self, question: &Question) {
        debug!(id = %question.id, category = %question.category, "question published");
    }

    fn clear_question(&self) {
        debug!("question cleared");
    }

    fn publish_event(&self, event: GameEvent) {
        debug!(?event, "event published");
    }

    fn publish_game_status(&self, started: bool) {
        debug!(started, "game status published");
    }
}
