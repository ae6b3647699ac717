//! Game phases derived from score and occupancy.

use serde::{Deserialize, Serialize};

use crate::core::EngineConfig;

/// Where a game stands.
///
/// `Won` and `Full` are terminal. Nothing in the engine enforces them;
/// the caller decides whether to accept further moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No tiles placed yet.
    Empty,
    /// Some tiles placed, target not reached, room left.
    InProgress,
    /// Score reached the target.
    Won,
    /// Board full without reaching the target.
    Full,
}

impl GamePhase {
    /// Classify a game state. A winning score takes precedence over a full
    /// board, so a state is never both `Won` and `Full`.
    #[must_use]
    pub fn of(score: i64, tiles_placed: usize, config: &EngineConfig) -> Self {
        if tiles_placed > 0 && score >= config.score_target {
            GamePhase::Won
        } else if tiles_placed >= config.capacity() {
            GamePhase::Full
        } else if tiles_placed == 0 {
            GamePhase::Empty
        } else {
            GamePhase::InProgress
        }
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Full)
    }
}
