//! Values exchanged with the world around a session: the games on offer,
//! the submissions handed back, and the advisory time left.

use serde::{Deserialize, Serialize};

use crate::core::{GameSeed, Solution, SolutionError};

/// Game type tag for this puzzle in submissions.
pub const PUZZLE_GAME_TYPE: u8 = 0;

/// A game offered by the availability source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableGame {
    /// Seed fixing the tile sequence.
    pub seed: GameSeed,
    /// Blocks until the game can no longer be submitted. Negative if expired.
    pub blocks_remaining: i64,
}

impl AvailableGame {
    #[must_use]
    pub fn new(seed: GameSeed, blocks_remaining: i64) -> Self {
        Self {
            seed,
            blocks_remaining,
        }
    }
}

/// A finished game ready for the submission pathway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub seed: GameSeed,
    pub game_type: u8,
    pub solution: Solution,
}

impl Submission {
    /// The opaque payload bytes for the solution.
    pub fn payload(&self) -> Result<Vec<u8>, SolutionError> {
        self.solution.encode()
    }
}

/// How long a game stays submittable. Display only; never affects play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeLeft {
    Blocks { blocks: u64, seconds: u64 },
    Expired,
}

impl TimeLeft {
    /// Convert a block count into a time estimate.
    ///
    /// Negative counts mean the game has left the availability list.
    /// The estimate assumes half the nominal block spacing.
    #[must_use]
    pub fn from_blocks(blocks: i64, block_spacing_secs: u64) -> Self {
        match u64::try_from(blocks) {
            Ok(blocks) => TimeLeft::Blocks {
                blocks,
                seconds: blocks.saturating_mul(block_spacing_secs) / 2,
            },
            Err(_) => TimeLeft::Expired,
        }
    }

    #[must_use]
    pub fn is_expired(self) -> bool {
        matches!(self, TimeLeft::Expired)
    }
}

/// Compact duration such as `3d 4h`, `2h 5m`, `4m 10s` or `12s`.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let (d, h, m, s) = (
        seconds / 86_400,
        seconds % 86_400 / 3_600,
        seconds % 3_600 / 60,
        seconds % 60,
    );

    if d > 0 {
        format!("{}d {}h", d, h)
    } else if h > 0 {
        format!("{}h {}m", h, m)
    } else if m > 0 {
        format!("{}m {}s", m, s)
    } else {
        format!("{}s", s)
    }
}

impl std::fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeLeft::Blocks { blocks, seconds } => {
                write!(f, "{} blocks ({})", blocks, format_duration(*seconds))
            }
            TimeLeft::Expired => write!(f, "EXPIRED!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_left_from_blocks() {
        assert_eq!(
            TimeLeft::from_blocks(10, 120),
            TimeLeft::Blocks { blocks: 10, seconds: 600 }
        );
        assert_eq!(TimeLeft::from_blocks(0, 120), TimeLeft::Blocks { blocks: 0, seconds: 0 });
        assert!(TimeLeft::from_blocks(-1, 120).is_expired());
    }

    #[test]
    fn test_time_left_display() {
        assert_eq!(TimeLeft::from_blocks(10, 120).to_string(), "10 blocks (10m 0s)");
        assert_eq!(TimeLeft::Expired.to_string(), "EXPIRED!");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(12), "12s");
        assert_eq!(format_duration(250), "4m 10s");
        assert_eq!(format_duration(7_500), "2h 5m");
        assert_eq!(format_duration(273_600), "3d 4h");
    }

    #[test]
    fn test_submission_payload_decodes() {
        let submission = Submission {
            seed: GameSeed::from_u64(1),
            game_type: PUZZLE_GAME_TYPE,
            solution: Solution::new(),
        };
        let bytes = submission.payload().unwrap();
        assert_eq!(Solution::decode(&bytes).unwrap(), submission.solution);
    }
}
