//! Engine configuration.
//!
//! The board dimensions, the size of the tile pool and the winning score
//! are fixed per game type. Callers configure them once and hand the config
//! to the engine; nothing in the engine hardcodes them.

use serde::{Deserialize, Serialize};

use super::tile::TILE_CATALOG;

/// Default side length of the board.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Default score needed to win.
pub const DEFAULT_SCORE_TARGET: i64 = 60;

/// Static parameters of a puzzle game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side length N of the N x N board.
    pub board_size: usize,

    /// Number of tile types drawn from, taken from the front of the catalog.
    pub num_tile_types: u8,

    /// Score at which the game is won (inclusive).
    pub score_target: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            num_tile_types: TILE_CATALOG.len() as u8,
            score_target: DEFAULT_SCORE_TARGET,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the given board size and default pool/target.
    #[must_use]
    pub fn new(board_size: usize) -> Self {
        assert!(board_size > 0, "Board size must be at least 1");

        Self {
            board_size,
            ..Self::default()
        }
    }

    /// Restrict the tile pool to the first `count` catalog entries.
    #[must_use]
    pub fn with_tile_types(mut self, count: u8) -> Self {
        assert!(count > 0, "Must have at least 1 tile type");
        assert!(
            count as usize <= TILE_CATALOG.len(),
            "At most {} tile types supported",
            TILE_CATALOG.len()
        );
        self.num_tile_types = count;
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_score_target(mut self, target: i64) -> Self {
        self.score_target = target;
        self
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.board_size * self.board_size
    }
}
