//! Engine error types.

use thiserror::Error;

use crate::core::{SolutionError, TileTypeId};

/// Why a placement was refused. The engine state is untouched whenever
/// one of these is returned.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("({x}, {y}) is outside the {size}x{size} board")]
    OutOfBounds { x: i32, y: i32, size: usize },

    #[error("rotation {0} is not one of 0, 1, 2, 3")]
    InvalidRotation(u8),

    #[error("({x}, {y}) is already occupied")]
    Occupied { x: i32, y: i32 },

    #[error("({x}, {y}) does not touch any placed tile")]
    NoNeighbour { x: i32, y: i32 },
}

/// Why a solution failed verification.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Codec(#[from] SolutionError),

    #[error("move {index}: expected tile type {expected}, solution claims {found}")]
    TileMismatch {
        index: usize,
        expected: TileTypeId,
        found: TileTypeId,
    },

    #[error("move {index}: {source}")]
    IllegalPlacement {
        index: usize,
        #[source]
        source: PlacementError,
    },

    #[error("move {index} was made after the game had ended")]
    MoveAfterEnd { index: usize },

    #[error("solution has no moves")]
    Empty,

    #[error("final score {score} is below the target of {target}")]
    TargetNotMet { score: i64, target: i64 },
}
