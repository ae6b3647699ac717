//! # pop-puzzle
//!
//! A deterministic tile-placement puzzle engine.
//!
//! ## Design Principles
//!
//! 1. **Seed-Determined**: The whole tile sequence of a game follows from its
//!    32-byte seed, so any solution can be replayed and audited.
//!
//! 2. **Pure Calculator**: The engine validates placements, scores boards and
//!    records solutions. It keeps no "game over" flag; the caller owns the
//!    session lifecycle.
//!
//! 3. **Copy-Out Reads**: Board state leaves the engine only as value copies.
//!
//! ## Modules
//!
//! - `core`: Coordinates, tiles, board, seeds, tile generator, configuration
//! - `rules`: `RuleSet` trait for scoring and candles, plus `StandardRules`
//! - `engine`: `PuzzleEngine` state machine, phases, solution verification
//! - `session`: `GameSession`, the caller-side lifecycle around an engine

pub mod core;
pub mod engine;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Board, Coord, Direction, EdgeKind, EngineConfig, GameSeed, Placement, Rotation, Solution,
    Tile, TileTypeId,
};

pub use crate::rules::{RuleSet, ScoreComponent, ScoreReport, StandardRules};

pub use crate::engine::{
    verify_encoded, verify_solution, GamePhase, PlacementError, PuzzleEngine, VerifyError,
};

pub use crate::session::{
    AvailableGame, GameSession, PlaceOutcome, SessionConfig, SessionError, Submission, TimeLeft,
};
