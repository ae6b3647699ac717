//! Core puzzle types: coordinates, tiles, board, seeds, tile generation,
//! configuration and placement records.
//!
//! Everything here is rule-agnostic. Scoring lives in [`crate::rules`];
//! the state machine that ties these pieces together lives in
//! [`crate::engine`].

pub mod board;
pub mod config;
pub mod coord;
pub mod placement;
pub mod rng;
pub mod seed;
pub mod tile;

pub use board::Board;
pub use config::{EngineConfig, DEFAULT_BOARD_SIZE, DEFAULT_SCORE_TARGET};
pub use coord::{Coord, Direction};
pub use placement::{Placement, Solution, SolutionError};
pub use rng::{TileGenerator, TileGeneratorState};
pub use seed::{GameSeed, SeedError, SEED_LEN};
pub use tile::{EdgeKind, InvalidRotation, Rotation, Tile, TileDef, TileTypeId, TILE_CATALOG};
