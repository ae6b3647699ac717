//! The puzzle engine state machine and solution verification.
//!
//! - `puzzle`: `PuzzleEngine`, the placement state machine
//! - `phase`: `GamePhase`, derived win/loss classification
//! - `verify`: replaying a submitted solution against its seed
//! - `error`: placement and verification errors

pub mod error;
pub mod phase;
pub mod puzzle;
pub mod verify;

pub use error::{PlacementError, VerifyError};
pub use phase::GamePhase;
pub use puzzle::PuzzleEngine;
pub use verify::{verify_encoded, verify_solution};
