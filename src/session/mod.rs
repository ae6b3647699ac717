//! Caller-side game lifecycle.
//!
//! `GameSession` owns what the engine deliberately does not: whether the
//! game is over, the player's pending rotation, auto-submission and the
//! advisory time left on the offered game.

pub mod controller;
pub mod game;

pub use controller::{GameSession, PlaceOutcome, SessionConfig, SessionError};
pub use game::{format_duration, AvailableGame, Submission, TimeLeft, PUZZLE_GAME_TYPE};
