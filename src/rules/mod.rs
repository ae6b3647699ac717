//! Scoring rules.
//!
//! Rule sets implement `RuleSet` to define:
//! - How a board is scored, with a readable breakdown
//! - Which cells carry candles
//!
//! The engine calls into `RuleSet` but never interprets scoring itself.

pub mod rule_set;
pub mod standard;

pub use rule_set::{RuleSet, ScoreComponent, ScoreReport};
pub use standard::StandardRules;
