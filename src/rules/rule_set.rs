//! Rule set trait for scoring implementations.
//!
//! A rule set decides two things about a board:
//! - Its score, with a human-readable breakdown
//! - Which cells carry a candle
//!
//! Both are pure functions of the board. The engine calls them after every
//! accepted placement (score) or on demand (candles) and never caches
//! candles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Coord};

/// One line of a score breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    /// What was counted, e.g. "matched edges".
    pub label: String,
    /// How many were found on the board.
    pub count: usize,
    /// Points contributed.
    pub points: i64,
}

impl ScoreComponent {
    pub fn new(label: impl Into<String>, count: usize, points: i64) -> Self {
        Self {
            label: label.into(),
            count,
            points,
        }
    }
}

/// A computed score with its explanation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Total score.
    pub score: i64,
    /// Human-readable summary of how the score was reached.
    pub description: String,
    /// Per-component breakdown. Sums to `score`.
    pub components: SmallVec<[ScoreComponent; 4]>,
}

impl ScoreReport {
    /// Build a report from its components, deriving total and description.
    ///
    /// The description lists every component as `label: count (+points)`,
    /// or reads "No scoring yet" when nothing was counted.
    #[must_use]
    pub fn from_components(components: SmallVec<[ScoreComponent; 4]>) -> Self {
        let score = components.iter().map(|c| c.points).sum();
        let description = if components.iter().all(|c| c.count == 0) {
            "No scoring yet".to_string()
        } else {
            components
                .iter()
                .map(|c| format!("{}: {} (+{})", c.label, c.count, c.points))
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            score,
            description,
            components,
        }
    }

    /// Look up a component by label.
    #[must_use]
    pub fn component(&self, label: &str) -> Option<&ScoreComponent> {
        self.components.iter().find(|c| c.label == label)
    }
}

/// Scoring and candle rules.
///
/// ## Implementation Notes
///
/// - `score` must be deterministic in the board contents
/// - `score` must never decrease when a tile is added to the board
/// - `candles` must reflect the board exactly; return row-major order
pub trait RuleSet {
    /// Score the board.
    fn score(&self, board: &Board) -> ScoreReport;

    /// Cells that currently carry a candle.
    fn candles(&self, board: &Board) -> Vec<Coord>;

    /// Check whether a single cell carries a candle.
    ///
    /// Default implementation scans [`RuleSet::candles`].
    fn is_candle(&self, board: &Board, coord: Coord) -> bool {
        self.candles(board).contains(&coord)
    }
}
