//! The bundled rule set.
//!
//! ## Scoring
//!
//! - **Matched edges**: two edge-adjacent tiles whose touching edges are the
//!   same non-blank kind (path to path, water to water) score `edge_points`.
//! - **Candles**: a tile with at least one non-blank edge, all of whose
//!   non-blank edges are matched, scores `candle_points`.
//! - **Closed networks**: a group of tiles linked through matched edges in
//!   which every tile is a candle scores `network_points`.
//!
//! Mismatched edges cost nothing. Since cells are never cleared, a matched
//! edge stays matched, a candle stays lit and a closed network stays closed,
//! so the score can only grow as tiles are added.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use super::rule_set::{RuleSet, ScoreComponent, ScoreReport};
use crate::core::{Board, Coord, Direction};

pub const MATCHED_EDGES: &str = "matched edges";
pub const CANDLES: &str = "candles";
pub const CLOSED_NETWORKS: &str = "closed networks";

/// Edge-matching rules with candle and closed-network bonuses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardRules {
    /// Points per matched edge (default: 1).
    pub edge_points: i64,

    /// Points per candle (default: 3).
    pub candle_points: i64,

    /// Points per closed network (default: 5).
    pub network_points: i64,
}

impl Default for StandardRules {
    fn default() -> Self {
        Self {
            edge_points: 1,
            candle_points: 3,
            network_points: 5,
        }
    }
}

impl StandardRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_edge_points(mut self, points: i64) -> Self {
        assert!(points >= 0, "Scores must not decrease");
        self.edge_points = points;
        self
    }

    #[must_use]
    pub fn with_candle_points(mut self, points: i64) -> Self {
        assert!(points >= 0, "Scores must not decrease");
        self.candle_points = points;
        self
    }

    #[must_use]
    pub fn with_network_points(mut self, points: i64) -> Self {
        assert!(points >= 0, "Scores must not decrease");
        self.network_points = points;
        self
    }

    /// Matched neighbours of an occupied cell: cells across a non-blank edge
    /// whose facing edge is the same kind.
    fn links(board: &Board, coord: Coord) -> SmallVec<[Coord; 4]> {
        let tile = board.tile_at(coord);
        if tile.is_empty() {
            return SmallVec::new();
        }

        coord
            .neighbours(board.size())
            .into_iter()
            .filter(|&(dir, n)| {
                let edge = tile.edge(dir);
                edge.is_linkable() && board.tile_at(n).edge(dir.opposite()) == edge
            })
            .map(|(_, n)| n)
            .collect()
    }

    /// Count each matched edge once by only looking east and south.
    fn matched_edges(board: &Board) -> usize {
        board
            .placed()
            .map(|(coord, tile)| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&dir| {
                        let edge = tile.edge(dir);
                        edge.is_linkable()
                            && board.tile_at(coord.step(dir)).edge(dir.opposite()) == edge
                    })
                    .count()
            })
            .sum()
    }

    fn candle_at(board: &Board, coord: Coord) -> bool {
        let tile = board.tile_at(coord);
        let open = tile.edges().iter().filter(|e| e.is_linkable()).count();
        open > 0 && Self::links(board, coord).len() == open
    }

    /// Count connected groups of matched tiles that consist only of candles.
    fn closed_networks(board: &Board, candles: &[Coord]) -> usize {
        let lit: FxHashSet<Coord> = candles.iter().copied().collect();
        let mut visited: FxHashSet<Coord> = FxHashSet::default();
        let mut closed = 0;

        for &start in candles {
            if !visited.insert(start) {
                continue;
            }

            let mut all_lit = true;
            let mut size = 0usize;
            let mut stack = vec![start];
            while let Some(coord) = stack.pop() {
                size += 1;
                all_lit &= lit.contains(&coord);
                for n in Self::links(board, coord) {
                    if visited.insert(n) {
                        stack.push(n);
                    }
                }
            }

            if all_lit && size >= 2 {
                closed += 1;
            }
        }

        closed
    }
}

impl RuleSet for StandardRules {
    fn score(&self, board: &Board) -> ScoreReport {
        let edges = Self::matched_edges(board);
        let candles = self.candles(board);
        let networks = Self::closed_networks(board, &candles);

        ScoreReport::from_components(smallvec![
            ScoreComponent::new(MATCHED_EDGES, edges, edges as i64 * self.edge_points),
            ScoreComponent::new(CANDLES, candles.len(), candles.len() as i64 * self.candle_points),
            ScoreComponent::new(CLOSED_NETWORKS, networks, networks as i64 * self.network_points),
        ])
    }

    fn candles(&self, board: &Board) -> Vec<Coord> {
        board
            .placed()
            .map(|(coord, _)| coord)
            .filter(|&coord| Self::candle_at(board, coord))
            .collect()
    }

    fn is_candle(&self, board: &Board, coord: Coord) -> bool {
        Self::candle_at(board, coord)
    }
}
