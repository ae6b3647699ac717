//! The puzzle engine: board, tile queue, score and solution.
//!
//! `PuzzleEngine` is a calculator, not a session. It validates and applies
//! placements and reports what the board is worth, but it keeps no "game
//! over" flag. Callers read [`PuzzleEngine::phase`] and stop feeding it
//! moves once the phase is terminal (see [`crate::session::GameSession`]).
//!
//! ## Example
//!
//! ```
//! use pop_puzzle::core::GameSeed;
//! use pop_puzzle::engine::{PlacementError, PuzzleEngine};
//!
//! let mut engine = PuzzleEngine::with_defaults(GameSeed::from_u64(1));
//!
//! // The first tile may go anywhere.
//! engine.place_tile(2, 2, 0).unwrap();
//!
//! // Later tiles must touch an existing one.
//! assert!(matches!(
//!     engine.place_tile(5, 5, 0),
//!     Err(PlacementError::NoNeighbour { .. })
//! ));
//! engine.place_tile(2, 3, 1).unwrap();
//!
//! assert_eq!(engine.tiles_placed(), 2);
//! assert_eq!(engine.solution().len(), 2);
//! ```

use tracing::{debug, trace};

use super::error::PlacementError;
use super::phase::GamePhase;
use crate::core::{
    Board, Coord, EngineConfig, GameSeed, Placement, Rotation, Solution, Tile, TileGenerator,
    TileTypeId,
};
use crate::rules::{RuleSet, ScoreReport, StandardRules};

/// Single-player tile placement engine.
///
/// Cloning yields a fully independent engine, generator included.
#[derive(Clone, Debug)]
pub struct PuzzleEngine<R: RuleSet = StandardRules> {
    config: EngineConfig,
    rules: R,
    seed: GameSeed,
    board: Board,
    generator: TileGenerator,
    solution: Solution,
    last_score: ScoreReport,
}

impl PuzzleEngine<StandardRules> {
    /// Default board, tile pool, target and rule weights.
    #[must_use]
    pub fn with_defaults(seed: GameSeed) -> Self {
        Self::new(EngineConfig::default(), StandardRules::default(), seed)
    }
}

impl<R: RuleSet> PuzzleEngine<R> {
    /// Create an engine and start a game from `seed`.
    #[must_use]
    pub fn new(config: EngineConfig, rules: R, seed: GameSeed) -> Self {
        let board = Board::new(config.board_size);
        let generator = TileGenerator::new(seed, config.num_tile_types);
        let last_score = rules.score(&board);

        debug!(seed = %seed.short(), size = config.board_size, "game initialised");

        Self {
            config,
            rules,
            seed,
            board,
            generator,
            solution: Solution::new(),
            last_score,
        }
    }

    /// Start over from `seed`, discarding all previous state.
    ///
    /// Always succeeds. The tile sequence that follows depends on `seed` alone.
    pub fn init_game(&mut self, seed: GameSeed) {
        self.seed = seed;
        self.board = Board::new(self.config.board_size);
        self.generator = TileGenerator::new(seed, self.config.num_tile_types);
        self.solution.clear();
        self.last_score = self.rules.score(&self.board);

        debug!(seed = %seed.short(), "game initialised");
    }

    // === Tile Queue ===

    /// Type of the tile about to be placed.
    #[must_use]
    pub fn current_tile_type(&self) -> TileTypeId {
        self.generator.current()
    }

    /// Type that becomes current once the present tile is placed.
    #[must_use]
    pub fn next_tile_type(&self) -> TileTypeId {
        self.generator.next()
    }

    // === Placement ===

    /// Place the current tile at `(x, y)` with `rotation` quarter turns.
    ///
    /// Checks, in order: bounds, rotation, occupancy, adjacency (skipped for
    /// the first tile). Any failure leaves the engine exactly as it was.
    pub fn place_tile(
        &mut self,
        x: i32,
        y: i32,
        rotation: u8,
    ) -> Result<Placement, PlacementError> {
        let coord = Coord::new(x, y);
        let checked = self.check_bounds(coord).and_then(|()| {
            Rotation::new(rotation).ok_or(PlacementError::InvalidRotation(rotation))
        });

        match checked {
            Ok(r) => self.place_at(coord, r),
            Err(err) => {
                trace!(x, y, rotation, %err, "placement rejected");
                Err(err)
            }
        }
    }

    /// Typed form of [`PuzzleEngine::place_tile`].
    pub fn place_at(
        &mut self,
        coord: Coord,
        rotation: Rotation,
    ) -> Result<Placement, PlacementError> {
        if let Err(err) = self.check_placement(coord) {
            trace!(%coord, %err, "placement rejected");
            return Err(err);
        }

        let tile_type = self.generator.advance();
        let placed = self.board.set(coord, Tile::new(tile_type, rotation));
        debug_assert!(placed, "validated placement must succeed");

        let placement = Placement::new(coord, rotation, tile_type);
        self.solution.push(placement);
        self.last_score = self.rules.score(&self.board);

        debug!(
            %coord,
            rotation = rotation.quarter_turns(),
            tile_type = tile_type.raw(),
            score = self.last_score.score,
            placed = self.board.occupied(),
            "tile placed"
        );
        if self.phase().is_terminal() {
            debug!(phase = ?self.phase(), score = self.last_score.score, "terminal state reached");
        }

        Ok(placement)
    }

    /// Check whether the current tile could go at `coord`, without placing it.
    pub fn check_placement(&self, coord: Coord) -> Result<(), PlacementError> {
        self.check_bounds(coord)?;

        if self.board.is_occupied(coord) {
            return Err(PlacementError::Occupied {
                x: coord.x,
                y: coord.y,
            });
        }

        if self.tiles_placed() > 0 && !self.board.has_neighbour(coord) {
            return Err(PlacementError::NoNeighbour {
                x: coord.x,
                y: coord.y,
            });
        }

        Ok(())
    }

    fn check_bounds(&self, coord: Coord) -> Result<(), PlacementError> {
        if self.board.in_bounds(coord) {
            Ok(())
        } else {
            Err(PlacementError::OutOfBounds {
                x: coord.x,
                y: coord.y,
                size: self.board.size(),
            })
        }
    }

    // === Score ===

    /// Score the current board from scratch.
    #[must_use]
    pub fn calculate_score(&self) -> ScoreReport {
        self.rules.score(&self.board)
    }

    /// Score as of the last accepted placement (or game start).
    #[must_use]
    pub fn last_score(&self) -> &ScoreReport {
        &self.last_score
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.last_score.score
    }

    // === Board ===

    #[must_use]
    pub fn tiles_placed(&self) -> usize {
        self.board.occupied()
    }

    /// Copy of the tile at `(x, y)`; empty for vacant or off-board cells.
    #[must_use]
    pub fn tile_at(&self, x: i32, y: i32) -> Tile {
        self.board.tile_at(Coord::new(x, y))
    }

    /// True if an edge-adjacent cell of `(x, y)` holds a tile.
    #[must_use]
    pub fn has_neighbour(&self, x: i32, y: i32) -> bool {
        self.board.has_neighbour(Coord::new(x, y))
    }

    /// Value copy of the whole board.
    #[must_use]
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Cells that currently carry a candle, row-major. Computed on each call.
    #[must_use]
    pub fn candles(&self) -> Vec<Coord> {
        self.rules.candles(&self.board)
    }

    /// Placements so far, in order.
    #[must_use]
    pub fn solution(&self) -> Solution {
        self.solution.clone()
    }

    // === Lifecycle ===

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        GamePhase::of(self.score(), self.tiles_placed(), &self.config)
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase() == GamePhase::Won
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    // === Accessors ===

    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.seed
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PuzzleEngine {
        PuzzleEngine::with_defaults(GameSeed::from_u64(42))
    }

    #[test]
    fn test_fresh_engine() {
        let engine = engine();
        assert_eq!(engine.tiles_placed(), 0);
        assert_eq!(engine.score(), 0);
        assert!(engine.solution().is_empty());
        assert_eq!(engine.phase(), GamePhase::Empty);
        assert!(engine.board_snapshot().iter().all(|(_, t)| t.is_empty()));
    }

    #[test]
    fn test_place_uses_current_type() {
        let mut engine = engine();
        let current = engine.current_tile_type();
        let next = engine.next_tile_type();

        let placement = engine.place_tile(3, 3, 2).unwrap();

        assert_eq!(placement.tile_type, current);
        assert_eq!(engine.tile_at(3, 3), Tile::new(current, Rotation::HALF));
        assert_eq!(engine.current_tile_type(), next);
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let mut engine = engine();
        assert_eq!(engine.place_tile(0, 0, 4), Err(PlacementError::InvalidRotation(4)));
        assert_eq!(engine.tiles_placed(), 0);
    }

    #[test]
    fn test_bounds_checked_before_rotation_use() {
        let mut engine = engine();
        assert_eq!(
            engine.place_tile(8, 0, 0),
            Err(PlacementError::OutOfBounds { x: 8, y: 0, size: 8 })
        );
    }

    #[test]
    fn test_rejection_keeps_queue() {
        let mut engine = engine();
        engine.place_tile(0, 0, 0).unwrap();
        let current = engine.current_tile_type();
        let next = engine.next_tile_type();

        assert!(engine.place_tile(0, 0, 0).is_err());
        assert!(engine.place_tile(7, 7, 0).is_err());

        assert_eq!(engine.current_tile_type(), current);
        assert_eq!(engine.next_tile_type(), next);
        assert_eq!(engine.solution().len(), 1);
    }

    #[test]
    fn test_last_score_matches_calculation() {
        let mut engine = engine();
        for (x, y) in [(0, 0), (1, 0), (1, 1), (0, 1), (2, 1)] {
            engine.place_tile(x, y, 0).unwrap();
            assert_eq!(engine.last_score(), &engine.calculate_score());
        }
    }

    #[test]
    fn test_init_game_resets() {
        let mut engine = engine();
        engine.place_tile(4, 4, 1).unwrap();
        engine.place_tile(4, 5, 1).unwrap();

        engine.init_game(GameSeed::from_u64(42));

        assert_eq!(engine.tiles_placed(), 0);
        assert_eq!(engine.score(), 0);
        assert!(engine.solution().is_empty());
        assert_eq!(engine.tile_at(4, 4), Tile::EMPTY);
        assert_eq!(engine.current_tile_type(), self::engine().current_tile_type());
    }

    #[test]
    fn test_check_placement_is_pure() {
        let mut engine = engine();
        engine.place_tile(2, 2, 0).unwrap();

        assert!(engine.check_placement(Coord::new(2, 1)).is_ok());
        assert!(engine.check_placement(Coord::new(6, 6)).is_err());
        assert_eq!(engine.tiles_placed(), 1);
    }
}
