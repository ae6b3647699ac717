//! Session controller: the caller-side lifecycle around a `PuzzleEngine`.
//!
//! The engine never refuses a move because the game is over. The session
//! does: it keeps the done flag, the rotation the player has dialled in for
//! the current tile, the advisory time left, and decides when a solution
//! goes out for submission.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::game::{AvailableGame, Submission, TimeLeft, PUZZLE_GAME_TYPE};
use crate::core::{Coord, EngineConfig, Rotation};
use crate::engine::{GamePhase, PlacementError, PuzzleEngine};
use crate::rules::{RuleSet, StandardRules};

/// Session-level settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Nominal seconds between blocks, for time-left estimates (default: 120).
    pub block_spacing_secs: u64,

    /// Hand out a submission as soon as a game is won (default: true).
    pub auto_submit: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            block_spacing_secs: 120,
            auto_submit: true,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn with_block_spacing(mut self, secs: u64) -> Self {
        self.block_spacing_secs = secs;
        self
    }

    #[must_use]
    pub fn with_auto_submit(mut self, enabled: bool) -> Self {
        self.auto_submit = enabled;
        self
    }
}

/// Session-level failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no game has been started")]
    NoGame,

    #[error("a game is in progress; abandon it first")]
    GameInProgress,

    #[error("the game is over")]
    GameOver,

    #[error("the game has not been won")]
    NotWon,

    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Result of an accepted placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Tile placed; play continues. `scored` is true if the score went up.
    Placed { scored: bool },
    /// Target reached. Carries the submission when auto-submit is on.
    Won { submission: Option<Submission> },
    /// Board full without reaching the target.
    Lost,
}

/// One player's puzzle session.
#[derive(Clone, Debug)]
pub struct GameSession<R: RuleSet + Clone = StandardRules> {
    engine_config: EngineConfig,
    rules: R,
    config: SessionConfig,
    game: Option<AvailableGame>,
    engine: Option<PuzzleEngine<R>>,
    done: bool,
    rotation: Rotation,
    time_left: Option<TimeLeft>,
}

impl GameSession<StandardRules> {
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(
            EngineConfig::default(),
            StandardRules::default(),
            SessionConfig::default(),
        )
    }
}

impl<R: RuleSet + Clone> GameSession<R> {
    /// Create an idle session. No game is running until [`GameSession::new_game`].
    #[must_use]
    pub fn new(engine_config: EngineConfig, rules: R, config: SessionConfig) -> Self {
        Self {
            engine_config,
            rules,
            config,
            game: None,
            engine: None,
            done: true,
            rotation: Rotation::NONE,
            time_left: None,
        }
    }

    // === Lifecycle ===

    /// Start `game`. Refused while another game is still being played.
    pub fn new_game(&mut self, game: AvailableGame) -> Result<(), SessionError> {
        if !self.done {
            return Err(SessionError::GameInProgress);
        }

        match self.engine.as_mut() {
            Some(engine) => engine.init_game(game.seed),
            None => {
                self.engine = Some(PuzzleEngine::new(
                    self.engine_config.clone(),
                    self.rules.clone(),
                    game.seed,
                ))
            }
        }

        self.game = Some(game);
        self.done = false;
        self.rotation = Rotation::NONE;
        self.time_left = Some(TimeLeft::from_blocks(
            game.blocks_remaining,
            self.config.block_spacing_secs,
        ));

        info!(seed = %game.seed.short(), "new game started");
        Ok(())
    }

    /// Give up on the running game. No effect if none is running.
    pub fn abandon(&mut self) {
        if !self.done {
            debug!("game abandoned");
        }
        self.done = true;
    }

    /// Abandon the running game and start the same one again.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let game = self.game.ok_or(SessionError::NoGame)?;
        self.abandon();
        self.new_game(game)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[must_use]
    pub fn current_game(&self) -> Option<&AvailableGame> {
        self.game.as_ref()
    }

    /// Read access to the engine for rendering.
    #[must_use]
    pub fn engine(&self) -> Option<&PuzzleEngine<R>> {
        self.engine.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Option<GamePhase> {
        self.engine.as_ref().map(PuzzleEngine::phase)
    }

    // === Input ===

    /// Rotation that the next placement will use.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Turn the pending tile a quarter clockwise. Ignored once done.
    pub fn rotate(&mut self) -> Rotation {
        if !self.done {
            self.rotation = self.rotation.next();
        }
        self.rotation
    }

    /// Whether the current tile could go at `(x, y)`, for hover feedback.
    #[must_use]
    pub fn can_place_at(&self, x: i32, y: i32) -> bool {
        !self.done
            && self
                .engine
                .as_ref()
                .is_some_and(|e| e.check_placement(Coord::new(x, y)).is_ok())
    }

    /// Place the current tile at `(x, y)` with the pending rotation.
    pub fn place(&mut self, x: i32, y: i32) -> Result<PlaceOutcome, SessionError> {
        let engine = self.engine.as_mut().ok_or(SessionError::NoGame)?;
        if self.done {
            return Err(SessionError::GameOver);
        }

        let before = engine.score();
        engine.place_at(Coord::new(x, y), self.rotation)?;
        let (phase, score) = (engine.phase(), engine.score());
        self.rotation = Rotation::NONE;

        match phase {
            GamePhase::Won => {
                self.done = true;
                info!(score, "game won");
                let submission = if self.config.auto_submit {
                    Some(self.submission()?)
                } else {
                    None
                };
                Ok(PlaceOutcome::Won { submission })
            }
            GamePhase::Full => {
                self.done = true;
                info!(score, "game over, target not met");
                Ok(PlaceOutcome::Lost)
            }
            GamePhase::Empty | GamePhase::InProgress => Ok(PlaceOutcome::Placed {
                scored: score > before,
            }),
        }
    }

    /// The submission for a won game.
    pub fn submission(&self) -> Result<Submission, SessionError> {
        let engine = self.engine.as_ref().ok_or(SessionError::NoGame)?;
        if engine.phase() != GamePhase::Won {
            return Err(SessionError::NotWon);
        }

        Ok(Submission {
            seed: engine.seed(),
            game_type: PUZZLE_GAME_TYPE,
            solution: engine.solution(),
        })
    }

    // === Settings ===

    pub fn set_auto_submit(&mut self, enabled: bool) {
        self.config.auto_submit = enabled;
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    // === Time Left ===

    /// Record a new block count for the running game. Advisory only.
    pub fn update_time_left(&mut self, blocks: i64) -> TimeLeft {
        let time_left = TimeLeft::from_blocks(blocks, self.config.block_spacing_secs);
        self.time_left = Some(time_left);
        time_left
    }

    /// Refresh time left from the current list of available games.
    ///
    /// A game missing from the list has expired. Returns `None` when no
    /// game has been started.
    pub fn refresh_available(&mut self, games: &[AvailableGame]) -> Option<TimeLeft> {
        let seed = self.game?.seed;
        let blocks = games
            .iter()
            .find(|g| g.seed == seed)
            .map_or(-1, |g| g.blocks_remaining);
        Some(self.update_time_left(blocks))
    }

    #[must_use]
    pub fn time_left(&self) -> Option<TimeLeft> {
        self.time_left
    }
}
