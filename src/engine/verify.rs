//! Solution verification by replay.
//!
//! A solution is only as good as its replay: the verifier starts a fresh
//! engine from the same seed, checks that every recorded tile type is the
//! one the generator actually deals at that point, applies every placement
//! through the normal legality checks, and finally requires the game to
//! have been won by the last move. Moves after the game ended are refused.

use tracing::debug;

use super::error::VerifyError;
use super::phase::GamePhase;
use super::puzzle::PuzzleEngine;
use crate::core::{EngineConfig, GameSeed, Solution};
use crate::rules::{RuleSet, ScoreReport};

/// Replay `solution` from `seed` and return the final score if it wins.
pub fn verify_solution<R: RuleSet>(
    seed: GameSeed,
    solution: &Solution,
    config: &EngineConfig,
    rules: R,
) -> Result<ScoreReport, VerifyError> {
    let mut engine = PuzzleEngine::new(config.clone(), rules, seed);

    for (index, placement) in solution.iter().enumerate() {
        if engine.phase().is_terminal() {
            return Err(VerifyError::MoveAfterEnd { index });
        }

        let expected = engine.current_tile_type();
        if placement.tile_type != expected {
            return Err(VerifyError::TileMismatch {
                index,
                expected,
                found: placement.tile_type,
            });
        }

        engine
            .place_at(placement.coord, placement.rotation)
            .map_err(|source| VerifyError::IllegalPlacement { index, source })?;
    }

    let report = engine.last_score().clone();
    match engine.phase() {
        GamePhase::Won => {}
        GamePhase::Empty => return Err(VerifyError::Empty),
        GamePhase::InProgress | GamePhase::Full => {
            return Err(VerifyError::TargetNotMet {
                score: report.score,
                target: config.score_target,
            })
        }
    }

    debug!(
        seed = %seed.short(),
        moves = solution.len(),
        score = report.score,
        "solution verified"
    );
    Ok(report)
}

/// Decode a submitted byte solution and verify it.
pub fn verify_encoded<R: RuleSet>(
    seed: GameSeed,
    bytes: &[u8],
    config: &EngineConfig,
    rules: R,
) -> Result<ScoreReport, VerifyError> {
    let solution = Solution::decode(bytes)?;
    verify_solution(seed, &solution, config, rules)
}
