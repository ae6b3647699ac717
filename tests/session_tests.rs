//! Session lifecycle integration tests.

use pop_puzzle::core::{EngineConfig, GameSeed, Solution};
use pop_puzzle::engine::{verify_encoded, GamePhase, PlacementError};
use pop_puzzle::rules::StandardRules;
use pop_puzzle::session::{
    AvailableGame, GameSession, PlaceOutcome, SessionConfig, SessionError, TimeLeft,
    PUZZLE_GAME_TYPE,
};

fn straights_session(size: usize, target: i64, auto_submit: bool) -> GameSession {
    let config = EngineConfig::new(size)
        .with_tile_types(1)
        .with_score_target(target);
    GameSession::new(
        config,
        StandardRules::default(),
        SessionConfig::default().with_auto_submit(auto_submit),
    )
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn offered(seed: u64, blocks: i64) -> AvailableGame {
    AvailableGame::new(GameSeed::from_u64(seed), blocks)
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_win_with_auto_submit() {
    init_tracing();
    let mut session = straights_session(8, 1, true);
    session.new_game(offered(1, 40)).unwrap();

    assert_eq!(session.place(2, 2), Ok(PlaceOutcome::Placed { scored: false }));

    let submission = match session.place(2, 3).unwrap() {
        PlaceOutcome::Won { submission: Some(s) } => s,
        other => panic!("expected an auto-submitted win, got {other:?}"),
    };

    assert!(session.is_done());
    assert_eq!(session.phase(), Some(GamePhase::Won));
    assert_eq!(submission.seed, GameSeed::from_u64(1));
    assert_eq!(submission.game_type, PUZZLE_GAME_TYPE);
    assert_eq!(submission.solution.len(), 2);
}

#[test]
fn test_win_without_auto_submit() {
    let mut session = straights_session(8, 1, false);
    session.new_game(offered(1, 40)).unwrap();
    session.place(2, 2).unwrap();

    assert_eq!(
        session.place(2, 3),
        Ok(PlaceOutcome::Won { submission: None })
    );

    // Manual submission is still available after the win.
    let submission = session.submission().unwrap();
    assert_eq!(submission.solution.len(), 2);
}

#[test]
fn test_submitted_payload_verifies() {
    let config = EngineConfig::new(8).with_tile_types(1).with_score_target(1);
    let mut session = straights_session(8, 1, true);
    session.new_game(offered(9, 40)).unwrap();
    session.place(4, 4).unwrap();
    session.place(4, 5).unwrap();

    let submission = session.submission().unwrap();
    let bytes = submission.payload().unwrap();

    let report =
        verify_encoded(submission.seed, &bytes, &config, StandardRules::default()).unwrap();
    assert_eq!(report.score, 1);
    assert_eq!(Solution::decode(&bytes).unwrap(), submission.solution);
}

#[test]
fn test_no_moves_after_win() {
    let mut session = straights_session(8, 1, true);
    session.new_game(offered(1, 40)).unwrap();
    session.place(2, 2).unwrap();
    session.place(2, 3).unwrap();

    assert_eq!(session.place(2, 4), Err(SessionError::GameOver));
    assert_eq!(session.engine().unwrap().tiles_placed(), 2);
}

// =============================================================================
// Losing
// =============================================================================

#[test]
fn test_loss_on_full_board() {
    init_tracing();
    let mut session = straights_session(2, 1, true);
    session.new_game(offered(2, 40)).unwrap();

    // V H / H V leaves every edge unmatched.
    session.place(0, 0).unwrap();
    session.rotate();
    session.place(1, 0).unwrap();
    session.rotate();
    session.place(0, 1).unwrap();

    assert_eq!(session.place(1, 1), Ok(PlaceOutcome::Lost));
    assert!(session.is_done());
    assert_eq!(session.phase(), Some(GamePhase::Full));
    assert_eq!(session.submission(), Err(SessionError::NotWon));
}

// =============================================================================
// Restart and New Games
// =============================================================================

#[test]
fn test_restart_replays_same_tiles() {
    let mut session = GameSession::with_defaults();
    session.new_game(offered(5, 40)).unwrap();
    let first = session.engine().unwrap().current_tile_type();

    session.place(3, 3).unwrap();
    session.place(3, 4).unwrap();
    session.restart().unwrap();

    let engine = session.engine().unwrap();
    assert_eq!(engine.tiles_placed(), 0);
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.current_tile_type(), first);
    assert!(!session.is_done());
}

#[test]
fn test_restart_after_loss() {
    let mut session = straights_session(1, 1, true);
    session.new_game(offered(3, 40)).unwrap();
    assert_eq!(session.place(0, 0), Ok(PlaceOutcome::Lost));

    session.restart().unwrap();
    assert!(!session.is_done());
    assert_eq!(session.engine().unwrap().tiles_placed(), 0);
}

#[test]
fn test_new_game_after_finish_needs_no_abandon() {
    let mut session = straights_session(1, 1, true);
    session.new_game(offered(3, 40)).unwrap();
    session.place(0, 0).unwrap();

    assert!(session.new_game(offered(4, 40)).is_ok());
    assert_eq!(session.current_game().map(|g| g.seed), Some(GameSeed::from_u64(4)));
}

#[test]
fn test_placement_errors_pass_through() {
    let mut session = GameSession::with_defaults();
    session.new_game(offered(6, 40)).unwrap();

    assert_eq!(
        session.place(8, 0),
        Err(SessionError::Placement(PlacementError::OutOfBounds { x: 8, y: 0, size: 8 }))
    );
    assert!(!session.is_done());
}

// =============================================================================
// Time Left
// =============================================================================

#[test]
fn test_time_left_set_on_new_game() {
    let mut session = GameSession::new(
        EngineConfig::default(),
        StandardRules::default(),
        SessionConfig::default().with_block_spacing(60),
    );
    session.new_game(offered(1, 20)).unwrap();

    assert_eq!(
        session.time_left(),
        Some(TimeLeft::Blocks { blocks: 20, seconds: 600 })
    );
}

#[test]
fn test_time_left_does_not_touch_engine() {
    let mut session = GameSession::with_defaults();
    session.new_game(offered(1, 20)).unwrap();
    session.place(0, 0).unwrap();
    let board = session.engine().unwrap().board_snapshot();

    assert!(session.update_time_left(-3).is_expired());
    assert_eq!(session.engine().unwrap().board_snapshot(), board);
    assert!(!session.is_done());
    assert!(session.place(1, 0).is_ok());
}
