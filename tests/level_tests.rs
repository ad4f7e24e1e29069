//! Level loading and rendering tests.

use rule_grid::core::{DrawRect, Position, SessionConfig, DEFAULT_LEVEL};
use rule_grid::error::EngineError;
use rule_grid::level::{load_level, parse_level};
use rule_grid::render::TextRenderer;
use rule_grid::tokens::TokenKind;
use rule_grid::turn::{Level, NullRenderer, Outcome, ScriptedInput};
use tempfile::TempDir;

// =============================================================================
// Default Level
// =============================================================================

/// The shipped default level loads.
#[test]
fn test_default_level_loads() {
    let board = load_level(DEFAULT_LEVEL).unwrap();

    assert_eq!(board.width(), 11);
    assert_eq!(board.height(), 7);
    assert!(board.has_token(Position::new(1, 3), TokenKind::SprBaba));
    assert!(board.background_at(Position::new(0, 0)).unwrap().is_some());
}

/// Walking right along the corridor wins the default level.
#[test]
fn test_default_level_is_winnable() {
    let board = load_level(DEFAULT_LEVEL).unwrap();
    let mut level = Level::new(board);
    let mut renderer = NullRenderer::new();
    let mut input = ScriptedInput::parse("RRRRRRRR").unwrap();

    let outcome = level.run(&mut renderer, &mut input).unwrap();

    assert_eq!(outcome, Some(Outcome::Won));
    assert_eq!(level.turns(), 8);
    assert_eq!(renderer.frames(), 9);
}

/// Walls hold: walking up into the corridor wall goes nowhere.
#[test]
fn test_default_level_walls_stop() {
    let board = load_level(DEFAULT_LEVEL).unwrap();
    let mut level = Level::new(board);
    let mut renderer = NullRenderer::new();
    let mut input = ScriptedInput::parse("UUDD").unwrap();

    assert_eq!(level.run(&mut renderer, &mut input).unwrap(), None);
    assert!(level.board().has_token(Position::new(1, 3), TokenKind::SprBaba));
}

// =============================================================================
// Files and Sessions
// =============================================================================

/// Levels written to disk load, and broken ones fail without a board.
#[test]
fn test_levels_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("01-good.txt"), "2 1\nsprBaba sprFlag\n").unwrap();
    std::fs::write(dir.path().join("02-bad.txt"), "2 1\nsprBaba sprDragon\n").unwrap();

    let config = SessionConfig::new().with_levels_dir(dir.path()).unwrap();
    assert_eq!(config.levels.len(), 2);

    assert!(load_level(&config.levels[0]).is_ok());
    assert!(matches!(
        load_level(&config.levels[1]),
        Err(EngineError::UnknownToken(_))
    ));
}

/// Dimensions over the limit are refused.
#[test]
fn test_oversized_level_rejected() {
    let err = parse_level("34 18\nEMPTY\n").unwrap_err();
    assert!(matches!(err, EngineError::InvalidDimensions { cols: 34, rows: 18 }));

    assert!(parse_level("33 18\nEMPTY\n").is_ok());
}

// =============================================================================
// Rendering
// =============================================================================

/// A played level renders a frame per turn plus a final frame.
#[test]
fn test_text_session() {
    let board = parse_level("3 1\nsprBaba EMPTY sprFlag\n%\nsprTile sprTile sprTile\n").unwrap();
    let mut level = Level::new(board).with_draw_area(DrawRect::new(1, 0, 1, 3));
    let mut renderer = TextRenderer::new(Vec::new());

    // No rules on the board: nothing is You, so the first turn loses.
    let mut input = ScriptedInput::parse("R").unwrap();
    let outcome = level.run(&mut renderer, &mut input).unwrap();

    assert_eq!(outcome, Some(Outcome::Lost));
    assert_eq!(renderer.frames(), 2);
    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(text, " ba ti fl\n\n ba ti fl\n");
}
