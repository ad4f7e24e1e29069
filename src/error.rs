//! Error types for the engine.
//!
//! Every fallible operation returns [`Result`]. Geometry errors (bad
//! coordinates, bad dimensions, a non-property where a property is required)
//! are raised at the offending call and never clamped or defaulted.
//!
//! Two negative outcomes are deliberately *not* errors:
//! - a push chain that cannot move (the resolver reports `false`),
//! - an `Is` with no readable sentence around it (nothing is derived).

use thiserror::Error;

use crate::tokens::TokenKind;
use crate::turn::{Outcome, TurnPhase};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

/// The error type for engine operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A coordinate outside the board was used.
    #[error("position ({col}, {row}) is out of bounds of the {width}x{height} board")]
    OutOfBounds {
        col: i32,
        row: i32,
        width: i32,
        height: i32,
    },

    /// A token that is not a property was used where a property is required.
    #[error("token {0} is not a property")]
    NotAProperty(TokenKind),

    /// Board dimensions are zero, negative, or over the maximum.
    #[error("invalid board dimensions {cols}x{rows} (allowed 1..={max_cols} x 1..={max_rows})",
        max_cols = crate::core::MAX_COLS, max_rows = crate::core::MAX_ROWS)]
    InvalidDimensions { cols: i32, rows: i32 },

    /// A token name that is not in the catalog.
    #[error("unknown token `{0}`")]
    UnknownToken(String),

    /// The level text could not be parsed.
    #[error("malformed level at line {line}: {reason}")]
    MalformedLevel { line: usize, reason: String },

    /// A turn step was requested in the wrong phase.
    #[error("turn step expected phase {expected:?} but level is in {actual:?}")]
    UnexpectedPhase {
        expected: TurnPhase,
        actual: TurnPhase,
    },

    /// A turn was requested after the level reached a terminal state.
    #[error("level already finished: {0}")]
    LevelFinished(Outcome),

    /// A scripted move letter that names no direction.
    #[error("invalid move `{0}` (expected one of U D L R N S W E)")]
    InvalidMove(char),

    /// Reading a level, drawing a frame, or reading input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Creates a malformed level error.
    #[must_use]
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLevel {
            line,
            reason: reason.into(),
        }
    }
}
