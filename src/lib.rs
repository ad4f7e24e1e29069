//! # rule-grid
//!
//! A grid puzzle engine where the rules are words lying on the board.
//!
//! Pushing the words `BABA`, `IS` and `YOU` into a line makes every Baba
//! sprite player-controlled; breaking the line takes control away again.
//!
//! ## Design Principles
//!
//! 1. **Kind, Not Instance**: Properties belong to a token kind. Every
//!    object of a kind behaves the same, and a freshly placed object
//!    inherits whatever its kind currently has.
//!
//! 2. **Rules Are Recomputed**: Sprite properties are cleared and derived
//!    again from the board twice per turn. Nothing carries over.
//!
//! 3. **All or Nothing**: A push chain moves completely or not at all, and a
//!    board is either built valid or not built.
//!
//! ## Turn
//!
//! Render, derive rules, move, derive rules again, eliminate, then check
//! for a loss (nothing is `You`) and a win (`You` and `Win` share a cell).
//!
//! ## Modules
//!
//! - `core`: object ids, positions, directions, configuration
//! - `tokens`: token catalog, properties, property registry
//! - `board`: the grid and its builder
//! - `rules`: sentence reading and rule derivation
//! - `movement`: push-chain movement
//! - `effects`: explosion, conversion, sink, melt and defeat
//! - `turn`: the turn state machine with its render and input seams
//! - `level`: level text format
//! - `render`: plain text rendering
//! - `session`: playing a list of levels in order

pub mod error;
pub mod core;
pub mod tokens;
pub mod board;
pub mod rules;
pub mod movement;
pub mod effects;
pub mod turn;
pub mod level;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use crate::error::{EngineError, Result};

pub use crate::core::{
    ObjectId, PlacedObject,
    Direction, Position,
    DrawRect, SessionConfig, MAX_COLS, MAX_ROWS,
};

pub use crate::tokens::{Category, TokenClass, TokenKind, Property, PropertySet, PropertyRegistry};

pub use crate::board::{Board, BoardBuilder};

pub use crate::rules::{Rule, Predicate, RuleDeriver};

pub use crate::movement::{MovementResolver, MoveReport};

pub use crate::effects::{Elimination, EliminationEngine, Fired};

pub use crate::turn::{
    Level, Outcome, TurnPhase, TurnStatus,
    RenderSink, InputSource, ScriptedInput, LineInput, NullRenderer,
};

pub use crate::level::{load_level, parse_level};

pub use crate::render::TextRenderer;

pub use crate::session::{LevelResult, SessionReport, SessionRunner};
