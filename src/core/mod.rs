//! Core engine types: object identity, positions, directions, configuration.
//!
//! These are the building blocks shared by every other module. They carry no
//! rules of their own.

pub mod object;
pub mod direction;
pub mod config;

pub use object::{ObjectId, PlacedObject};
pub use direction::{Direction, Position};
pub use config::{DrawRect, SessionConfig, DEFAULT_LEVEL, MAX_COLS, MAX_ROWS};
