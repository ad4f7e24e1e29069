//! The board: a grid of stacked objects plus a background layer.
//!
//! - `Board`: bounds-checked cell storage, queries, and win/loss checks
//! - `BoardBuilder`: convenience for assembling boards in code
//!
//! The board also owns the [`PropertyRegistry`](crate::tokens::PropertyRegistry)
//! that gives its objects their behaviour.

mod grid;
mod builder;

pub use grid::Board;
pub use builder::BoardBuilder;
