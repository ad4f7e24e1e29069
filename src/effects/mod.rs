//! Elimination effects applied after movement.
//!
//! Effects destroy or transform objects across the whole board:
//! - `Elimination`: the five effects, in the order they run
//! - `Fired`: a record of one effect firing on one cell
//! - `EliminationEngine`: runs every effect over the board
//!
//! ## Ordering
//!
//! The five effects always run in [`Elimination::ORDER`]. Each one scans
//! the full board on its own and sees what the previous ones left behind:
//! an explosion that clears a `Sink` cell means that cell never sinks.

mod effect;
mod resolver;

pub use effect::{Elimination, Fired};
pub use resolver::EliminationEngine;
