//! Movement of the player-controlled objects.
//!
//! Every object whose kind is `You` moves one cell per turn. Objects in the
//! way that are `Push` are shoved ahead along the same line; a `Stop` object
//! or the board edge anywhere along the chain blocks the whole move.

mod resolver;

pub use resolver::{MoveReport, MovementResolver};
