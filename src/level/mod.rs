//! Loading levels from text.
//!
//! ## Format
//!
//! ```text
//! # comments and blank lines are skipped
//! 6 3
//! nounBaba Is You EMPTY EMPTY EMPTY
//! nounFlag Is Win EMPTY EMPTY EMPTY
//! sprBaba EMPTY EMPTY sprRock & sprTile EMPTY sprFlag
//! %
//! sprTile sprTile sprTile sprTile sprTile sprTile
//! ```
//!
//! The first line gives `<cols> <rows>`. Object rows follow, one per board
//! row, with one item per cell: a token name or `EMPTY`. `&` stacks the
//! next item onto the cell of the previous one. An optional `%` line starts
//! the background rows, which hold at most one token per cell and no `&`.
//!
//! Rows and items beyond the declared size are ignored with a warning.
//! Everything else that does not fit the format is an error, and no board
//! is produced.

mod loader;

pub use loader::{load_level, parse_level};
