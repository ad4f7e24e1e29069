//! Multi-level sessions.
//!
//! A session plays the configured levels in order through one render sink
//! and one input source:
//!
//! - a level that cannot be loaded is reported and skipped;
//! - the default level is played only when none of the listed levels opened;
//! - the player quitting ends the whole session.

mod runner;

pub use runner::{LevelReport, LevelResult, SessionReport, SessionRunner};
