//! The turn state machine and its collaborators.
//!
//! A [`Level`] owns one board and plays it turn by turn:
//!
//! ```text
//! Rendering -> DerivingPre -> Moving -> DerivingPost -> Eliminating -> Evaluating
//!     ^                                                                    |
//!     +-------------------------- Continue ------------------------------+
//!                                                                          |
//!                                               Terminal(Won | Lost) <-----+
//! ```
//!
//! Drawing and input are delegated to a [`RenderSink`] and an
//! [`InputSource`]; the machine itself does no I/O.

mod io;
mod machine;

pub use io::{direction_for_key, InputSource, LineInput, NullRenderer, RenderSink, ScriptedInput};
pub use machine::{Level, Outcome, TurnPhase, TurnStatus};
