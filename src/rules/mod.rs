//! Rules read off the board.
//!
//! A sentence is three cells in a line: a noun, the `Is` operator, and a noun
//! or property. Sentences read north to south or west to east only.
//!
//! - `NOUN IS PROPERTY` gives the named sprite kind that property
//!   (applied by [`RuleDeriver`] every pass).
//! - `NOUN IS NOUN` turns every sprite of the first kind into the second
//!   (applied by the elimination engine, see [`crate::effects`]).

mod sentence;
mod deriver;

pub use sentence::{read_sentences, Orientation, Predicate, Rule, Sentence};
pub use deriver::RuleDeriver;
