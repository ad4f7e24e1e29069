//! Token catalog and property registry.
//!
//! - `TokenKind`: the fixed catalog of words and sprites, with categories
//! - `Property`: the behavioural flags a kind can hold
//! - `PropertySet`: one fixed-size flag vector
//! - `PropertyRegistry`: kind -> flags, shared by every object of that kind
//!
//! ## Kind, not instance
//!
//! Properties belong to a token *kind*. Setting `Stop` on `sprWall` makes every
//! wall on the board stop movement, including walls placed later. Placed
//! objects carry no flags of their own.

mod kind;
mod property;
mod registry;

pub use kind::{Category, TokenClass, TokenKind};
pub use property::{Property, PropertySet};
pub use registry::PropertyRegistry;
