//! Placed object identification.
//!
//! A placed object is an instance of a [`TokenKind`] sitting in a board cell.
//! It carries no mutable state of its own: everything that changes during
//! play (properties) is attached to the kind, in the
//! [`PropertyRegistry`](crate::tokens::PropertyRegistry).
//!
//! ## Usage
//!
//! ```
//! use rule_grid::core::{ObjectId, PlacedObject};
//! use rule_grid::tokens::TokenKind;
//!
//! let a = PlacedObject::new(ObjectId(1), TokenKind::SprRock);
//! let b = PlacedObject::new(ObjectId(2), TokenKind::SprRock);
//!
//! // Same kind, distinct identities.
//! assert_eq!(a.kind, b.kind);
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};

use crate::tokens::TokenKind;

/// Unique identifier for a placed object.
///
/// Allocated by the board and never reused within it. Only needed to remove
/// one specific object from a cell; objects of the same kind are otherwise
/// interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Object({})", self.0)
    }
}

/// An object occupying a board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Identity, used for removal from a specific cell.
    pub id: ObjectId,

    /// The catalog entry this object is an instance of.
    pub kind: TokenKind,
}

impl PlacedObject {
    /// Create a placed object.
    #[must_use]
    pub const fn new(id: ObjectId, kind: TokenKind) -> Self {
        Self { id, kind }
    }
}

impl std::fmt::Display for PlacedObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.kind, self.id.0)
    }
}
