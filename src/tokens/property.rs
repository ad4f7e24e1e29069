//! Behavioural properties and fixed-size property sets.

use serde::{Deserialize, Serialize};

use super::kind::TokenKind;
use crate::error::EngineError;

/// A behavioural flag a token kind can hold.
///
/// Each variant corresponds to exactly one property word in the catalog.
/// Converting any other [`TokenKind`] fails with
/// [`EngineError::NotAProperty`]:
///
/// ```
/// use rule_grid::tokens::{Property, TokenKind};
///
/// assert_eq!(Property::try_from(TokenKind::Win).unwrap(), Property::Win);
/// assert!(Property::try_from(TokenKind::NounWall).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Property {
    You,
    Win,
    Stop,
    Push,
    Melt,
    Hot,
    Defeat,
    Sink,
    Boom,
}

impl Property {
    /// Number of properties.
    pub const COUNT: usize = 9;

    /// Every property, in index order.
    pub const ALL: [Property; Property::COUNT] = [
        Property::You,
        Property::Win,
        Property::Stop,
        Property::Push,
        Property::Melt,
        Property::Hot,
        Property::Defeat,
        Property::Sink,
        Property::Boom,
    ];

    /// Position of this property in a [`PropertySet`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The property word naming this property.
    #[must_use]
    pub const fn token(self) -> TokenKind {
        match self {
            Property::You => TokenKind::You,
            Property::Win => TokenKind::Win,
            Property::Stop => TokenKind::Stop,
            Property::Push => TokenKind::Push,
            Property::Melt => TokenKind::Melt,
            Property::Hot => TokenKind::Hot,
            Property::Defeat => TokenKind::Defeat,
            Property::Sink => TokenKind::Sink,
            Property::Boom => TokenKind::Boom,
        }
    }
}

impl TryFrom<TokenKind> for Property {
    type Error = EngineError;

    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        kind.as_property().ok_or(EngineError::NotAProperty(kind))
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.token(), f)
    }
}

/// Fixed-size flag vector, one bit per [`Property`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertySet {
    bits: u16,
}

impl PropertySet {
    /// A set with every flag cleared.
    #[must_use]
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// A set with exactly the given flags.
    #[must_use]
    pub fn with(properties: &[Property]) -> Self {
        let mut set = Self::new();
        for &p in properties {
            set.set(p, true);
        }
        set
    }

    /// Check a flag.
    #[must_use]
    pub const fn has(&self, property: Property) -> bool {
        self.bits & (1 << property.index()) != 0
    }

    /// Set or clear a flag.
    pub fn set(&mut self, property: Property, value: bool) {
        if value {
            self.bits |= 1 << property.index();
        } else {
            self.bits &= !(1 << property.index());
        }
    }

    /// Clear every flag.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Check if no flag is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over the set flags, in index order.
    pub fn iter(&self) -> impl Iterator<Item = Property> + '_ {
        Property::ALL.into_iter().filter(move |&p| self.has(p))
    }
}
