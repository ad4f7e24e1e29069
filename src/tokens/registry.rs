//! Property registry: kind -> shared flags.
//!
//! The registry stores one [`PropertySet`] per [`TokenKind`]. Every placed
//! object of a kind reads the same set, so flags are kind-scoped by
//! construction.
//!
//! ## Lifecycle
//!
//! - Sets are created lazily, on first reference to a kind.
//! - Word kinds (noun, operator, property) start with `Push` set, and
//!   [`PropertyRegistry::set`] refuses to clear it.
//! - Sprite sets are wiped by [`PropertyRegistry::reset_sprite_properties`] at
//!   the start of every derivation pass and rebuilt from the board.

use rustc_hash::FxHashMap;

use super::kind::{Category, TokenKind};
use super::property::{Property, PropertySet};

/// Registry of per-kind property flags.
///
/// ## Example
///
/// ```
/// use rule_grid::tokens::{Property, PropertyRegistry, TokenKind};
///
/// let mut registry = PropertyRegistry::new();
///
/// registry.set(TokenKind::SprWall, Property::Stop, true);
/// assert!(registry.has(TokenKind::SprWall, Property::Stop));
///
/// // Words are always pushable.
/// assert!(registry.has(TokenKind::NounWall, Property::Push));
///
/// registry.reset_sprite_properties();
/// assert!(!registry.has(TokenKind::SprWall, Property::Stop));
/// assert!(registry.has(TokenKind::NounWall, Property::Push));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PropertyRegistry {
    sets: FxHashMap<TokenKind, PropertySet>,
}

impl PropertyRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Baseline flags for a freshly created set.
    fn baseline(kind: TokenKind) -> PropertySet {
        if kind.is(Category::Sprite) {
            PropertySet::new()
        } else {
            PropertySet::with(&[Property::Push])
        }
    }

    /// The shared flag set of a kind, created on first access.
    fn entry(&mut self, kind: TokenKind) -> &mut PropertySet {
        self.sets
            .entry(kind)
            .or_insert_with(|| Self::baseline(kind))
    }

    /// Make sure a kind has a set. Called whenever an object is created.
    pub fn register(&mut self, kind: TokenKind) {
        self.entry(kind);
    }

    /// Check if a kind currently holds a property.
    ///
    /// Kinds that were never referenced report their baseline.
    #[must_use]
    pub fn has(&self, kind: TokenKind, property: Property) -> bool {
        match self.sets.get(&kind) {
            Some(set) => set.has(property),
            None => Self::baseline(kind).has(property),
        }
    }

    /// Set or clear a property on a kind.
    ///
    /// Word kinds always keep `Push`; clearing it on a noun, operator or
    /// property kind is ignored.
    pub fn set(&mut self, kind: TokenKind, property: Property, value: bool) {
        if !value && property == Property::Push && !kind.is(Category::Sprite) {
            return;
        }
        self.entry(kind).set(property, value);
    }

    /// Snapshot of a kind's flags.
    #[must_use]
    pub fn get(&self, kind: TokenKind) -> PropertySet {
        self.sets
            .get(&kind)
            .copied()
            .unwrap_or_else(|| Self::baseline(kind))
    }

    /// Clear every sprite kind's flags. Word kinds are left untouched.
    pub fn reset_sprite_properties(&mut self) {
        for (kind, set) in self.sets.iter_mut() {
            if kind.is(Category::Sprite) {
                set.clear();
            }
        }
    }

    /// Number of kinds with a set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Check if no kind has been referenced yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
