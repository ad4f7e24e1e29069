//! Elimination effect definitions.

use serde::{Deserialize, Serialize};

use crate::core::{PlacedObject, Position};

/// A board-wide destructive or transformative effect.
///
/// ## Triggers
///
/// - `Explosion`: a `Boom` object shares its cell with anything. Clears the
///   cell and its eight neighbours.
/// - `Conversion`: a `NOUN IS NOUN` sentence. Every sprite of the first noun
///   becomes a fresh sprite of the second.
/// - `Sink`: a `Sink` object shares its cell with anything. Clears the cell.
/// - `Melt`: `Hot` and `Melt` share a cell. The `Melt` objects go.
/// - `Defeat`: `Defeat` and `You` share a cell. The `You` objects go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Elimination {
    Explosion,
    Conversion,
    Sink,
    Melt,
    Defeat,
}

impl Elimination {
    /// Every effect, in application order.
    pub const ORDER: [Elimination; 5] = [
        Elimination::Explosion,
        Elimination::Conversion,
        Elimination::Sink,
        Elimination::Melt,
        Elimination::Defeat,
    ];

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Elimination::Explosion => "explosion",
            Elimination::Conversion => "conversion",
            Elimination::Sink => "sink",
            Elimination::Melt => "melt",
            Elimination::Defeat => "defeat",
        }
    }
}

impl std::fmt::Display for Elimination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One effect firing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired {
    pub effect: Elimination,
    /// The triggering cell. For a conversion, the cell of its `Is` word.
    pub at: Position,
    /// Objects taken off the board.
    pub removed: Vec<PlacedObject>,
    /// Objects put on the board (conversions only).
    pub created: Vec<PlacedObject>,
}

impl Fired {
    /// A record for an effect that only removes objects.
    #[must_use]
    pub fn removal(effect: Elimination, at: Position, removed: Vec<PlacedObject>) -> Self {
        Self {
            effect,
            at,
            removed,
            created: Vec::new(),
        }
    }
}
