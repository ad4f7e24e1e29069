//! Reading sentences around an `Is` operator.

use crate::board::Board;
use crate::core::{Direction, PlacedObject, Position};
use crate::tokens::{Category, Property, TokenKind};

/// The two reading directions of a sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Noun above, complement below.
    Vertical,
    /// Noun to the left, complement to the right.
    Horizontal,
}

impl Orientation {
    /// Both orientations, in the order they are tested.
    pub const ALL: [Orientation; 2] = [Orientation::Vertical, Orientation::Horizontal];

    /// Where the subject noun sits relative to `Is`.
    #[must_use]
    pub const fn subject_side(self) -> Direction {
        match self {
            Orientation::Vertical => Direction::North,
            Orientation::Horizontal => Direction::West,
        }
    }

    /// Where the complement sits relative to `Is`.
    #[must_use]
    pub const fn complement_side(self) -> Direction {
        match self {
            Orientation::Vertical => Direction::South,
            Orientation::Horizontal => Direction::East,
        }
    }
}

/// A sentence found on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sentence {
    /// Cell of the `Is` operator.
    pub is_at: Position,
    pub orientation: Orientation,
    /// The noun word before `Is`.
    pub subject: PlacedObject,
    /// The noun or property word after `Is`.
    pub complement: PlacedObject,
}

impl Sentence {
    /// Interpret this sentence as a rule on sprite kinds.
    ///
    /// Returns `None` if the words do not form a rule (the subject is not a
    /// noun, or the complement is neither noun nor property).
    #[must_use]
    pub fn rule(&self) -> Option<Rule> {
        let subject = self.subject.kind.rep()?;
        let predicate = match self.complement.kind.as_property() {
            Some(property) => Predicate::Property(property),
            None => Predicate::Becomes(self.complement.kind.rep()?),
        };
        Some(Rule { subject, predicate })
    }
}

/// What a rule says about its subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `NOUN IS PROPERTY`
    Property(Property),
    /// `NOUN IS NOUN`, carrying the target sprite kind.
    Becomes(TokenKind),
}

/// A rule on sprite kinds, e.g. `sprWall is Stop`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    /// Sprite kind the rule applies to.
    pub subject: TokenKind,
    pub predicate: Predicate,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.predicate {
            Predicate::Property(p) => write!(f, "{} is {}", self.subject, p),
            Predicate::Becomes(k) => write!(f, "{} is {}", self.subject, k),
        }
    }
}

/// Read the sentences centred on the `Is` at `pos` whose complement is of
/// `complement` category.
///
/// Each orientation is tested independently; a cell can yield both. Only the
/// first matching word on each side is used. Cells without `Is`, and sides
/// without a matching word, simply yield nothing.
#[must_use]
pub fn read_sentences(board: &Board, pos: Position, complement: Category) -> Vec<Sentence> {
    if !board.has_token(pos, TokenKind::Is) {
        return Vec::new();
    }

    Orientation::ALL
        .iter()
        .filter_map(|&orientation| {
            let subject =
                board.first_of_category(pos.step(orientation.subject_side()), Category::Noun)?;
            let complement =
                board.first_of_category(pos.step(orientation.complement_side()), complement)?;
            Some(Sentence {
                is_at: pos,
                orientation,
                subject,
                complement,
            })
        })
        .collect()
}
