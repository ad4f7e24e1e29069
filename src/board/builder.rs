//! Builder for assembling boards in code.

use crate::core::Position;
use crate::error::Result;
use crate::tokens::{Property, TokenKind};

use super::Board;

/// Builder for creating a [`Board`].
///
/// Placements are recorded and applied in order by [`BoardBuilder::build`],
/// so the first invalid coordinate or dimension surfaces there.
///
/// ## Example
///
/// ```
/// use rule_grid::board::BoardBuilder;
/// use rule_grid::core::Position;
/// use rule_grid::tokens::TokenKind;
///
/// // BABA IS YOU, with Baba standing below it.
/// let board = BoardBuilder::new(3, 2)
///     .sentence(0, 0, &[TokenKind::NounBaba, TokenKind::Is, TokenKind::You])
///     .object(TokenKind::SprBaba, 1, 1)
///     .build()
///     .unwrap();
///
/// assert!(board.has_token(Position::new(1, 0), TokenKind::Is));
/// assert_eq!(board.object_count(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    width: i32,
    height: i32,
    objects: Vec<(TokenKind, Position)>,
    background: Vec<(TokenKind, Position)>,
    properties: Vec<(TokenKind, Property)>,
}

impl BoardBuilder {
    /// Start a board of the given size.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            objects: Vec::new(),
            background: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Place an object of `kind` at `(col, row)`.
    #[must_use]
    pub fn object(mut self, kind: TokenKind, col: i32, row: i32) -> Self {
        self.objects.push((kind, Position::new(col, row)));
        self
    }

    /// Lay out words left to right starting at `(col, row)`.
    #[must_use]
    pub fn sentence(mut self, col: i32, row: i32, words: &[TokenKind]) -> Self {
        for (offset, &kind) in words.iter().enumerate() {
            self.objects.push((kind, Position::new(col + offset as i32, row)));
        }
        self
    }

    /// Lay out words top to bottom starting at `(col, row)`.
    #[must_use]
    pub fn vertical_sentence(mut self, col: i32, row: i32, words: &[TokenKind]) -> Self {
        for (offset, &kind) in words.iter().enumerate() {
            self.objects.push((kind, Position::new(col, row + offset as i32)));
        }
        self
    }

    /// Set the background object at `(col, row)`.
    #[must_use]
    pub fn background(mut self, kind: TokenKind, col: i32, row: i32) -> Self {
        self.background.push((kind, Position::new(col, row)));
        self
    }

    /// Preset a property on a kind.
    ///
    /// Sprite presets only last until the next derivation pass.
    #[must_use]
    pub fn property(mut self, kind: TokenKind, property: Property) -> Self {
        self.properties.push((kind, property));
        self
    }

    /// Build the board.
    pub fn build(self) -> Result<Board> {
        let mut board = Board::new(self.width, self.height)?;

        for (kind, pos) in self.objects {
            board.spawn_at(kind, pos)?;
        }

        for (kind, pos) in self.background {
            let object = board.spawn(kind);
            board.set_background(object, pos)?;
        }

        for (kind, property) in self.properties {
            board.registry_mut().set(kind, property, true);
        }

        Ok(board)
    }
}
