//! Board storage and queries.
//!
//! Each cell holds an insertion-ordered stack of objects. Order only affects
//! draw order and which object a "first of" query returns; rules never depend
//! on it otherwise. A parallel background layer holds at most one object per
//! cell and is never moved or eliminated.
//!
//! ## Bounds
//!
//! Every mutation and every query returning cell contents validates its
//! coordinates and fails with [`EngineError::OutOfBounds`]. The lookups used
//! by neighbour scans (`first_of_category`, `first_of_kind`, `has_token`,
//! `has_property`) report "absent" instead, so that sentence reading near an
//! edge needs no special casing.

use smallvec::SmallVec;

use crate::core::{ObjectId, PlacedObject, Position, MAX_COLS, MAX_ROWS};
use crate::error::{EngineError, Result};
use crate::tokens::{Category, Property, PropertyRegistry, TokenKind};

type Cell = SmallVec<[PlacedObject; 4]>;

/// A rectangular puzzle board.
///
/// ## Usage
///
/// ```
/// use rule_grid::board::Board;
/// use rule_grid::core::Position;
/// use rule_grid::tokens::{Property, TokenKind};
///
/// let mut board = Board::new(5, 3).unwrap();
/// let baba = board.spawn_at(TokenKind::SprBaba, Position::new(1, 1)).unwrap();
///
/// board.transfer(baba, Position::new(1, 1), Position::new(2, 1)).unwrap();
/// assert_eq!(board.objects_at(Position::new(2, 1)).unwrap(), &[baba]);
///
/// // Properties live on the kind.
/// board.registry_mut().set(TokenKind::SprBaba, Property::You, true);
/// assert!(board.has_property(Position::new(2, 1), Property::You));
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,

    /// Column-major: index = col * height + row.
    cells: Vec<Cell>,

    background: Vec<Option<PlacedObject>>,

    registry: PropertyRegistry,

    next_id: u32,
}

impl Board {
    /// Create an empty board.
    ///
    /// Fails with [`EngineError::InvalidDimensions`] unless
    /// `1 <= width <= MAX_COLS` and `1 <= height <= MAX_ROWS`.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if !(1..=MAX_COLS).contains(&width) || !(1..=MAX_ROWS).contains(&height) {
            return Err(EngineError::InvalidDimensions {
                cols: width,
                rows: height,
            });
        }

        let size = (width * height) as usize;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::new(); size],
            background: vec![None; size],
            registry: PropertyRegistry::new(),
            next_id: 0,
        })
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if a position lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.col >= 0 && pos.row >= 0 && pos.col < self.width && pos.row < self.height
    }

    fn index(&self, pos: Position) -> Result<usize> {
        if self.contains(pos) {
            Ok((pos.col * self.height + pos.row) as usize)
        } else {
            Err(EngineError::OutOfBounds {
                col: pos.col,
                row: pos.row,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).ok().map(|i| &self.cells[i])
    }

    /// Every position on the board, column by column.
    ///
    /// All board-wide scans use this order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let height = self.height;
        (0..self.width).flat_map(move |col| (0..height).map(move |row| Position::new(col, row)))
    }

    // === Registry ===

    /// The property registry backing this board's objects.
    #[must_use]
    pub fn registry(&self) -> &PropertyRegistry {
        &self.registry
    }

    /// Mutable access to the property registry.
    pub fn registry_mut(&mut self) -> &mut PropertyRegistry {
        &mut self.registry
    }

    /// Check if an object's kind currently holds a property.
    #[must_use]
    pub fn object_has(&self, object: PlacedObject, property: Property) -> bool {
        self.registry.has(object.kind, property)
    }

    // === Object Management ===

    /// Create a new object of `kind`, not yet placed anywhere.
    ///
    /// Registers the kind so that word kinds get their `Push` baseline.
    pub fn spawn(&mut self, kind: TokenKind) -> PlacedObject {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        self.registry.register(kind);
        PlacedObject::new(id, kind)
    }

    /// Create an object of `kind` and place it.
    pub fn spawn_at(&mut self, kind: TokenKind, pos: Position) -> Result<PlacedObject> {
        let index = self.index(pos)?;
        let object = self.spawn(kind);
        self.cells[index].push(object);
        Ok(object)
    }

    /// Add an object on top of a cell.
    pub fn place(&mut self, object: PlacedObject, pos: Position) -> Result<()> {
        let index = self.index(pos)?;
        self.registry.register(object.kind);
        self.cells[index].push(object);
        Ok(())
    }

    /// Remove a specific object from a cell.
    ///
    /// Returns `false` (and changes nothing) if the object is not there.
    pub fn remove(&mut self, object: PlacedObject, pos: Position) -> Result<bool> {
        let index = self.index(pos)?;
        let cell = &mut self.cells[index];
        match cell.iter().position(|o| o.id == object.id) {
            Some(i) => {
                cell.remove(i);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Empty a cell. Returns the objects that were there.
    pub fn clear(&mut self, pos: Position) -> Result<Vec<PlacedObject>> {
        let index = self.index(pos)?;
        Ok(std::mem::take(&mut self.cells[index]).into_vec())
    }

    /// Move an object from one cell to another.
    ///
    /// Both positions are validated before anything changes, so an invalid
    /// endpoint leaves the board untouched.
    pub fn transfer(&mut self, object: PlacedObject, from: Position, to: Position) -> Result<()> {
        let from_index = self.index(from)?;
        let to_index = self.index(to)?;

        let cell = &mut self.cells[from_index];
        if let Some(i) = cell.iter().position(|o| o.id == object.id) {
            cell.remove(i);
        }
        self.cells[to_index].push(object);
        Ok(())
    }

    // === Cell Queries ===

    /// Objects in a cell, in insertion order.
    pub fn objects_at(&self, pos: Position) -> Result<&[PlacedObject]> {
        let index = self.index(pos)?;
        Ok(&self.cells[index])
    }

    /// Number of objects in a cell.
    pub fn count_at(&self, pos: Position) -> Result<usize> {
        Ok(self.objects_at(pos)?.len())
    }

    /// Objects in a cell whose kind holds `property`.
    pub fn objects_with_property(
        &self,
        pos: Position,
        property: Property,
    ) -> Result<Vec<PlacedObject>> {
        Ok(self
            .objects_at(pos)?
            .iter()
            .copied()
            .filter(|&o| self.object_has(o, property))
            .collect())
    }

    /// First object of a category in a cell. Off-board positions yield `None`.
    #[must_use]
    pub fn first_of_category(&self, pos: Position, category: Category) -> Option<PlacedObject> {
        self.cell(pos)?
            .iter()
            .copied()
            .find(|o| o.kind.is(category))
    }

    /// First object of a kind in a cell. Off-board positions yield `None`.
    #[must_use]
    pub fn first_of_kind(&self, pos: Position, kind: TokenKind) -> Option<PlacedObject> {
        self.cell(pos)?.iter().copied().find(|o| o.kind == kind)
    }

    /// Check if a cell holds an object of `kind`. Off-board positions yield `false`.
    #[must_use]
    pub fn has_token(&self, pos: Position, kind: TokenKind) -> bool {
        self.first_of_kind(pos, kind).is_some()
    }

    /// Check if some object in a cell holds `property`. Off-board positions
    /// yield `false`.
    #[must_use]
    pub fn has_property(&self, pos: Position, property: Property) -> bool {
        self.cell(pos)
            .is_some_and(|cell| cell.iter().any(|&o| self.object_has(o, property)))
    }

    /// Every placed object of a kind, with its position, in scan order.
    #[must_use]
    pub fn find_kind(&self, kind: TokenKind) -> Vec<(Position, PlacedObject)> {
        self.positions()
            .flat_map(|pos| {
                self.cell(pos)
                    .into_iter()
                    .flatten()
                    .filter(move |o| o.kind == kind)
                    .map(move |&o| (pos, o))
            })
            .collect()
    }

    /// Total number of placed objects (background excluded).
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.cells.iter().map(SmallVec::len).sum()
    }

    // === Background ===

    /// The background object of a cell, if any.
    pub fn background_at(&self, pos: Position) -> Result<Option<PlacedObject>> {
        let index = self.index(pos)?;
        Ok(self.background[index])
    }

    /// Set the background object of a cell, replacing any previous one.
    pub fn set_background(&mut self, object: PlacedObject, pos: Position) -> Result<()> {
        let index = self.index(pos)?;
        self.registry.register(object.kind);
        self.background[index] = Some(object);
        Ok(())
    }

    // === Terminal Conditions ===

    /// Check if some cell holds both a `You` and a `Win` object.
    ///
    /// The two may be different objects; they must share a cell.
    #[must_use]
    pub fn won(&self) -> bool {
        self.positions().any(|pos| {
            self.has_property(pos, Property::You) && self.has_property(pos, Property::Win)
        })
    }

    /// Check if nothing on the board is `You` any more.
    #[must_use]
    pub fn lost(&self) -> bool {
        !self.positions().any(|pos| self.has_property(pos, Property::You))
    }
}
