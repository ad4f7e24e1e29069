//! Push-chain movement resolution.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::board::Board;
use crate::core::{Direction, ObjectId, PlacedObject, Position};
use crate::error::Result;
use crate::tokens::Property;

/// What happened to the `You` objects during one movement pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveReport {
    /// Objects that advanced one cell.
    pub moved: Vec<PlacedObject>,
    /// Objects that tried and stayed put.
    pub blocked: Vec<PlacedObject>,
}

impl MoveReport {
    /// Check if nothing moved.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.moved.is_empty()
    }
}

/// Resolves one movement pass.
///
/// Moves are all-or-nothing. Feasibility is checked for the whole chain
/// before anything is touched, then the chain is shifted far end first.
///
/// ## Example
///
/// ```
/// use rule_grid::board::BoardBuilder;
/// use rule_grid::core::{Direction, Position};
/// use rule_grid::movement::MovementResolver;
/// use rule_grid::tokens::{Property, TokenKind};
///
/// let mut board = BoardBuilder::new(5, 1)
///     .object(TokenKind::SprBaba, 0, 0)
///     .object(TokenKind::SprRock, 1, 0)
///     .property(TokenKind::SprBaba, Property::You)
///     .property(TokenKind::SprRock, Property::Push)
///     .build()
///     .unwrap();
///
/// MovementResolver::move_all(&mut board, Direction::East).unwrap();
/// assert!(board.has_token(Position::new(1, 0), TokenKind::SprBaba));
/// assert!(board.has_token(Position::new(2, 0), TokenKind::SprRock));
/// ```
pub struct MovementResolver;

impl MovementResolver {
    /// Move every `You` object one cell in `direction`.
    ///
    /// Cells are visited in column-major order. An object is marked as
    /// processed when it is first considered, so one that walks into a cell
    /// not yet scanned is not moved again by its own turn.
    pub fn move_all(board: &mut Board, direction: Direction) -> Result<MoveReport> {
        let mut processed: FxHashSet<ObjectId> = FxHashSet::default();
        let mut report = MoveReport::default();

        let positions: Vec<Position> = board.positions().collect();
        for pos in positions {
            let movers = board.objects_with_property(pos, Property::You)?;
            for object in movers {
                if !processed.insert(object.id) {
                    continue;
                }
                if Self::try_move(board, object, pos, direction)? {
                    report.moved.push(object);
                } else {
                    report.blocked.push(object);
                }
            }
        }

        Ok(report)
    }

    /// Move one object from `from` one step in `direction`, pushing whatever
    /// is in the way.
    ///
    /// Returns `false`, leaving the board unchanged, when the move is blocked.
    pub fn try_move(
        board: &mut Board,
        object: PlacedObject,
        from: Position,
        direction: Direction,
    ) -> Result<bool> {
        let to = from.step(direction);
        if !Self::can_enter(board, to, direction) {
            trace!(%object, %from, %direction, "move blocked");
            return Ok(false);
        }

        Self::shift_pushables(board, to, direction)?;
        board.transfer(object, from, to)?;
        trace!(%object, %from, %to, "moved");
        Ok(true)
    }

    /// Check if something moving in `direction` can enter `pos`.
    ///
    /// `pos` must be on the board and free of `Stop`. If it holds `Push`
    /// objects they must in turn be able to enter the next cell along.
    /// Never mutates the board.
    #[must_use]
    pub fn can_enter(board: &Board, pos: Position, direction: Direction) -> bool {
        let mut pos = pos;
        loop {
            if !board.contains(pos) || board.has_property(pos, Property::Stop) {
                return false;
            }
            if !board.has_property(pos, Property::Push) {
                return true;
            }
            pos = pos.step(direction);
        }
    }

    /// Shift every `Push` object in `pos` one step, clearing the way beyond
    /// them first. Assumes [`Self::can_enter`] already succeeded.
    fn shift_pushables(board: &mut Board, pos: Position, direction: Direction) -> Result<()> {
        let pushables = board.objects_with_property(pos, Property::Push)?;
        if pushables.is_empty() {
            return Ok(());
        }

        let next = pos.step(direction);
        Self::shift_pushables(board, next, direction)?;
        for object in pushables {
            board.transfer(object, pos, next)?;
            trace!(%object, from = %pos, to = %next, "pushed");
        }
        Ok(())
    }
}
