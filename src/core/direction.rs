//! Board positions and the four movement directions.
//!
//! Coordinates are signed so that neighbour arithmetic near an edge produces
//! an out-of-bounds position (which the board then rejects or reports as
//! absent) instead of wrapping.

use serde::{Deserialize, Serialize};

/// One of the four unit moves on the grid.
///
/// Rows grow southward: north is `(0, -1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    West,
    South,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::West,
        Direction::South,
    ];

    /// The `(dcol, drow)` unit vector.
    #[must_use]
    pub const fn vector(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::South => (0, 1),
        }
    }

    /// Parse a move letter: `U D L R` or compass `N S W E`, any case.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'U' | 'N' => Some(Direction::North),
            'D' | 'S' => Some(Direction::South),
            'L' | 'W' => Some(Direction::West),
            'R' | 'E' => Some(Direction::East),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::West => "west",
            Direction::South => "south",
        };
        f.write_str(name)
    }
}

/// A `(col, row)` coordinate. May lie outside any particular board.
///
/// ```
/// use rule_grid::core::{Direction, Position};
///
/// let p = Position::new(2, 2);
/// assert_eq!(p.step(Direction::East), Position::new(3, 2));
/// assert_eq!(p.step(Direction::North), Position::new(2, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub col: i32,
    pub row: i32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The position one step away in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.vector();
        Self::new(self.col + dc, self.row + dr)
    }

    /// This position and its eight surrounding positions, row by row.
    ///
    /// Some of them may be off the board; callers filter.
    pub fn neighborhood(self) -> impl Iterator<Item = Position> {
        (-1..=1).flat_map(move |dr| (-1..=1).map(move |dc| Position::new(self.col + dc, self.row + dr)))
    }
}

impl From<(i32, i32)> for Position {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors() {
        assert_eq!(Direction::North.vector(), (0, -1));
        assert_eq!(Direction::South.vector(), (0, 1));
        assert_eq!(Direction::East.vector(), (1, 0));
        assert_eq!(Direction::West.vector(), (-1, 0));
    }

    #[test]
    fn test_step_can_leave_board() {
        let p = Position::new(0, 0);
        assert_eq!(p.step(Direction::West), Position::new(-1, 0));
        assert_eq!(p.step(Direction::North), Position::new(0, -1));
    }

    #[test]
    fn test_neighborhood() {
        let cells: Vec<_> = Position::new(1, 1).neighborhood().collect();
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&Position::new(1, 1)));
        assert!(cells.contains(&Position::new(0, 0)));
        assert!(cells.contains(&Position::new(2, 2)));
        assert!(cells.contains(&Position::new(2, 0)));
    }

    #[test]
    fn test_from_letter() {
        assert_eq!(Direction::from_letter('U'), Some(Direction::North));
        assert_eq!(Direction::from_letter('n'), Some(Direction::North));
        assert_eq!(Direction::from_letter('d'), Some(Direction::South));
        assert_eq!(Direction::from_letter('W'), Some(Direction::West));
        assert_eq!(Direction::from_letter('r'), Some(Direction::East));
        assert_eq!(Direction::from_letter('x'), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(3, -1).to_string(), "(3, -1)");
        assert_eq!(Direction::West.to_string(), "west");
    }
}
