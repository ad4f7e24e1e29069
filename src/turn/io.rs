//! Render and input collaborators.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::board::Board;
use crate::core::{Direction, DrawRect};
use crate::error::{EngineError, Result};

/// Draws a board. Called synchronously once per turn and once more on
/// reaching a terminal state.
pub trait RenderSink {
    /// Draw `board` into `area`.
    fn draw(&mut self, board: &Board, area: DrawRect) -> Result<()>;
}

impl<T: RenderSink + ?Sized> RenderSink for &mut T {
    fn draw(&mut self, board: &Board, area: DrawRect) -> Result<()> {
        (**self).draw(board, area)
    }
}

/// Supplies the player's moves.
pub trait InputSource {
    /// Block until the next move. `None` means the player quit or input ran
    /// out.
    fn next_direction(&mut self) -> Result<Option<Direction>>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_direction(&mut self) -> Result<Option<Direction>> {
        (**self).next_direction()
    }
}

/// A renderer that draws nothing and counts frames.
#[derive(Clone, Debug, Default)]
pub struct NullRenderer {
    frames: usize,
}

impl NullRenderer {
    /// Create a renderer with no frames drawn.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: 0 }
    }

    /// Frames drawn so far.
    #[must_use]
    pub const fn frames(&self) -> usize {
        self.frames
    }
}

impl RenderSink for NullRenderer {
    fn draw(&mut self, _board: &Board, _area: DrawRect) -> Result<()> {
        self.frames += 1;
        Ok(())
    }
}

/// A fixed sequence of moves.
///
/// ```
/// use rule_grid::core::Direction;
/// use rule_grid::turn::{InputSource, ScriptedInput};
///
/// let mut input = ScriptedInput::parse("R R, d").unwrap();
/// assert_eq!(input.next_direction().unwrap(), Some(Direction::East));
/// assert_eq!(input.remaining(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    moves: VecDeque<Direction>,
}

impl ScriptedInput {
    /// Create a script from directions.
    pub fn new(moves: impl IntoIterator<Item = Direction>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Parse a move string: one letter per move (`U D L R` or `N S W E`, any
    /// case). Whitespace and commas are skipped.
    pub fn parse(script: &str) -> Result<Self> {
        let moves = script
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| Direction::from_letter(c).ok_or(EngineError::InvalidMove(c)))
            .collect::<Result<VecDeque<_>>>()?;
        Ok(Self { moves })
    }

    /// Moves not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_direction(&mut self) -> Result<Option<Direction>> {
        Ok(self.moves.pop_front())
    }
}

/// Map an interactive key or word to a direction.
///
/// Accepts `w a s d`, `h j k l`, and the words `up down left right` or
/// `north south west east`, any case.
#[must_use]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key.trim().to_ascii_lowercase().as_str() {
        "w" | "k" | "up" | "north" => Some(Direction::North),
        "s" | "j" | "down" | "south" => Some(Direction::South),
        "a" | "h" | "left" | "west" => Some(Direction::West),
        "d" | "l" | "right" | "east" => Some(Direction::East),
        _ => None,
    }
}

/// Reads one command per line from a reader (typically stdin).
///
/// `q` or `quit` ends input, as does end of file. Lines that name no
/// direction are skipped.
pub struct LineInput<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineInput<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn next_direction(&mut self) -> Result<Option<Direction>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }

            let command = self.line.trim();
            if command.eq_ignore_ascii_case("q") || command.eq_ignore_ascii_case("quit") {
                return Ok(None);
            }
            if let Some(direction) = direction_for_key(command) {
                return Ok(Some(direction));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_script_parsing() {
        let mut input = ScriptedInput::parse("UdLr NSWE").unwrap();
        let mut moves = Vec::new();
        while let Some(dir) = input.next_direction().unwrap() {
            moves.push(dir);
        }
        assert_eq!(
            moves,
            vec![
                Direction::North,
                Direction::South,
                Direction::West,
                Direction::East,
                Direction::North,
                Direction::South,
                Direction::West,
                Direction::East,
            ]
        );
    }

    #[test]
    fn test_script_rejects_unknown_letter() {
        let err = ScriptedInput::parse("UX").unwrap_err();
        assert!(matches!(err, EngineError::InvalidMove('X')));
    }

    #[test]
    fn test_keys() {
        assert_eq!(direction_for_key("w"), Some(Direction::North));
        assert_eq!(direction_for_key("J"), Some(Direction::South));
        assert_eq!(direction_for_key(" left "), Some(Direction::West));
        assert_eq!(direction_for_key("d"), Some(Direction::East));
        assert_eq!(direction_for_key("x"), None);
    }

    #[test]
    fn test_line_input() {
        let mut input = LineInput::new(Cursor::new("d\n\nnonsense\nup\nq\ns\n"));
        assert_eq!(input.next_direction().unwrap(), Some(Direction::East));
        assert_eq!(input.next_direction().unwrap(), Some(Direction::North));
        assert_eq!(input.next_direction().unwrap(), None);
    }

    #[test]
    fn test_line_input_eof() {
        let mut input = LineInput::new(Cursor::new("a"));
        assert_eq!(input.next_direction().unwrap(), Some(Direction::West));
        assert_eq!(input.next_direction().unwrap(), None);
    }

    #[test]
    fn test_null_renderer_counts() {
        let board = Board::new(2, 2).unwrap();
        let mut renderer = NullRenderer::new();
        renderer.draw(&board, DrawRect::default()).unwrap();
        (&mut renderer).draw(&board, DrawRect::default()).unwrap();
        assert_eq!(renderer.frames(), 2);
    }
}
