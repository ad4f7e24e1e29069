//! Plain text board renderer.

use std::io::Write;

use crate::board::Board;
use crate::core::{DrawRect, Position};
use crate::error::Result;
use crate::turn::RenderSink;

const BLANK: &str = "..";

/// Draws boards as text, two characters per cell.
///
/// A cell shows the code of the object placed last, else its background,
/// else `..`. Frames after the first are preceded by a blank line.
///
/// ```
/// use rule_grid::board::BoardBuilder;
/// use rule_grid::core::DrawRect;
/// use rule_grid::render::TextRenderer;
/// use rule_grid::tokens::TokenKind;
/// use rule_grid::turn::RenderSink;
///
/// let board = BoardBuilder::new(3, 1)
///     .sentence(0, 0, &[TokenKind::NounBaba, TokenKind::Is, TokenKind::You])
///     .build()
///     .unwrap();
///
/// let mut renderer = TextRenderer::new(Vec::new());
/// renderer.draw(&board, DrawRect::default()).unwrap();
/// assert_eq!(String::from_utf8(renderer.into_inner()).unwrap(), "BA IS YU\n");
/// ```
pub struct TextRenderer<W: Write> {
    out: W,
    frames: usize,
}

impl<W: Write> TextRenderer<W> {
    /// Render into `out`.
    pub fn new(out: W) -> Self {
        Self { out, frames: 0 }
    }

    /// Frames drawn so far.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn cell_code(board: &Board, pos: Position) -> Result<&'static str> {
        if let Some(top) = board.objects_at(pos)?.last() {
            return Ok(top.kind.code());
        }
        Ok(board
            .background_at(pos)?
            .map_or(BLANK, |object| object.kind.code()))
    }
}

impl<W: Write> RenderSink for TextRenderer<W> {
    fn draw(&mut self, board: &Board, area: DrawRect) -> Result<()> {
        if self.frames > 0 {
            writeln!(self.out)?;
        }
        for _ in 0..area.top {
            writeln!(self.out)?;
        }

        let indent = " ".repeat(area.left as usize);
        for row in 0..board.height() {
            let codes = (0..board.width())
                .map(|col| Self::cell_code(board, Position::new(col, row)))
                .collect::<Result<Vec<_>>>()?;
            writeln!(self.out, "{indent}{}", codes.join(" "))?;
        }

        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }
}
