//! Level text parser.

use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::board::Board;
use crate::core::Position;
use crate::error::{EngineError, Result};
use crate::tokens::TokenKind;

const COMMENT: char = '#';
const SEPARATOR: &str = "%";
const EMPTY: &str = "EMPTY";
const SAME_CELL: &str = "&";

/// Read and parse a level file.
pub fn load_level(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let board = parse_level(&text)?;
    debug!(path = %path.display(), width = board.width(), height = board.height(), objects = board.object_count(), "level loaded");
    Ok(board)
}

/// Parse level text into a board.
///
/// ```
/// use rule_grid::core::Position;
/// use rule_grid::level::parse_level;
/// use rule_grid::tokens::TokenKind;
///
/// let board = parse_level("3 1\nnounWall Is Stop\n").unwrap();
/// assert!(board.has_token(Position::new(1, 0), TokenKind::Is));
/// ```
pub fn parse_level(text: &str) -> Result<Board> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT));

    let (dims_line, dims) = lines
        .next()
        .ok_or_else(|| EngineError::malformed(1, "missing board dimensions"))?;
    let (cols, rows) = parse_dimensions(dims_line, dims)?;
    let mut board = Board::new(cols, rows)?;

    let mut grid_rows = 0;
    let mut in_background = false;
    let mut object_row = 0;
    let mut background_row = 0;

    for (line_no, line) in lines {
        if line == SEPARATOR {
            if in_background {
                return Err(EngineError::malformed(line_no, "more than one `%` separator"));
            }
            in_background = true;
            continue;
        }

        grid_rows += 1;
        if in_background {
            parse_background_row(&mut board, line_no, background_row, line)?;
            background_row += 1;
        } else {
            parse_object_row(&mut board, line_no, object_row, line)?;
            object_row += 1;
        }
    }

    if grid_rows == 0 {
        return Err(EngineError::malformed(dims_line, "no grid rows after the dimensions"));
    }

    Ok(board)
}

fn parse_dimensions(line_no: usize, line: &str) -> Result<(i32, i32)> {
    let malformed = || EngineError::malformed(line_no, format!("expected `<cols> <rows>`, found `{line}`"));

    let mut parts = line.split_whitespace();
    let (Some(cols), Some(rows), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let cols = cols.parse::<i32>().map_err(|_| malformed())?;
    let rows = rows.parse::<i32>().map_err(|_| malformed())?;
    Ok((cols, rows))
}

/// `None` for `EMPTY`.
fn parse_item(item: &str) -> Result<Option<TokenKind>> {
    if item == EMPTY {
        Ok(None)
    } else {
        TokenKind::from_str(item).map(Some)
    }
}

fn parse_object_row(board: &mut Board, line_no: usize, row: i32, line: &str) -> Result<()> {
    if row >= board.height() {
        warn!(line = line_no, row, height = board.height(), "object row beyond board height ignored");
        return Ok(());
    }

    let mut col = 0;
    let mut stack_next = false;
    let mut overflow = false;

    for item in line.split_whitespace() {
        if item == SAME_CELL {
            if col == 0 || stack_next {
                return Err(EngineError::malformed(line_no, "`&` must follow an item"));
            }
            stack_next = true;
            continue;
        }

        let target = if stack_next { col - 1 } else { col };
        if !stack_next {
            col += 1;
        }
        stack_next = false;

        let kind = parse_item(item)?;
        if target >= board.width() {
            overflow = true;
            continue;
        }
        if let Some(kind) = kind {
            board.spawn_at(kind, Position::new(target, row))?;
        }
    }

    if stack_next {
        return Err(EngineError::malformed(line_no, "`&` at end of row"));
    }
    if overflow {
        warn!(line = line_no, width = board.width(), "items beyond board width ignored");
    }
    Ok(())
}

fn parse_background_row(board: &mut Board, line_no: usize, row: i32, line: &str) -> Result<()> {
    if row >= board.height() {
        warn!(line = line_no, row, height = board.height(), "background row beyond board height ignored");
        return Ok(());
    }

    let mut overflow = false;
    for (col, item) in (0..).zip(line.split_whitespace()) {
        if item == SAME_CELL {
            return Err(EngineError::malformed(line_no, "`&` is not allowed in background rows"));
        }
        let kind = parse_item(item)?;
        if col >= board.width() {
            overflow = true;
            continue;
        }
        if let Some(kind) = kind {
            let object = board.spawn(kind);
            board.set_background(object, Position::new(col, row))?;
        }
    }

    if overflow {
        warn!(line = line_no, width = board.width(), "background items beyond board width ignored");
    }
    Ok(())
}
