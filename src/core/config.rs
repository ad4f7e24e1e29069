//! Engine and session configuration.
//!
//! - Board limits are fixed at compile time.
//! - `DrawRect` is the abstract rectangle handed to a render sink.
//! - `SessionConfig` lists the levels a front end should play.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Maximum number of board columns.
pub const MAX_COLS: i32 = 33;

/// Maximum number of board rows.
pub const MAX_ROWS: i32 = 18;

/// Level played when no other level could be opened.
pub const DEFAULT_LEVEL: &str = "levels/default-level.txt";

/// Target drawing rectangle, in abstract units.
///
/// The engine makes no assumption about pixels; a render sink decides what a
/// unit is (a terminal renderer treats them as character cells).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRect {
    pub left: u32,
    pub top: u32,
    pub height: u32,
    pub width: u32,
}

impl DrawRect {
    /// Create a drawing rectangle.
    #[must_use]
    pub const fn new(left: u32, top: u32, height: u32, width: u32) -> Self {
        Self {
            left,
            top,
            height,
            width,
        }
    }
}

impl Default for DrawRect {
    /// The whole screen: one unit per cell of a maximum-size board.
    fn default() -> Self {
        Self::new(0, 0, MAX_ROWS as u32, MAX_COLS as u32)
    }
}

/// Which levels to play, and where to draw them.
///
/// ## Example
///
/// ```
/// use rule_grid::core::{DrawRect, SessionConfig};
///
/// let config = SessionConfig::new()
///     .with_level("levels/one.txt")
///     .with_draw_area(DrawRect::new(2, 1, 18, 33));
///
/// assert_eq!(config.levels.len(), 1);
/// assert_eq!(config.draw_area.left, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Level files, played in order.
    pub levels: Vec<PathBuf>,

    /// Played when none of `levels` could be opened.
    pub default_level: PathBuf,

    /// Rectangle passed to the render sink.
    pub draw_area: DrawRect,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            levels: Vec::new(),
            default_level: PathBuf::from(DEFAULT_LEVEL),
            draw_area: DrawRect::default(),
        }
    }
}

impl SessionConfig {
    /// Create an empty session configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a level file.
    #[must_use]
    pub fn with_level(mut self, path: impl Into<PathBuf>) -> Self {
        self.levels.push(path.into());
        self
    }

    /// Append every file of a directory, sorted by path.
    pub fn with_levels_dir(mut self, dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        self.levels.extend(files);
        Ok(self)
    }

    /// Replace the default level path.
    #[must_use]
    pub fn with_default_level(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_level = path.into();
        self
    }

    /// Set the drawing rectangle.
    #[must_use]
    pub fn with_draw_area(mut self, area: DrawRect) -> Self {
        self.draw_area = area;
        self
    }
}
