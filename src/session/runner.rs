use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::core::{DrawRect, SessionConfig};
use crate::error::Result;
use crate::level::load_level;
use crate::turn::{InputSource, Level, Outcome, RenderSink};

/// How one level went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelResult {
    /// The file could not be loaded.
    Unopened,
    /// Played to the end.
    Finished(Outcome),
    /// Input ran out or the player quit.
    Quit,
}

/// One level of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelReport {
    pub path: PathBuf,
    pub result: LevelResult,
}

/// Everything a session played, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub levels: Vec<LevelReport>,
}

impl SessionReport {
    /// Levels played to an outcome.
    #[must_use]
    pub fn played(&self) -> usize {
        self.levels
            .iter()
            .filter(|l| matches!(l.result, LevelResult::Finished(_)))
            .count()
    }

    /// Levels won.
    #[must_use]
    pub fn won(&self) -> usize {
        self.levels
            .iter()
            .filter(|l| l.result == LevelResult::Finished(Outcome::Won))
            .count()
    }

    /// Check if the player quit.
    #[must_use]
    pub fn quit(&self) -> bool {
        self.levels.iter().any(|l| l.result == LevelResult::Quit)
    }

    /// A session succeeds when at least one level finished and nobody quit.
    #[must_use]
    pub fn success(&self) -> bool {
        self.played() > 0 && !self.quit()
    }
}

/// Plays a [`SessionConfig`] level by level.
///
/// Status lines (`-- Level ... opened and running. --` and the outcome of
/// each level) go to `out`; boards go to the render sink.
///
/// ## Example
///
/// ```
/// use rule_grid::core::SessionConfig;
/// use rule_grid::session::SessionRunner;
/// use rule_grid::turn::{NullRenderer, ScriptedInput};
///
/// let config = SessionConfig::new().with_level("levels/default-level.txt");
/// let mut input = ScriptedInput::parse("RRRRRRRR").unwrap();
/// let mut out = Vec::new();
///
/// let report = SessionRunner::run(&config, &mut NullRenderer::new(), &mut input, &mut out).unwrap();
/// assert_eq!(report.won(), 1);
/// assert!(report.success());
/// ```
pub struct SessionRunner;

impl SessionRunner {
    /// Play every configured level, falling back to the default level when
    /// none opened.
    pub fn run<I: InputSource + ?Sized>(
        config: &SessionConfig,
        renderer: &mut impl RenderSink,
        input: &mut I,
        out: &mut impl Write,
    ) -> Result<SessionReport> {
        let mut report = SessionReport::default();

        for path in &config.levels {
            let result = Self::play_level(path, config.draw_area, renderer, input, out)?;
            report.levels.push(LevelReport {
                path: path.clone(),
                result,
            });
            if result == LevelResult::Quit {
                return Ok(report);
            }
        }

        if report.played() == 0 {
            let path = &config.default_level;
            info!(path = %path.display(), "no level opened, playing the default");
            let result = Self::play_level(path, config.draw_area, renderer, input, out)?;
            report.levels.push(LevelReport {
                path: path.clone(),
                result,
            });
        }

        info!(played = report.played(), won = report.won(), "session finished");
        Ok(report)
    }

    /// Load and play a single level file.
    pub fn play_level<I: InputSource + ?Sized>(
        path: &Path,
        area: DrawRect,
        renderer: &mut impl RenderSink,
        input: &mut I,
        out: &mut impl Write,
    ) -> Result<LevelResult> {
        let board = match load_level(path) {
            Ok(board) => board,
            Err(err) => {
                warn!(path = %path.display(), %err, "level skipped");
                writeln!(out, "-- Level {} cannot be opened. --", path.display())?;
                return Ok(LevelResult::Unopened);
            }
        };

        writeln!(out, "-- Level {} opened and running. --", path.display())?;
        info!(path = %path.display(), "level started");

        let mut level = Level::new(board).with_draw_area(area);
        match level.run(renderer, input)? {
            Some(outcome) => {
                writeln!(out, "{outcome}")?;
                Ok(LevelResult::Finished(outcome))
            }
            None => {
                info!(path = %path.display(), turns = level.turns(), "player quit");
                Ok(LevelResult::Quit)
            }
        }
    }
}
