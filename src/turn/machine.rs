//! Turn sequencing for one level.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::io::{InputSource, RenderSink};
use crate::board::Board;
use crate::core::{Direction, DrawRect};
use crate::effects::EliminationEngine;
use crate::error::{EngineError, Result};
use crate::movement::MovementResolver;
use crate::rules::RuleDeriver;

/// How a level ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A `You` object shares a cell with a `Win` object.
    Won,
    /// Nothing on the board is `You`.
    Lost,
}

impl Outcome {
    /// Check if this is a win.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Won)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => f.write_str("Won"),
            Outcome::Lost => f.write_str("Lost"),
        }
    }
}

/// Where a level is within its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    Rendering,
    DerivingPre,
    /// Waiting for a direction.
    Moving,
    DerivingPost,
    Eliminating,
    Evaluating,
    Terminal(Outcome),
}

/// Result of finishing a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStatus {
    /// The level goes on.
    Continue,
    /// The level ended.
    Finished(Outcome),
}

/// A level being played.
///
/// A turn is split in two around the wait for input: [`Level::begin_turn`]
/// draws the board and derives rules, [`Level::finish_turn`] takes the
/// direction and does the rest. [`Level::play_turn`] does both.
///
/// ## Usage
///
/// ```
/// use rule_grid::board::BoardBuilder;
/// use rule_grid::core::Direction;
/// use rule_grid::tokens::TokenKind;
/// use rule_grid::turn::{Level, NullRenderer, Outcome, TurnStatus};
///
/// // BABA IS YOU, FLAG IS WIN, and a flag one step east of Baba.
/// let board = BoardBuilder::new(5, 3)
///     .sentence(0, 0, &[TokenKind::NounBaba, TokenKind::Is, TokenKind::You])
///     .sentence(0, 1, &[TokenKind::NounFlag, TokenKind::Is, TokenKind::Win])
///     .object(TokenKind::SprBaba, 3, 2)
///     .object(TokenKind::SprFlag, 4, 2)
///     .build()
///     .unwrap();
///
/// let mut level = Level::new(board);
/// let mut renderer = NullRenderer::new();
///
/// let status = level.play_turn(Direction::East, &mut renderer).unwrap();
/// assert_eq!(status, TurnStatus::Finished(Outcome::Won));
/// assert_eq!(renderer.frames(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Level {
    board: Board,
    phase: TurnPhase,
    draw_area: DrawRect,
    turns: u32,
}

impl Level {
    /// Start playing a board. The level begins in [`TurnPhase::Rendering`].
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            phase: TurnPhase::Rendering,
            draw_area: DrawRect::default(),
            turns: 0,
        }
    }

    /// Set the rectangle passed to the renderer.
    #[must_use]
    pub fn with_draw_area(mut self, area: DrawRect) -> Self {
        self.draw_area = area;
        self
    }

    // === Accessors ===

    /// The board being played.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Give the board back, ending the level.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Completed turns.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The outcome, once the level has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            TurnPhase::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The rectangle passed to the renderer.
    #[must_use]
    pub fn draw_area(&self) -> DrawRect {
        self.draw_area
    }

    // === Turn Steps ===

    /// Draw the board and derive rules. Leaves the level waiting for a
    /// direction in [`TurnPhase::Moving`].
    pub fn begin_turn(&mut self, renderer: &mut impl RenderSink) -> Result<()> {
        self.expect_phase(TurnPhase::Rendering)?;

        renderer.draw(&self.board, self.draw_area)?;

        self.phase = TurnPhase::DerivingPre;
        RuleDeriver::derive(&mut self.board);
        self.phase = TurnPhase::Moving;
        Ok(())
    }

    /// Move, derive again, eliminate, then evaluate.
    ///
    /// On a terminal outcome one final frame is drawn.
    pub fn finish_turn(
        &mut self,
        direction: Direction,
        renderer: &mut impl RenderSink,
    ) -> Result<TurnStatus> {
        self.expect_phase(TurnPhase::Moving)?;

        let report = MovementResolver::move_all(&mut self.board, direction)?;
        debug!(%direction, moved = report.moved.len(), blocked = report.blocked.len(), "movement resolved");

        self.phase = TurnPhase::DerivingPost;
        RuleDeriver::derive(&mut self.board);

        self.phase = TurnPhase::Eliminating;
        EliminationEngine::apply(&mut self.board)?;

        self.phase = TurnPhase::Evaluating;
        self.turns += 1;

        match self.evaluate() {
            Some(outcome) => {
                self.phase = TurnPhase::Terminal(outcome);
                info!(%outcome, turns = self.turns, "level finished");
                renderer.draw(&self.board, self.draw_area)?;
                Ok(TurnStatus::Finished(outcome))
            }
            None => {
                self.phase = TurnPhase::Rendering;
                Ok(TurnStatus::Continue)
            }
        }
    }

    /// Play a whole turn.
    pub fn play_turn(
        &mut self,
        direction: Direction,
        renderer: &mut impl RenderSink,
    ) -> Result<TurnStatus> {
        self.begin_turn(renderer)?;
        self.finish_turn(direction, renderer)
    }

    /// Play until the level ends or input runs out.
    ///
    /// Returns `Some(outcome)` on a terminal state and `None` if the input
    /// source stopped first. A level left waiting for input can be resumed
    /// by calling `run` again.
    pub fn run<I: InputSource + ?Sized>(
        &mut self,
        renderer: &mut impl RenderSink,
        input: &mut I,
    ) -> Result<Option<Outcome>> {
        loop {
            if self.phase == TurnPhase::Rendering {
                self.begin_turn(renderer)?;
            }

            let Some(direction) = input.next_direction()? else {
                return Ok(None);
            };

            if let TurnStatus::Finished(outcome) = self.finish_turn(direction, renderer)? {
                return Ok(Some(outcome));
            }
        }
    }

    // === Internal ===

    /// Loss is checked before win: a board with no `You` has no winner.
    fn evaluate(&self) -> Option<Outcome> {
        if self.board.lost() {
            Some(Outcome::Lost)
        } else if self.board.won() {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    fn expect_phase(&self, expected: TurnPhase) -> Result<()> {
        match self.phase {
            TurnPhase::Terminal(outcome) => Err(EngineError::LevelFinished(outcome)),
            actual if actual == expected => Ok(()),
            actual => Err(EngineError::UnexpectedPhase { expected, actual }),
        }
    }
}
