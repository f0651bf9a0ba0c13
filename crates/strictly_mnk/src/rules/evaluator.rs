//! Move evaluation.

use super::win::{Direction, Line, find_line, run_length};
use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::EvalError;
use crate::types::{Cell, Evaluation, Outcome, Position, Side};
use tracing::{debug, instrument, warn};

/// Decides what a single move does to a match.
///
/// Holds nothing but its configuration, so it is `Copy` and can be shared
/// freely across threads. Every method is a pure function of its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluator {
    config: BoardConfig,
}

impl Evaluator {
    /// Creates an evaluator for the configured board.
    pub fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Evaluates `side` playing at `pos` on `board`, which has `empty_cells`
    /// unoccupied cells.
    ///
    /// The board is left untouched; the candidate cell is treated as filled
    /// for the purpose of the scan. Only lines through `pos` are inspected, so
    /// `board` must not already hold a completed line (see [`Self::find_line`]).
    ///
    /// The board shape is not checked here; use [`Self::evaluate`] for boards
    /// of unknown provenance.
    #[instrument(level = "debug", skip_all, fields(%side, %pos, empty_cells = empty_cells))]
    pub fn scan(
        &self,
        board: &Board,
        side: Side,
        pos: Position,
        empty_cells: usize,
    ) -> Evaluation {
        if empty_cells == 0 {
            debug!("Board already exhausted");
            return Evaluation::Over(Outcome::Draw);
        }

        match board.get(pos) {
            Some(Cell::Empty) => {}
            Some(Cell::Occupied(_)) | None => {
                warn!("Illegal move, side forfeits");
                return Evaluation::Over(Outcome::Winner(side.opponent()));
            }
        }

        let win_length = *self.config.win_length();
        for direction in Direction::ALL {
            if run_length(board, side, pos, direction, win_length) >= win_length {
                debug!(?direction, "Line completed");
                return Evaluation::Over(Outcome::Winner(side));
            }
        }

        if empty_cells == 1 {
            debug!("Last cell filled without a line");
            return Evaluation::Over(Outcome::Draw);
        }

        Evaluation::Continue
    }

    /// Evaluates a move against a board from an arbitrary source.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidBoard`] if the board's shape differs from
    /// the configuration. No scan is performed in that case.
    #[instrument(skip_all, fields(%side, %pos))]
    pub fn evaluate(
        &self,
        board: &Board,
        side: Side,
        pos: Position,
    ) -> Result<Evaluation, EvalError> {
        if !board.fits(&self.config) {
            warn!(
                rows = board.rows(),
                columns = board.columns(),
                "Board shape does not match configuration"
            );
            return Err(EvalError::InvalidBoard);
        }
        Ok(self.scan(board, side, pos, board.count_empty()))
    }

    /// Evaluates a move expressed in numeric codes: cells are 0 (empty),
    /// 1 (X) or 2 (O), and `side` is 1 or 2.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidSide`] for a side code other than 1 or 2,
    /// and [`EvalError::InvalidBoard`] for ragged rows, unknown cell codes, or
    /// a shape that differs from the configuration.
    #[instrument(skip(self, grid))]
    pub fn evaluate_codes<R: AsRef<[u8]>>(
        &self,
        grid: &[R],
        side: u8,
        row: isize,
        col: isize,
    ) -> Result<Evaluation, EvalError> {
        let side = Side::try_from(side)?;
        let board = Board::from_codes(grid)?;
        self.evaluate(&board, side, Position::new(row, col))
    }

    /// Scans the whole board for an existing line of the configured length.
    pub fn find_line(&self, board: &Board) -> Option<Line> {
        find_line(board, *self.config.win_length())
    }
}
