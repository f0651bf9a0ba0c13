//! Core domain types for m,n,k games.

use crate::error::EvalError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two sides in a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Side {
    /// First mover, rendered as `X`.
    #[display("X")]
    X,
    /// Second mover, rendered as `O`.
    #[display("O")]
    O,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Numeric code used by the grid format (1 for X, 2 for O).
    pub fn code(self) -> u8 {
        match self {
            Side::X => 1,
            Side::O => 2,
        }
    }

    /// Glyph used when rendering a board.
    pub fn glyph(self) -> char {
        match self {
            Side::X => 'X',
            Side::O => 'O',
        }
    }

    /// Side that acts on the given zero-based turn.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 { Side::X } else { Side::O }
    }
}

impl TryFrom<u8> for Side {
    type Error = EvalError;

    #[instrument]
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Side::X),
            2 => Ok(Side::O),
            other => Err(EvalError::InvalidSide(other)),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a mark of the given side.
    Occupied(Side),
}

impl Cell {
    /// Returns true when no side has played here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric code used by the grid format.
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(side) => side.code(),
        }
    }

    /// Glyph used when rendering a board.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Occupied(side) => side.glyph(),
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = EvalError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Occupied(Side::X)),
            2 => Ok(Cell::Occupied(Side::O)),
            _ => Err(EvalError::InvalidBoard),
        }
    }
}

/// A board coordinate proposed by a move source.
///
/// Coordinates are signed: a move source may propose a cell outside the grid,
/// which the rules treat as a forfeit rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Position {
    /// Zero-based row, top to bottom.
    pub row: isize,
    /// Zero-based column, left to right.
    pub col: isize,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A side placing a mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The side making the move.
    pub side: Side,
    /// Where the mark goes.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.side, self.position)
    }
}

/// Result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The side won, either by completing a line or by the opponent forfeiting.
    Winner(Side),
    /// Nobody won.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(*side),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the match was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Numeric winner code: 0 for a draw, otherwise the side's code.
    pub fn code(&self) -> u8 {
        self.winner().map_or(0, Side::code)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(side) => write!(f, "{} wins", side),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// What the rules say about a candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Evaluation {
    /// The move is legal and the match goes on.
    Continue,
    /// The match is over after this move.
    Over(Outcome),
}

impl Evaluation {
    /// Returns true if the match ends with this move.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Evaluation::Over(_))
    }

    /// Returns the winner, if the move ends the match with one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Evaluation::Continue => None,
            Evaluation::Over(outcome) => outcome.winner(),
        }
    }

    /// Returns the outcome, if the move ends the match.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Evaluation::Continue => None,
            Evaluation::Over(outcome) => Some(*outcome),
        }
    }
}
