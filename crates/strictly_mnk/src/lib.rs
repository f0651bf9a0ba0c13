//! Strictly m,n,k - pure game logic for m,n,k games
//!
//! Two marks alternate on an `m × n` grid; the first to place `k` in an
//! unbroken horizontal, vertical or diagonal line wins. Tic-tac-toe is the
//! 3,3,3 game, Gomoku is 15,15,5.
//!
//! # Architecture
//!
//! - **Rules**: the stateless [`Evaluator`] decides what a single move does,
//!   looking only at lines through that move
//! - **Match**: [`Match`] owns the board, asks two [`MoveSource`]s for moves
//!   in turn and ends the match on a line, a full board or an illegal move
//! - **Invariants**: properties of a running match, checked in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_mnk::{BoardConfig, FirstFreeSource, Match, Outcome, Side};
//!
//! let config = BoardConfig::tic_tac_toe();
//! let mut game = Match::new(config, FirstFreeSource::new("Alice"), FirstFreeSource::new("Bob"));
//! let outcome = game.play_to_end();
//!
//! // Row-major filling hands X the anti-diagonal on its fourth move.
//! assert_eq!(outcome, Outcome::Winner(Side::X));
//! println!("{}", game.pretty());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod config;
mod error;
mod game;
mod invariants;
mod players;
mod render;
mod rules;
mod types;

// Crate-level exports - Core types
pub use types::{Cell, Evaluation, Move, Outcome, Position, Side};

// Crate-level exports - Board and configuration
pub use board::Board;
pub use config::{BoardConfig, MIN_DIMENSION};

// Crate-level exports - Errors
pub use error::{ConfigError, ConfigErrorKind, EvalError};

// Crate-level exports - Rules
pub use rules::{Direction, Evaluator, Line, find_line, run_length};

// Crate-level exports - Match engine
pub use game::{Match, MatchBuilder, MatchStatus, Turn};

// Crate-level exports - Move sources
pub use players::{FirstFreeSource, MoveSource, ScriptedSource};

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, EmptyCountInvariant, Invariant, InvariantSet, InvariantViolation,
    MatchInvariants, MonotonicBoardInvariant, NoLatentLineInvariant,
};
