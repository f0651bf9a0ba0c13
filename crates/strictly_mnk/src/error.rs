//! Error types for m,n,k games.
//!
//! Only two things can fail: building a match from a bad configuration, and
//! handing the evaluator a board or side it cannot interpret. Illegal moves
//! are not errors; the rules resolve them as forfeits.

use crate::types::Side;
use derive_more::{Display, Error};
use tracing::instrument;

/// What was wrong with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Fewer than three rows.
    #[display("rows must be at least 3, got {}", _0)]
    RowsTooFew(usize),

    /// Fewer than three columns.
    #[display("columns must be at least 3, got {}", _0)]
    ColumnsTooFew(usize),

    /// Win length below three.
    #[display("win length must be at least 3, got {}", _0)]
    WinLengthTooShort(usize),

    /// Win length does not fit on the board.
    #[display("win length {} exceeds the smaller board dimension {}", win_length, limit)]
    WinLengthTooLong {
        /// Requested win length.
        win_length: usize,
        /// Smaller of rows and columns.
        limit: usize,
    },

    /// A match was built without a move source for one side.
    #[display("no move source for side {}", _0)]
    MissingMoveSource(Side),

    /// A configuration file could not be read.
    #[display("failed to read config file: {}", _0)]
    Read(String),

    /// A configuration file could not be parsed.
    #[display("failed to parse config: {}", _0)]
    Parse(String),
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What went wrong.
    #[error(not(source))]
    pub kind: ConfigErrorKind,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the kind of failure.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

/// Error returned when the evaluator is handed input it cannot interpret.
///
/// Raised before any scan runs; nothing is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EvalError {
    /// Board shape does not match the configuration, or holds an unknown cell code.
    #[display("invalid board")]
    InvalidBoard,

    /// Side code is neither 1 (X) nor 2 (O).
    #[display("invalid side {}", _0)]
    InvalidSide(#[error(not(source))] u8),
}
