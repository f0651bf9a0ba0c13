//! Board configuration.

use crate::error::{ConfigError, ConfigErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest allowed value for rows, columns and win length.
pub const MIN_DIMENSION: usize = 3;

/// Validated board shape and win condition.
///
/// Construction is the only place a configuration is checked; a value of this
/// type always satisfies `rows >= 3`, `columns >= 3` and
/// `3 <= win_length <= min(rows, columns)`. Deserialization goes through the
/// same checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    /// Number of rows.
    rows: usize,
    /// Number of columns.
    columns: usize,
    /// Consecutive marks needed to win.
    win_length: usize,
}

/// Unchecked form used for deserialization.
#[derive(Debug, Deserialize)]
struct RawBoardConfig {
    rows: usize,
    columns: usize,
    win_length: usize,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        BoardConfig::new(raw.rows, raw.columns, raw.win_length)
    }
}

impl BoardConfig {
    /// Creates a validated configuration.
    #[track_caller]
    #[instrument]
    pub fn new(rows: usize, columns: usize, win_length: usize) -> Result<Self, ConfigError> {
        if rows < MIN_DIMENSION {
            return Err(ConfigError::new(ConfigErrorKind::RowsTooFew(rows)));
        }
        if columns < MIN_DIMENSION {
            return Err(ConfigError::new(ConfigErrorKind::ColumnsTooFew(columns)));
        }
        if win_length < MIN_DIMENSION {
            return Err(ConfigError::new(ConfigErrorKind::WinLengthTooShort(
                win_length,
            )));
        }
        let limit = rows.min(columns);
        if win_length > limit {
            return Err(ConfigError::new(ConfigErrorKind::WinLengthTooLong {
                win_length,
                limit,
            }));
        }

        debug!("Board configuration accepted");
        Ok(Self {
            rows,
            columns,
            win_length,
        })
    }

    /// Square board of the given size.
    #[track_caller]
    pub fn square(size: usize, win_length: usize) -> Result<Self, ConfigError> {
        Self::new(size, size, win_length)
    }

    /// Classic three-by-three tic-tac-toe.
    pub fn tic_tac_toe() -> Self {
        Self {
            rows: 3,
            columns: 3,
            win_length: 3,
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Parses a configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
    }

    /// Loads a configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading board config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            rows = config.rows,
            columns = config.columns,
            win_length = config.win_length,
            "Board config loaded"
        );
        Ok(config)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::tic_tac_toe()
    }
}
