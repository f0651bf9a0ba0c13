//! Match settings loaded from a TOML file and overridden from the command line.

use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;
use strictly_mnk::{BoardConfig, ConfigError, ConfigErrorKind, MIN_DIMENSION, Position};
use tracing::{debug, info, instrument};

/// How a side chooses its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PlayerKind {
    /// Reads `row col` lines from standard input.
    Human,
    /// Takes the first empty cell in row-major order.
    FirstFree,
    /// Replays the `moves` list, then `(0, 0)`.
    Scripted,
}

/// Board dimensions as written in the settings file. Unset values fall back
/// to tic-tac-toe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BoardSettings {
    /// Number of rows.
    pub rows: Option<usize>,
    /// Number of columns.
    pub columns: Option<usize>,
    /// Marks in a row needed to win.
    pub win_length: Option<usize>,
}

impl BoardSettings {
    /// Validates the dimensions.
    #[track_caller]
    pub fn resolve(&self) -> Result<BoardConfig, ConfigError> {
        BoardConfig::new(
            self.rows.unwrap_or(MIN_DIMENSION),
            self.columns.unwrap_or(MIN_DIMENSION),
            self.win_length.unwrap_or(MIN_DIMENSION),
        )
    }
}

/// Settings for one side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlayerSettings {
    /// Display name.
    pub name: Option<String>,
    /// Move source kind.
    pub kind: Option<PlayerKind>,
    /// Moves for a scripted source, as `[row, col]` pairs.
    #[serde(default)]
    pub moves: Vec<[isize; 2]>,
}

impl PlayerSettings {
    /// Scripted moves as positions.
    pub fn positions(&self) -> Vec<Position> {
        self.moves
            .iter()
            .map(|&[row, col]| Position::new(row, col))
            .collect()
    }
}

/// Everything needed to set up a match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchSettings {
    /// Board dimensions.
    #[serde(default)]
    pub board: BoardSettings,
    /// The side that moves first.
    #[serde(default)]
    pub x: PlayerSettings,
    /// The side that moves second.
    #[serde(default)]
    pub o: PlayerSettings,
}

impl MatchSettings {
    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Parse(e.to_string())))
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(ConfigErrorKind::Read(e.to_string())))?;
        let settings = Self::from_toml_str(&content)?;
        info!(board = ?settings.board, "Match settings loaded");
        Ok(settings)
    }

    /// Replaces board dimensions with any that were given explicitly.
    pub fn override_board(
        &mut self,
        rows: Option<usize>,
        columns: Option<usize>,
        win_length: Option<usize>,
    ) {
        self.board.rows = rows.or(self.board.rows);
        self.board.columns = columns.or(self.board.columns);
        self.board.win_length = win_length.or(self.board.win_length);
    }

    /// Replaces player settings with any that were given explicitly.
    pub fn override_players(
        &mut self,
        x_kind: Option<PlayerKind>,
        o_kind: Option<PlayerKind>,
        x_name: Option<String>,
        o_name: Option<String>,
    ) {
        self.x.kind = x_kind.or(self.x.kind);
        self.o.kind = o_kind.or(self.o.kind);
        self.x.name = x_name.or(self.x.name.take());
        self.o.name = o_name.or(self.o.name.take());
    }
}
