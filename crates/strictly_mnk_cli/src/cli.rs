//! Command-line interface for strictly_mnk.

use crate::settings::PlayerKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly m,n,k - play and evaluate m,n,k games
#[derive(Parser, Debug)]
#[command(name = "strictly_mnk")]
#[command(about = "Play and evaluate m,n,k games (tic-tac-toe, Gomoku, ...)", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match to the end and print the result
    Play {
        /// TOML file with board and player settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of rows
        #[arg(long)]
        rows: Option<usize>,

        /// Number of columns
        #[arg(long)]
        columns: Option<usize>,

        /// Marks in a row needed to win
        #[arg(short = 'k', long)]
        win_length: Option<usize>,

        /// Move source for X (default: human)
        #[arg(long, value_enum)]
        x: Option<PlayerKind>,

        /// Move source for O (default: first-free)
        #[arg(long, value_enum)]
        o: Option<PlayerKind>,

        /// Display name for X
        #[arg(long)]
        x_name: Option<String>,

        /// Display name for O
        #[arg(long)]
        o_name: Option<String>,
    },

    /// Evaluate a single move on a board read from a JSON grid of 0/1/2 codes
    Evaluate {
        /// JSON file holding an array of rows
        #[arg(short, long)]
        board: PathBuf,

        /// Side to move: 1 for X, 2 for O
        #[arg(short, long)]
        side: u8,

        /// Row of the move
        #[arg(long, allow_negative_numbers = true)]
        row: isize,

        /// Column of the move
        #[arg(long, allow_negative_numbers = true)]
        col: isize,

        /// Marks in a row needed to win
        #[arg(short = 'k', long, default_value = "3")]
        win_length: usize,
    },
}
