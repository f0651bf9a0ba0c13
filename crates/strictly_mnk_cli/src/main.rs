//! Strictly m,n,k - command-line front end
//!
//! Plays matches between human, scripted and first-free move sources, and
//! evaluates single moves on boards read from JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod players;
mod settings;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use settings::{MatchSettings, PlayerKind};
use std::path::Path;
use strictly_mnk::{BoardConfig, Evaluation, Evaluator, Match, Outcome};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the board; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            rows,
            columns,
            win_length,
            x,
            o,
            x_name,
            o_name,
        } => {
            let mut settings = load_settings(config.as_deref())?;
            settings.override_board(rows, columns, win_length);
            settings.override_players(x, o, x_name, o_name);
            let outcome = run_play(&settings)?;
            debug!(%outcome, "Play finished");
            Ok(())
        }
        Command::Evaluate {
            board,
            side,
            row,
            col,
            win_length,
        } => {
            let evaluation = run_evaluate(&board, side, row, col, win_length)?;
            println!("{}", summarize(&evaluation));
            Ok(())
        }
    }
}

/// Loads the settings file if one was given.
#[instrument]
fn load_settings(path: Option<&Path>) -> Result<MatchSettings> {
    match path {
        Some(path) => MatchSettings::from_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(MatchSettings::default()),
    }
}

/// Plays a match to the end and prints the final rendering.
#[instrument(skip(settings))]
fn run_play(settings: &MatchSettings) -> Result<Outcome> {
    let config = settings.board.resolve()?;
    let player_x = players::build_source(&settings.x, PlayerKind::Human, "Player 1");
    let player_o = players::build_source(&settings.o, PlayerKind::FirstFree, "Player 2");

    info!(
        rows = config.rows(),
        columns = config.columns(),
        win_length = config.win_length(),
        "Starting match"
    );
    let mut game = Match::builder(config)
        .player_x(player_x)
        .player_o(player_o)
        .build()?;
    let outcome = game.play_to_end();
    println!("{}", game.pretty());
    Ok(outcome)
}

/// Evaluates one move on a board read from a JSON grid.
#[instrument]
fn run_evaluate(
    board: &Path,
    side: u8,
    row: isize,
    col: isize,
    win_length: usize,
) -> Result<Evaluation> {
    let content = std::fs::read_to_string(board)
        .with_context(|| format!("reading {}", board.display()))?;
    let grid: Vec<Vec<u8>> = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", board.display()))?;

    let rows = grid.len();
    let columns = grid.first().map_or(0, Vec::len);
    let config = BoardConfig::new(rows, columns, win_length)?;
    let evaluation = Evaluator::new(config).evaluate_codes(&grid, side, row, col)?;
    debug!(?evaluation, "Move evaluated");
    Ok(evaluation)
}

/// One-line machine-readable summary: `terminal=<bool> winner=<0|1|2>`.
fn summarize(evaluation: &Evaluation) -> String {
    format!(
        "terminal={} winner={}",
        evaluation.is_terminal(),
        evaluation.outcome().map_or(0, |outcome| outcome.code())
    )
}
