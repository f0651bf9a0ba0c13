//! Text rendering of a match.

use crate::game::{Match, MatchStatus};
use crate::players::MoveSource;
use crate::types::{Outcome, Side};
use std::fmt;

impl<X: MoveSource, O: MoveSource> Match<X, O> {
    /// Display name of the source playing `side`.
    pub fn name_of(&self, side: Side) -> &str {
        match side {
            Side::X => self.player_x().name(),
            Side::O => self.player_o().name(),
        }
    }

    /// One-line description of the match status.
    pub fn status_line(&self) -> String {
        match self.status() {
            MatchStatus::InProgress => "Game is still in progress".to_string(),
            MatchStatus::Finished(Outcome::Draw) => "Game is a Draw!".to_string(),
            MatchStatus::Finished(Outcome::Winner(side)) => {
                format!("Winner is {} as '{}'", self.name_of(side), side)
            }
        }
    }

    /// Renders the match: a title line, one line per board row, then the
    /// status. There is no trailing newline.
    ///
    /// ```text
    /// Alice as 'X' vs. Bob as 'O'
    /// X O -
    /// - X -
    /// - - -
    /// Game is still in progress
    /// ```
    pub fn pretty(&self) -> String {
        self.to_string()
    }
}

impl<X: MoveSource, O: MoveSource> fmt::Display for Match<X, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} as '{}' vs. {} as '{}'",
            self.name_of(Side::X),
            Side::X,
            self.name_of(Side::O),
            Side::O
        )?;
        f.write_str(&self.board().display())?;
        f.write_str(&self.status_line())
    }
}
