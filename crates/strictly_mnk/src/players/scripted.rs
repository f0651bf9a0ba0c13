//! Move source that replays a fixed list of moves.

use super::MoveSource;
use crate::board::Board;
use crate::types::{Outcome, Position, Side};
use std::collections::VecDeque;
use tracing::debug;

/// Plays a predetermined sequence of positions.
///
/// Once the script runs out it keeps answering `(0, 0)`, which on a busy
/// board is an occupied cell and so forfeits. The outcome passed to
/// [`MoveSource::done`] is recorded for inspection.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    name: String,
    moves: VecDeque<Position>,
    calls: usize,
    notifications: usize,
    outcome: Option<Outcome>,
}

impl ScriptedSource {
    /// Creates a source that plays `moves` in order.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
            calls: 0,
            notifications: 0,
            outcome: None,
        }
    }

    /// Creates a source from `(row, col)` pairs.
    pub fn from_pairs(name: impl Into<String>, pairs: &[(isize, isize)]) -> Self {
        Self::new(name, pairs.iter().map(|&(row, col)| Position::new(row, col)))
    }

    /// Number of times the match asked this source for a move.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Number of end-of-match notifications received.
    pub fn notifications(&self) -> usize {
        self.notifications
    }

    /// Outcome reported by the match, once it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedSource {
    fn play(&mut self, _board: &Board, side: Side) -> Position {
        self.calls += 1;
        let pos = self.moves.pop_front().unwrap_or(Position::new(0, 0));
        debug!(source = %self.name, %side, %pos, "Scripted move");
        pos
    }

    fn done(&mut self, outcome: Outcome) {
        self.notifications += 1;
        self.outcome = Some(outcome);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_script_then_origin() {
        let board = Board::empty(3, 3);
        let mut source = ScriptedSource::from_pairs("s", &[(2, 1), (-1, 0)]);
        assert_eq!(source.play(&board, Side::X), Position::new(2, 1));
        assert_eq!(source.play(&board, Side::X), Position::new(-1, 0));
        assert_eq!(source.play(&board, Side::X), Position::new(0, 0));
        assert_eq!(source.calls(), 3);
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_records_outcome() {
        let mut source = ScriptedSource::new("s", []);
        assert_eq!(source.outcome(), None);
        source.done(Outcome::Draw);
        assert_eq!(source.outcome(), Some(Outcome::Draw));
        assert_eq!(source.notifications(), 1);
        assert_eq!(source.name(), "s");
    }
}
