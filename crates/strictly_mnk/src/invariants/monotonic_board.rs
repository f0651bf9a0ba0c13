//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::game::Match;
use crate::players::MoveSource;

/// Invariant: the board is the opening position plus the history, and no
/// move in the history landed on a marked cell.
pub struct MonotonicBoardInvariant;

impl<X: MoveSource, O: MoveSource> Invariant<Match<X, O>> for MonotonicBoardInvariant {
    fn holds(game: &Match<X, O>) -> bool {
        let mut replayed = game.opening().clone();
        for mv in game.history() {
            if !replayed.place(mv.position, mv.side) {
                return false;
            }
        }
        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
