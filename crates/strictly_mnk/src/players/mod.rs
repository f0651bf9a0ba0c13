//! Move source trait and implementations.

mod first_free;
mod scripted;

pub use first_free::FirstFreeSource;
pub use scripted::ScriptedSource;

use crate::board::Board;
use crate::types::{Outcome, Position, Side};

/// Anything that can choose moves for one side of a match.
///
/// The match calls [`play`](Self::play) once per turn for the acting side and
/// [`done`](Self::done) exactly once on both sources when the match ends.
/// The board is lent immutably, so a source can inspect it but never change
/// match state.
pub trait MoveSource {
    /// Picks the next position to play as `side`.
    ///
    /// Any position may be returned. Off-board or occupied positions are not
    /// rejected; they forfeit the match.
    fn play(&mut self, board: &Board, side: Side) -> Position;

    /// Informs the source that the match is over.
    fn done(&mut self, outcome: Outcome);

    /// Returns the source's display name.
    fn name(&self) -> &str;
}

impl<T: MoveSource + ?Sized> MoveSource for Box<T> {
    fn play(&mut self, board: &Board, side: Side) -> Position {
        (**self).play(board, side)
    }

    fn done(&mut self, outcome: Outcome) {
        (**self).done(outcome)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: MoveSource + ?Sized> MoveSource for &mut T {
    fn play(&mut self, board: &Board, side: Side) -> Position {
        (**self).play(board, side)
    }

    fn done(&mut self, outcome: Outcome) {
        (**self).done(outcome)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
