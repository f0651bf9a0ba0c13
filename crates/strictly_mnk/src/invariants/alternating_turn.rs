//! Alternating turn invariant: sides alternate X, O, X, O, ...

use super::Invariant;
use crate::game::Match;
use crate::players::MoveSource;
use crate::types::Side;

/// Invariant: sides alternate, starting from whichever side was due when the
/// match began, and the side to move follows on from the history.
pub struct AlternatingTurnInvariant;

impl<X: MoveSource, O: MoveSource> Invariant<Match<X, O>> for AlternatingTurnInvariant {
    fn holds(game: &Match<X, O>) -> bool {
        let start = game.opening_moves();
        let history = game.history();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.side == Side::for_turn(start + i));

        alternates
            && game.moves_played() == start + history.len()
            && game.to_move() == Side::for_turn(start + history.len())
    }

    fn description() -> &'static str {
        "Sides alternate turns (X, O, X, O, ...)"
    }
}
