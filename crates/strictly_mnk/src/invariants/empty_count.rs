//! Empty-count invariant: the cached count matches the board.

use super::Invariant;
use crate::game::Match;
use crate::players::MoveSource;

/// Invariant: the tracked number of empty cells equals the cells actually
/// empty, and together with the marks played covers the whole grid.
pub struct EmptyCountInvariant;

impl<X: MoveSource, O: MoveSource> Invariant<Match<X, O>> for EmptyCountInvariant {
    fn holds(game: &Match<X, O>) -> bool {
        game.empty_cells() == game.board().count_empty()
            && game.empty_cells() + game.moves_played() == game.config().cell_count()
    }

    fn description() -> &'static str {
        "Empty-cell count matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::players::FirstFreeSource;

    #[test]
    fn test_holds_through_play() {
        let mut game = Match::new(
            BoardConfig::new(3, 5, 3).unwrap(),
            FirstFreeSource::new("X"),
            FirstFreeSource::new("O"),
        );
        while game.advance_turn().continues() {
            assert!(EmptyCountInvariant::holds(&game));
        }
    }

    #[test]
    fn test_stale_count_violates() {
        let mut game = Match::new(
            BoardConfig::tic_tac_toe(),
            FirstFreeSource::new("X"),
            FirstFreeSource::new("O"),
        );
        game.empty_cells = 4;
        assert!(!EmptyCountInvariant::holds(&game));
    }
}
