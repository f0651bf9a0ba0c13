//! No-latent-line invariant: an ongoing match has no completed line.

use super::Invariant;
use crate::game::Match;
use crate::players::MoveSource;

/// Invariant: while a match is in progress the board holds no line of the
/// winning length anywhere.
///
/// The evaluator only scans lines through the newest mark, so a line
/// elsewhere would go unnoticed for the rest of the match.
pub struct NoLatentLineInvariant;

impl<X: MoveSource, O: MoveSource> Invariant<Match<X, O>> for NoLatentLineInvariant {
    fn holds(game: &Match<X, O>) -> bool {
        !game.is_in_progress() || game.evaluator().find_line(game.board()).is_none()
    }

    fn description() -> &'static str {
        "No completed line exists while the match is in progress"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;
    use crate::players::ScriptedSource;
    use crate::types::{Position, Side};

    #[test]
    fn test_finished_match_holds() {
        let mut game = Match::new(
            BoardConfig::tic_tac_toe(),
            ScriptedSource::from_pairs("X", &[(0, 0), (1, 1), (2, 2)]),
            ScriptedSource::from_pairs("O", &[(0, 1), (0, 2)]),
        );
        game.play_to_end();
        assert!(game.evaluator().find_line(game.board()).is_some());
        assert!(NoLatentLineInvariant::holds(&game));
    }

    #[test]
    fn test_planted_line_violates() {
        let mut game = Match::new(
            BoardConfig::tic_tac_toe(),
            ScriptedSource::new("X", []),
            ScriptedSource::new("O", []),
        );
        assert!(NoLatentLineInvariant::holds(&game));
        for col in 0..3 {
            game.board.place(Position::new(2, col), Side::O);
        }
        assert!(!NoLatentLineInvariant::holds(&game));
    }
}
