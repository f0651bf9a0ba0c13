//! Move source that takes the first empty cell.

use super::MoveSource;
use crate::board::Board;
use crate::types::{Outcome, Position, Side};
use tracing::debug;

/// Picks the first empty cell in row-major order.
///
/// Useful as a filler opponent; it has no strategy at all.
#[derive(Debug, Clone)]
pub struct FirstFreeSource {
    name: String,
}

impl FirstFreeSource {
    /// Creates a new first-free source.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl MoveSource for FirstFreeSource {
    fn play(&mut self, board: &Board, side: Side) -> Position {
        // A full board never reaches a source, but (0, 0) keeps the contract total.
        let pos = board
            .positions()
            .find(|&pos| board.is_empty(pos))
            .unwrap_or(Position::new(0, 0));
        debug!(source = %self.name, %side, %pos, "First free cell chosen");
        pos
    }

    fn done(&mut self, outcome: Outcome) {
        debug!(source = %self.name, %outcome, "Match finished");
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_occupied_cells() {
        let grid: Vec<Vec<u8>> = vec![vec![1, 2, 0], vec![0, 0, 0], vec![0, 0, 0]];
        let board = Board::from_codes(&grid).unwrap();
        let mut source = FirstFreeSource::new("ai");
        assert_eq!(source.play(&board, Side::X), Position::new(0, 2));
    }

    #[test]
    fn test_wraps_to_next_row() {
        let grid: Vec<Vec<u8>> = vec![vec![1, 2, 1], vec![2, 0, 0], vec![0, 0, 0]];
        let board = Board::from_codes(&grid).unwrap();
        let mut source = FirstFreeSource::new("ai");
        assert_eq!(source.play(&board, Side::O), Position::new(1, 1));
    }
}
