//! Line detection for m,n,k games.
//!
//! The evaluator only ever looks at lines through the newest mark, and only
//! within `win_length - 1` cells of it. [`find_line`] is the exhaustive
//! counterpart used to check that a board carries no completed line.

use crate::board::Board;
use crate::config::MIN_DIMENSION;
use crate::types::{Cell, Position, Side};
use tracing::instrument;

/// Axis along which a line can be formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// Top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
    /// Upper left to lower right.
    Diagonal,
    /// Upper right to lower left.
    AntiDiagonal,
}

impl Direction {
    /// Scan order used by the evaluator.
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Row and column increment for one step along this axis.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Cells within `win_length - 1` steps of an anchor, clipped to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    min_row: isize,
    max_row: isize,
    min_col: isize,
    max_col: isize,
}

impl Window {
    fn around(board: &Board, anchor: Position, win_length: usize) -> Self {
        let reach = win_length.saturating_sub(1) as isize;
        Self {
            min_row: anchor.row.saturating_sub(reach).max(0),
            max_row: anchor.row.saturating_add(reach).min(board.rows() as isize - 1),
            min_col: anchor.col.saturating_sub(reach).max(0),
            max_col: anchor.col.saturating_add(reach).min(board.columns() as isize - 1),
        }
    }

    fn contains(&self, pos: Position) -> bool {
        (self.min_row..=self.max_row).contains(&pos.row)
            && (self.min_col..=self.max_col).contains(&pos.col)
    }
}

/// Length of the unbroken run of `side` marks through `anchor` along one axis,
/// counting the anchor itself as `side`'s whether or not it is filled.
///
/// Only the window of `win_length - 1` cells either side of the anchor is
/// visited, so the cost is bounded by the win length rather than the board.
/// An anchor off the board has no run and yields 0.
pub fn run_length(
    board: &Board,
    side: Side,
    anchor: Position,
    direction: Direction,
    win_length: usize,
) -> usize {
    if !board.contains(anchor) {
        return 0;
    }
    let window = Window::around(board, anchor, win_length);
    let (dr, dc) = direction.step();
    let mark = Some(Cell::Occupied(side));

    let mut count = 1;
    for sign in [-1, 1] {
        let mut k = 1;
        loop {
            let pos = Position::new(anchor.row + sign * k * dr, anchor.col + sign * k * dc);
            if !window.contains(pos) || board.get(pos) != mark {
                break;
            }
            count += 1;
            k += 1;
        }
    }
    count
}

/// A completed line found on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Owner of the line.
    pub side: Side,
    /// First cell of the line.
    pub start: Position,
    /// Axis the line runs along.
    pub direction: Direction,
}

/// Scans the whole board for any run of `win_length` marks.
///
/// Win lengths below [`MIN_DIMENSION`] are never valid and find nothing.
#[instrument(skip(board), fields(rows = board.rows(), columns = board.columns()))]
pub fn find_line(board: &Board, win_length: usize) -> Option<Line> {
    if win_length < MIN_DIMENSION {
        return None;
    }
    board.positions().find_map(|start| {
        let Some(Cell::Occupied(side)) = board.get(start) else {
            return None;
        };
        Direction::ALL.into_iter().find_map(|direction| {
            let (dr, dc) = direction.step();
            let complete = (1..win_length as isize).all(|k| {
                board.get(Position::new(start.row + k * dr, start.col + k * dc))
                    == Some(Cell::Occupied(side))
            });
            complete.then_some(Line {
                side,
                start,
                direction,
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn board(grid: &[&[u8]]) -> Board {
        Board::from_codes(grid).unwrap()
    }

    #[test]
    fn test_scan_order_matches_iteration_order() {
        assert_eq!(Direction::iter().collect::<Vec<_>>(), Direction::ALL.to_vec());
    }

    #[test]
    fn test_run_counts_both_ways() {
        let b = board(&[&[1, 1, 0, 1, 1], &[0, 0, 0, 0, 0], &[0, 0, 0, 0, 0]]);
        let len = run_length(&b, Side::X, Position::new(0, 2), Direction::Horizontal, 3);
        assert_eq!(len, 5);
    }

    #[test]
    fn test_run_stops_at_opponent() {
        let b = board(&[&[1, 2, 0, 1, 1], &[0, 0, 0, 0, 0], &[0, 0, 0, 0, 0]]);
        let len = run_length(&b, Side::X, Position::new(0, 2), Direction::Horizontal, 3);
        assert_eq!(len, 3);
    }

    #[test]
    fn test_run_clipped_to_window() {
        // Six X in a row to the left, but the window only reaches win_length - 1.
        let b = board(&[
            &[1, 1, 1, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0],
        ]);
        let len = run_length(&b, Side::X, Position::new(0, 6), Direction::Horizontal, 3);
        assert_eq!(len, 3);
    }

    #[test]
    fn test_anti_diagonal_run() {
        let b = board(&[&[0, 0, 2], &[0, 2, 0], &[0, 0, 0]]);
        let len = run_length(&b, Side::O, Position::new(2, 0), Direction::AntiDiagonal, 3);
        assert_eq!(len, 3);
        let len = run_length(&b, Side::O, Position::new(2, 0), Direction::Diagonal, 3);
        assert_eq!(len, 1);
    }

    #[test]
    fn test_run_far_off_board_is_zero() {
        let b = Board::empty(3, 3);
        for anchor in [
            Position::new(isize::MAX, 0),
            Position::new(0, isize::MIN),
            Position::new(-1, 1),
        ] {
            for direction in Direction::ALL {
                assert_eq!(run_length(&b, Side::X, anchor, direction, 3), 0);
            }
        }
    }

    #[test]
    fn test_find_line_ignores_short_win_lengths() {
        let b = board(&[&[1, 0, 0], &[0, 0, 0], &[0, 0, 0]]);
        assert_eq!(find_line(&b, 0), None);
        assert_eq!(find_line(&b, 1), None);
        let b = board(&[&[1, 1, 0], &[0, 0, 0], &[0, 0, 0]]);
        assert_eq!(find_line(&b, 2), None);
    }

    #[test]
    fn test_find_line_on_empty_board() {
        assert_eq!(find_line(&Board::empty(4, 4), 3), None);
    }

    #[test]
    fn test_find_line_each_direction() {
        let vertical = board(&[&[0, 2, 0], &[0, 2, 0], &[0, 2, 0]]);
        let found = find_line(&vertical, 3).unwrap();
        assert_eq!(found.side, Side::O);
        assert_eq!(found.direction, Direction::Vertical);
        assert_eq!(found.start, Position::new(0, 1));

        let horizontal = board(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]]);
        assert_eq!(find_line(&horizontal, 3).unwrap().direction, Direction::Horizontal);

        let diagonal = board(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]);
        assert_eq!(find_line(&diagonal, 3).unwrap().direction, Direction::Diagonal);

        let anti = board(&[&[0, 0, 1], &[0, 1, 0], &[1, 0, 0]]);
        assert_eq!(find_line(&anti, 3).unwrap().direction, Direction::AntiDiagonal);
    }

    #[test]
    fn test_find_line_ignores_short_runs() {
        let b = board(&[&[1, 1, 0, 0], &[2, 2, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]);
        assert_eq!(find_line(&b, 3), None);
    }
}
