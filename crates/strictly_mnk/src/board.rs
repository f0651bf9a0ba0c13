//! Rectangular game board.

use crate::config::BoardConfig;
use crate::error::EvalError;
use crate::types::{Cell, Position, Side};
use serde::Serialize;
use tracing::instrument;

/// A `rows x columns` grid of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board shaped by the configuration.
    #[instrument]
    pub fn new(config: &BoardConfig) -> Self {
        Self::empty(*config.rows(), *config.columns())
    }

    /// Creates an empty board of arbitrary shape.
    pub fn empty(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    /// Builds a board from rows of cells.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidBoard`] if the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, EvalError> {
        let columns = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != columns) {
            return Err(EvalError::InvalidBoard);
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Builds a board from numeric codes (0 empty, 1 X, 2 O).
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::InvalidBoard`] for ragged rows or unknown codes.
    #[instrument(skip(grid), fields(rows = grid.len()))]
    pub fn from_codes<R: AsRef<[u8]>>(grid: &[R]) -> Result<Self, EvalError> {
        let rows = grid
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|&code| Cell::try_from(code))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    /// Returns the numeric code grid for this board.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.row_slices()
            .map(|row| row.iter().map(|cell| cell.code()).collect())
            .collect()
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns true if the board has the configured shape.
    pub fn fits(&self, config: &BoardConfig) -> bool {
        self.rows == *config.rows() && self.columns == *config.columns()
    }

    /// Converts a signed position into a cell index, if it lies on the board.
    fn index(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row).ok()?;
        let col = usize::try_from(pos.col).ok()?;
        (row < self.rows && col < self.columns).then(|| row * self.columns + col)
    }

    /// Returns true if the position lies on the board.
    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Gets the cell at a position, or `None` off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Returns true if the position is on the board and unoccupied.
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Places a side's mark. Returns false and leaves the board untouched if
    /// the position is off the board or already occupied.
    pub(crate) fn place(&mut self, pos: Position, side: Side) -> bool {
        match self.index(pos) {
            Some(i) if self.cells[i].is_empty() => {
                self.cells[i] = Cell::Occupied(side);
                true
            }
            _ => false,
        }
    }

    /// Counts unoccupied cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Returns true if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterates over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact panics on a zero chunk size; an empty board has no rows.
        self.cells.chunks_exact(self.columns.max(1))
    }

    /// Iterates over all in-bounds positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |col| Position::new(row as isize, col as isize))
        })
    }

    /// Formats the grid with `-`, `X` and `O`, cells separated by spaces and
    /// every row terminated by a newline.
    pub fn display(&self) -> String {
        let mut result = String::with_capacity(self.rows * (self.columns * 2));
        for row in self.row_slices() {
            let line = row
                .iter()
                .map(|cell| cell.glyph().to_string())
                .collect::<Vec<_>>()
                .join(" ");
            result.push_str(&line);
            result.push('\n');
        }
        result
    }
}
