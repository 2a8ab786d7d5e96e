// THEORY:
// The `Grid` is the immutable input of the whole analysis. It is a "dumb" data
// container: it owns the characters and answers questions about them, but performs
// no analysis of its own.
//
// Key architectural principles:
// 1.  **Validated Once**: Rows are checked for equal length when the grid is built.
//     Every later stage indexes cells freely because a `Grid` cannot exist in a
//     ragged state.
// 2.  **Character Columns**: Columns count Unicode scalar values, not bytes, so a
//     line such as "é*" has two columns.
// 3.  **Row-Major Identity**: A `Cell` is a zero-based (row, col) pair. Scan order
//     everywhere in the crate is row-major over these cells.

use thiserror::Error;

/// A zero-based coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Errors raised while building a `Grid` from text rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row's length differs from the length of the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular, read-only grid of characters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    width: usize,
}

impl Grid {
    /// Builds a grid from text rows, rejecting rows of unequal length.
    /// An empty iterator yields an empty grid, which is not an error.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells: Vec<Vec<char>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().collect())
            .collect();

        let width = cells.first().map_or(0, Vec::len);
        if let Some((row, found)) = cells
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(GridError::RaggedRows {
                row,
                expected: width,
                found,
            });
        }

        Ok(Self { cells, width })
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the character at `cell`, or `None` when it lies outside the grid.
    pub fn get(&self, cell: Cell) -> Option<char> {
        self.cells.get(cell.row)?.get(cell.col).copied()
    }

    /// Iterates every cell in row-major order together with its character.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, char)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &ch)| (Cell::new(row, col), ch))
        })
    }

    /// Returns the in-bounds neighbour of `cell` shifted by `(d_row, d_col)`.
    pub fn offset(&self, cell: Cell, d_row: isize, d_col: isize) -> Option<Cell> {
        let row = cell.row.checked_add_signed(d_row)?;
        let col = cell.col.checked_add_signed(d_col)?;
        (row < self.height() && col < self.width()).then_some(Cell::new(row, col))
    }
}
