// THEORY:
// A `BoundingBox` is the smallest axis-aligned rectangle, with inclusive bounds, that
// encloses every cell of a cluster. It is the unit the filtering layer reasons about:
// overlap, area and ordering are all defined here so that the rest of the pipeline
// never touches raw coordinates.
//
// The constructor enforces `min <= max` on both axes, so every box in the system is
// well formed. Boxes are `Copy` and never mutated after creation.

use crate::core_modules::grid::Cell;
use std::fmt;

/// An inclusive, zero-based rectangle on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    min_row: usize,
    min_col: usize,
    max_row: usize,
    max_col: usize,
}

impl BoundingBox {
    /// Builds a box from two corners given in any order.
    pub fn new(min_row: usize, min_col: usize, max_row: usize, max_col: usize) -> Self {
        Self {
            min_row: min_row.min(max_row),
            min_col: min_col.min(max_col),
            max_row: min_row.max(max_row),
            max_col: min_col.max(max_col),
        }
    }

    /// A one-cell box.
    pub fn from_cell(cell: Cell) -> Self {
        Self::new(cell.row, cell.col, cell.row, cell.col)
    }

    /// Grows the box so that it also covers `cell`.
    pub fn expand_to(self, cell: Cell) -> Self {
        Self {
            min_row: self.min_row.min(cell.row),
            min_col: self.min_col.min(cell.col),
            max_row: self.max_row.max(cell.row),
            max_col: self.max_col.max(cell.col),
        }
    }

    pub fn min_row(&self) -> usize {
        self.min_row
    }

    pub fn min_col(&self) -> usize {
        self.min_col
    }

    pub fn max_row(&self) -> usize {
        self.max_row
    }

    pub fn max_col(&self) -> usize {
        self.max_col
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn area(&self) -> usize {
        self.height() * self.width()
    }

    /// True when both the row ranges and the column ranges intersect.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        !(self.max_row < other.min_row
            || self.min_row > other.max_row
            || self.max_col < other.min_col
            || self.min_col > other.max_col)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.min_row..=self.max_row).contains(&cell.row)
            && (self.min_col..=self.max_col).contains(&cell.col)
    }
}

/// Renders as 1-based inclusive corners, e.g. `(1,1)(2,2)`.
impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})({},{})",
            self.min_row + 1,
            self.min_col + 1,
            self.max_row + 1,
            self.max_col + 1
        )
    }
}
