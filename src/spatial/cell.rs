use std::fmt;

/// A board square identified by row and column, both in `[0, n)`
///
/// Cells are plain values; two cells are the same square exactly when their
/// coordinates are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, counted from the top of the board
    pub row: usize,
    /// Column index, counted from the left of the board
    pub col: usize,
}

impl Cell {
    /// Create a cell at the given coordinates
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Test whether queens on the two cells would attack each other
    ///
    /// True when the cells share a row, a column, or a diagonal (equal
    /// absolute row and column difference). A cell attacks itself.
    pub const fn attacks(self, other: Self) -> bool {
        self.row == other.row
            || self.col == other.col
            || self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
