//! Lazy ray iterators over lines of board cells
//!
//! A ray walks from a starting square one fixed step at a time and stops as
//! soon as it leaves the board, so edge and corner rays truncate naturally
//! without special-casing. Rays are pure values; the caller decides what to
//! do with the cells they yield.

use crate::spatial::Cell;

/// A finite walk along a fixed direction, yielding cells until it leaves the board
///
/// Coordinates are tracked as signed integers so anti-diagonal walks can step
/// through row 0 without wraparound.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    row: i64,
    col: i64,
    row_step: i64,
    col_step: i64,
    size: i64,
}

impl Ray {
    /// Create a ray at the given starting coordinates with a fixed step
    pub const fn new(row: i64, col: i64, row_step: i64, col_step: i64, size: usize) -> Self {
        Self {
            row,
            col,
            row_step,
            col_step,
            size: size as i64,
        }
    }
}

impl Iterator for Ray {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.row < 0 || self.col < 0 || self.row >= self.size || self.col >= self.size {
            return None;
        }
        let cell = Cell::new(self.row as usize, self.col as usize);
        self.row += self.row_step;
        self.col += self.col_step;
        Some(cell)
    }
}

/// The full row through `origin`, walked left to right
pub const fn row_ray(origin: Cell, size: usize) -> Ray {
    Ray::new(origin.row as i64, 0, 0, 1, size)
}

/// The full column through `origin`, walked top to bottom
pub const fn column_ray(origin: Cell, size: usize) -> Ray {
    Ray::new(0, origin.col as i64, 1, 0, size)
}

/// Both diagonals through `origin`, each walked end to end in one pass
///
/// The main diagonal starts where the cell's `(-1,-1)` line meets row 0 or
/// column 0 and steps `(+1,+1)`; the anti-diagonal starts where the `(+1,-1)`
/// line meets the bottom row or column 0 and steps `(-1,+1)`.
pub fn diagonal_rays(origin: Cell, size: usize) -> [Ray; 2] {
    let row = origin.row as i64;
    let col = origin.col as i64;
    let main_shift = row.min(col);
    let anti_shift = (size as i64 - 1 - row).min(col);
    [
        Ray::new(row - main_shift, col - main_shift, 1, 1, size),
        Ray::new(row + anti_shift, col - anti_shift, -1, 1, size),
    ]
}

/// Every cell a queen at `origin` attacks, including `origin` itself
///
/// Chains the row, column, and both diagonal rays. Cells where the rays
/// cross (the origin in particular) are yielded more than once; consumers
/// treat repeated removal as a no-op.
pub fn attacked_cells(origin: Cell, size: usize) -> impl Iterator<Item = Cell> {
    let [diagonal, anti_diagonal] = diagonal_rays(origin, size);
    row_ray(origin, size)
        .chain(column_ray(origin, size))
        .chain(diagonal)
        .chain(anti_diagonal)
}
