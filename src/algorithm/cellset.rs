use crate::spatial::Cell;
use bitvec::prelude::{BitVec, bitvec};
use rand::Rng;
use std::fmt;

/// The mutable universe of unattacked, unoccupied board cells
///
/// Backed by one bit per square of the `n×n` grid with a cached count of
/// remaining cells, giving O(1) membership and removal. Within one attempt
/// the set only ever shrinks; a fresh set is built for each retry.
#[derive(Clone, Debug)]
pub struct CellSet {
    bits: BitVec,
    size: usize,
    remaining: usize,
}

impl CellSet {
    /// Create a set containing every cell of an `n×n` board
    pub fn full(size: usize) -> Self {
        Self {
            bits: bitvec![1; size * size],
            size,
            remaining: size * size,
        }
    }

    /// Board side length the set was built for
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of cells still in the set
    pub const fn len(&self) -> usize {
        self.remaining
    }

    /// Test if no cells remain
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Test cell membership
    ///
    /// Cells outside the board are never members.
    pub fn contains(&self, cell: Cell) -> bool {
        self.index_of(cell)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Remove a cell if present, reporting whether it was removed
    ///
    /// Removing an absent or out-of-bounds cell is a no-op: attack rays
    /// routinely pass through cells an earlier queen already eliminated.
    pub fn remove(&mut self, cell: Cell) -> bool {
        let Some(index) = self.index_of(cell) else {
            return false;
        };
        if self.bits.get(index).as_deref() == Some(&true) {
            self.bits.set(index, false);
            self.remaining -= 1;
            true
        } else {
            false
        }
    }

    /// Choose one remaining cell uniformly at random
    ///
    /// Returns `None` once the set is exhausted. Selection ranks the set bits
    /// and picks the k-th one, so every remaining cell is equally likely.
    pub fn choose<R: Rng>(&self, rng: &mut R) -> Option<Cell> {
        if self.remaining == 0 {
            return None;
        }
        let pick = rng.random_range(0..self.remaining);
        self.bits
            .iter_ones()
            .nth(pick)
            .map(|index| self.cell_at(index))
    }

    /// Iterate the remaining cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bits.iter_ones().map(|index| self.cell_at(index))
    }

    const fn index_of(&self, cell: Cell) -> Option<usize> {
        if cell.row < self.size && cell.col < self.size {
            Some(cell.row * self.size + cell.col)
        } else {
            None
        }
    }

    const fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index / self.size, index % self.size)
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CellSet({} of {} cells)",
            self.remaining,
            self.size * self.size
        )
    }
}
