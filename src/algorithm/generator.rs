use crate::algorithm::cellset::CellSet;
use crate::algorithm::eliminate::eliminate_attacks;
use crate::spatial::Cell;
use rand::Rng;

/// Run one complete placement attempt, consuming the cell set
///
/// While cells remain, one is chosen uniformly at random, recorded as a queen,
/// and its attacked cells are eliminated. Each pass removes at least the
/// chosen cell, so the loop finishes in at most `n` placements. A result
/// shorter than `n` means the greedy choices painted the attempt into a
/// corner; the caller decides whether to retry.
pub fn generate_placements<R: Rng>(cells: &mut CellSet, rng: &mut R) -> Vec<Cell> {
    let mut placements = Vec::with_capacity(cells.size());
    while let Some(cell) = cells.choose(rng) {
        eliminate_attacks(cells, cell);
        placements.push(cell);
    }
    placements
}
