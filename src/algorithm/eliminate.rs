use crate::algorithm::cellset::CellSet;
use crate::spatial::Cell;
use crate::spatial::rays::attacked_cells;

/// Remove every cell a queen placed at `queen` attacks, including its own square
///
/// Sweeps the row, column, and both diagonal rays through the queen and
/// removes each yielded cell from the set. Cells already eliminated by an
/// earlier queen are skipped silently, so repeating the sweep for the same
/// queen removes nothing further.
///
/// Returns the number of cells actually removed.
pub fn eliminate_attacks(cells: &mut CellSet, queen: Cell) -> usize {
    let mut removed = 0;
    for target in attacked_cells(queen, cells.size()) {
        if cells.remove(target) {
            removed += 1;
        }
    }
    removed
}
