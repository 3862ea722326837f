//! Text rendering of a completed placement

use crate::io::configuration::{EMPTY_MARKER, QUEEN_MARKER};
use crate::spatial::Cell;
use ndarray::Array2;

/// Render a placement list as a printable `n×n` grid
///
/// Queens are drawn as [`QUEEN_MARKER`], empty squares as [`EMPTY_MARKER`],
/// with squares space-separated and one board row per line. Cells outside the
/// board are ignored; the renderer trusts the core to hand it well-formed
/// placements but does not index out of bounds on malformed ones.
pub fn render_board(placements: &[Cell], n: usize) -> String {
    let mut board = Array2::from_elem((n, n), EMPTY_MARKER);
    for cell in placements {
        if let Some(square) = board.get_mut([cell.row, cell.col]) {
            *square = QUEEN_MARKER;
        }
    }

    let mut output = String::with_capacity(n * (2 * n).max(1));
    for row in board.rows() {
        let mut first = true;
        for square in row {
            if !first {
                output.push(' ');
            }
            output.push(*square);
            first = false;
        }
        output.push('\n');
    }
    output
}
