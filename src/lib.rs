//! Randomized greedy heuristic for the N-queens placement problem
//!
//! Queens are placed one at a time on uniformly random still-available squares,
//! with every square the new queen attacks removed from further consideration.
//! Attempts that run out of squares before placing N queens are discarded and
//! rerun from a fresh board until one succeeds.

#![forbid(unsafe_code)]

/// Core heuristic: cell-set bookkeeping, attack elimination, and the retry driver
pub mod algorithm;
/// Input/output operations, board rendering, and error handling
pub mod io;
/// Board coordinates and attack-ray geometry
pub mod spatial;

pub use algorithm::solver::{Solver, solve};
pub use io::error::{Result, SolverError};
pub use spatial::Cell;
