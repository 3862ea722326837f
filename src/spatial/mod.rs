//! Board coordinates and attack geometry
//!
//! This module contains the spatial vocabulary of the solver:
//! - Board cell coordinates and the pairwise attack predicate
//! - Lazy ray iterators covering rows, columns, and diagonals

/// Board cell coordinates and the attack predicate
pub mod cell;
/// Ray iterators walking lines of cells to the board boundary
pub mod rays;

pub use cell::Cell;
