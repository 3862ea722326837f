/// Bitset-backed universe of still-available board cells
pub mod cellset;
/// Removal of every cell attacked from a placed queen
pub mod eliminate;
/// Single-attempt random placement loop
pub mod generator;
/// Retry driver and public solve entry point
pub mod solver;
