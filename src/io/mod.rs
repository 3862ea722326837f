//! Input/output collaborators around the core heuristic
//!
//! Everything here is a thin wrapper with no algorithmic content: rendering a
//! finished placement as text, the command-line surface, attempt progress
//! display, and the error taxonomy.

/// Text rendering of a completed placement
pub mod board;
/// Command-line interface and solve runner
pub mod cli;
/// Runtime constants and CLI defaults
pub mod configuration;
/// Error types for solver operations
pub mod error;
/// Attempt progress display
pub mod progress;
