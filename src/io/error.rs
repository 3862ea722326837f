//! Error types for solver operations

use std::fmt;

/// Main error type for solver operations
///
/// Only the two pre-checked size conditions surface as errors. An individual
/// attempt placing fewer than `n` queens is not an error at all; the retry
/// driver discards it and starts over silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverError {
    /// Requested board size admits no board at all
    InvalidSize {
        /// The rejected size
        size: i64,
    },

    /// Requested size is known to have no complete non-attacking placement
    ///
    /// Detected before the retry loop starts; retrying these sizes would
    /// never terminate.
    KnownUnsolvable {
        /// The rejected size
        size: i64,
    },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => {
                write!(f, "Invalid board size {size}: must be at least 1")
            }
            Self::KnownUnsolvable { size } => {
                write!(f, "N = {size} does not have a valid solution")
            }
        }
    }
}

impl std::error::Error for SolverError {}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, SolverError>;
