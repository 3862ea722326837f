//! Runtime constants and CLI defaults

/// Marker drawn on squares occupied by a queen
pub const QUEEN_MARKER: char = 'Q';
/// Marker drawn on empty squares
pub const EMPTY_MARKER: char = '.';

// Progress display settings
/// Spinner animation interval in milliseconds
pub const PROGRESS_TICK_MS: u64 = 80;
/// Attempts between spinner message refreshes
pub const ATTEMPT_REPORT_INTERVAL: usize = 1_000;
