//! Attempt progress display for long-running solves

use crate::io::configuration::{ATTEMPT_REPORT_INTERVAL, PROGRESS_TICK_MS};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner reporting how many attempts the retry loop has burned through
///
/// Retries are unbounded and their count is unpredictable, so this is a
/// spinner with a running tally rather than a bar with a known length.
pub struct AttemptSpinner {
    spinner: ProgressBar,
}

impl Default for AttemptSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptSpinner {
    /// Create and start the spinner
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        spinner.set_message("Searching for a placement...");
        Self { spinner }
    }

    /// Report a finished attempt, refreshing the message periodically
    pub fn record_attempt(&self, attempts: usize) {
        if attempts % ATTEMPT_REPORT_INTERVAL == 0 {
            self.spinner
                .set_message(format!("Searching... {attempts} attempts"));
        }
    }

    /// Stop the spinner and clear its line
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}
