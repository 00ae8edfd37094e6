//! Progress reporting for long extraction runs

use indicatif::{ProgressBar, ProgressStyle};

/// Thin wrapper around an indicatif progress bar
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    /// Creates a bar over `total` steps with a short description
    pub fn new(total: u64, description: &str) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap()
            .progress_chars("#>-"));
        bar.set_message(description.to_string());

        ProgressTracker { bar }
    }

    /// Advances the bar by `amount` steps
    pub fn increment(&self, amount: u64) {
        self.bar.inc(amount);
    }

    /// Finishes the bar with a completion message
    pub fn finish(&self) {
        self.bar.finish_with_message("Completed");
    }
}
