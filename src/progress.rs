//! Spinner display while waiting on the Salesforce CLI

use indicatif::{ProgressBar, ProgressStyle};

const TICK_STRINGS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner that is cleared when dropped
///
/// Holding the guard across a fallible call guarantees the line is cleaned up
/// on both the success and the `?` path, so later output starts on a clean line.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Start a cyan spinner followed by `message`
    pub fn start(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.cyan}{msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICK_STRINGS);
        pb.set_style(style);
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { pb }
    }

    #[cfg(test)]
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
        }
    }

    #[cfg(test)]
    pub fn bar(&self) -> ProgressBar {
        self.pb.clone()
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.pb.is_finished()
    }

    /// Stop ticking and clear the spinner line
    pub fn finish(&self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.finish();
    }
}
