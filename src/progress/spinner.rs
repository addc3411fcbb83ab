//! Terminal spinner progress handler

use super::{ProgressEvent, ProgressHandler};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Shows a spinner on stderr while a generation is running
pub struct SpinnerHandler {
    bar: ProgressBar,
}

impl SpinnerHandler {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            bar.set_style(style);
        }
        Self { bar }
    }

    /// Spinner when stderr is a terminal, nothing otherwise
    pub fn for_terminal() -> Option<Self> {
        atty::is(atty::Stream::Stderr).then(Self::new)
    }
}

impl Default for SpinnerHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SpinnerHandler {
    // `analyze` stops after classification and never sends Completed.
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

impl ProgressHandler for SpinnerHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { repository } => {
                self.bar.enable_steady_tick(Duration::from_millis(100));
                self.bar.set_message(format!("Fetching {}", repository));
            }
            ProgressEvent::SnapshotFetched { entries, .. } => {
                self.bar
                    .set_message(format!("Classifying {} root entries", entries));
            }
            ProgressEvent::Classified { project_type, .. } => {
                self.bar
                    .set_message(format!("Writing README for {}", project_type));
            }
            ProgressEvent::Synthesized { .. } => {}
            ProgressEvent::Completed { total_time } => {
                self.bar
                    .finish_with_message(format!("Done in {:.1}s", total_time.as_secs_f64()));
            }
            ProgressEvent::Failed { .. } => {
                self.bar.finish_and_clear();
            }
        }
    }
}
