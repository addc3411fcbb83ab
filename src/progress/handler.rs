//! Progress handler trait and events

use std::time::Duration;

/// Events emitted while a README is being generated
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// URL accepted, fetching started
    Started { repository: String },

    /// Metadata, listing and manifest retrieved
    SnapshotFetched {
        entries: usize,
        dependencies: usize,
        fetch_time: Duration,
    },

    Classified {
        framework: Option<String>,
        project_type: String,
    },

    /// Markdown rendered
    Synthesized { bytes: usize },

    Completed { total_time: Duration },

    Failed { error: String },
}

/// Trait for handling progress events during generation
pub trait ProgressHandler: Send + Sync {
    fn on_progress(&self, event: &ProgressEvent);
}

/// No-op handler that ignores all events
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpHandler;

impl ProgressHandler for NoOpHandler {
    fn on_progress(&self, _event: &ProgressEvent) {}
}
