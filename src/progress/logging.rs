//! Logging-based progress handler

use super::{ProgressEvent, ProgressHandler};
use tracing::{debug, error, info};

/// Handler that logs progress events using tracing
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHandler;

impl ProgressHandler for LoggingHandler {
    fn on_progress(&self, event: &ProgressEvent) {
        match event {
            ProgressEvent::Started { repository } => {
                info!(repo = %repository, "Starting README generation");
            }
            ProgressEvent::SnapshotFetched {
                entries,
                dependencies,
                fetch_time,
            } => {
                info!(
                    entries,
                    dependencies,
                    fetch_time_ms = fetch_time.as_millis(),
                    "Repository snapshot fetched"
                );
            }
            ProgressEvent::Classified {
                framework,
                project_type,
            } => {
                info!(
                    framework = framework.as_deref().unwrap_or("none"),
                    project_type = %project_type,
                    "Repository classified"
                );
            }
            ProgressEvent::Synthesized { bytes } => {
                debug!(bytes, "README rendered");
            }
            ProgressEvent::Completed { total_time } => {
                info!(
                    total_time_ms = total_time.as_millis(),
                    "README generation complete"
                );
            }
            ProgressEvent::Failed { error } => {
                error!(error = %error, "README generation failed");
            }
        }
    }
}
