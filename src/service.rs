//! README generation service
//!
//! Ties the pipeline together: validate URL, fetch a snapshot, classify it,
//! render the document. Each stage runs strictly after the previous one.
//!
//! # Example
//!
//! ```no_run
//! use repodoc::{GitHubClient, ReadmeService, RepodocConfig, SessionRegistry};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RepodocConfig::default();
//! let service = ReadmeService::new(GitHubClient::new(&config)?, &config);
//!
//! let mut registry = SessionRegistry::new();
//! let document = service
//!     .generate_into("https://github.com/rust-lang/cargo", &mut registry)
//!     .await?;
//! println!("{}", document.content);
//! # Ok(())
//! # }
//! ```

use crate::classify::{classify, ClassificationResult};
use crate::config::RepodocConfig;
use crate::github::{FetchError, RepoLocator, RepositorySource};
use crate::progress::{NoOpHandler, ProgressEvent, ProgressHandler};
use crate::readme::synthesize;
use crate::registry::{GeneratedDocument, NewDocument, SessionRegistry};
use crate::snapshot::RepositorySnapshot;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

const FALLBACK_DESCRIPTION: &str = "No description provided";
const FALLBACK_LANGUAGE: &str = "Unknown";

/// Snapshot plus its classification
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub snapshot: RepositorySnapshot,
    pub classification: ClassificationResult,
}

/// A rendered README with the data it was built from
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedReadme {
    #[serde(flatten)]
    pub analysis: Analysis,
    pub markdown: String,
}

impl GeneratedReadme {
    /// Registry record for this README
    pub fn to_new_document(&self) -> NewDocument {
        let snapshot = &self.analysis.snapshot;
        NewDocument {
            name: snapshot.name.clone(),
            description: snapshot
                .description
                .clone()
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
            language: snapshot
                .language
                .as_ref()
                .map(|l| l.name().to_string())
                .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string()),
            content: self.markdown.clone(),
        }
    }
}

pub struct ReadmeService<S: RepositorySource> {
    source: S,
    web_host: String,
    progress: Arc<dyn ProgressHandler>,
}

impl<S: RepositorySource> ReadmeService<S> {
    pub fn new(source: S, config: &RepodocConfig) -> Self {
        Self {
            source,
            web_host: config.web_host.clone(),
            progress: Arc::new(NoOpHandler),
        }
    }

    pub fn with_progress(mut self, handler: Arc<dyn ProgressHandler>) -> Self {
        self.progress = handler;
        self
    }

    /// Validates the URL against the configured host without fetching
    pub fn locate(&self, url: &str) -> Result<RepoLocator, FetchError> {
        RepoLocator::parse_with_host(url, &self.web_host)
    }

    /// Fetches and classifies a repository
    pub async fn analyze(&self, url: &str) -> Result<Analysis, FetchError> {
        let locator = self.locate(url)?;
        self.progress.on_progress(&ProgressEvent::Started {
            repository: locator.to_string(),
        });

        let start = Instant::now();
        let snapshot = match self.source.fetch_snapshot(&locator).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.progress.on_progress(&ProgressEvent::Failed {
                    error: e.to_string(),
                });
                return Err(e);
            }
        };
        self.progress.on_progress(&ProgressEvent::SnapshotFetched {
            entries: snapshot.entries.len(),
            dependencies: snapshot.manifest.dependencies.len()
                + snapshot.manifest.dev_dependencies.len(),
            fetch_time: start.elapsed(),
        });

        let classification = classify(&snapshot);
        self.progress.on_progress(&ProgressEvent::Classified {
            framework: classification.framework.map(|f| f.label().to_string()),
            project_type: classification.project_type.to_string(),
        });

        Ok(Analysis {
            snapshot,
            classification,
        })
    }

    /// Runs the whole pipeline and returns the rendered README
    pub async fn generate(&self, url: &str) -> Result<GeneratedReadme, FetchError> {
        let start = Instant::now();
        let analysis = self.analyze(url).await?;

        let markdown = synthesize(&analysis.snapshot, &analysis.classification);
        self.progress.on_progress(&ProgressEvent::Synthesized {
            bytes: markdown.len(),
        });
        self.progress.on_progress(&ProgressEvent::Completed {
            total_time: start.elapsed(),
        });

        Ok(GeneratedReadme { analysis, markdown })
    }

    /// Generates a README and records it in `registry`
    pub async fn generate_into(
        &self,
        url: &str,
        registry: &mut SessionRegistry,
    ) -> Result<GeneratedDocument, FetchError> {
        let readme = self.generate(url).await?;
        let document = registry.add(readme.to_new_document());
        debug!(id = %document.id, name = %document.name, "Recorded generated README");
        Ok(document)
    }
}
