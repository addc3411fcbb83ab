//! repodoc - README generator for public GitHub repositories
//!
//! Given a repository URL, repodoc reads the repository metadata, the root
//! directory listing and `package.json` through the GitHub REST API, derives
//! a framework and project type from them with fixed heuristics, and renders
//! a complete README.md from a template.
//!
//! # Example Usage
//!
//! ```no_run
//! use repodoc::{GitHubClient, ReadmeService, RepodocConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RepodocConfig::default();
//! let service = ReadmeService::new(GitHubClient::new(&config)?, &config);
//!
//! let readme = service.generate("https://github.com/octocat/Hello-World").await?;
//! println!("{}", readme.markdown);
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`github`]: URL validation and the REST client producing snapshots
//! - [`classify`]: Framework and project type heuristics
//! - [`readme`]: Markdown synthesis
//! - [`registry`]: In-memory list of documents generated in a session
//! - [`service`]: The fetch, classify, render pipeline

pub mod classify;
pub mod cli;
pub mod config;
pub mod github;
pub mod progress;
pub mod readme;
pub mod registry;
pub mod service;
pub mod snapshot;
pub mod stack;
pub mod util;

pub use classify::{classify, ClassificationResult};
pub use config::{ConfigError, RepodocConfig};
pub use github::{FetchError, GitHubClient, RepoLocator, RepositorySource};
pub use readme::synthesize;
pub use registry::{DocumentUpdate, GeneratedDocument, NewDocument, SessionRegistry};
pub use service::{Analysis, GeneratedReadme, ReadmeService};
pub use snapshot::RepositorySnapshot;
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
