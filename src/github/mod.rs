//! Read-only access to repositories hosted on GitHub

mod client;
mod error;
pub mod models;
mod url;

#[cfg(test)]
pub use client::MockRepositorySource;
pub use client::{GitHubClient, RepositorySource};
pub use error::FetchError;
pub use url::{RepoLocator, DEFAULT_WEB_HOST};
