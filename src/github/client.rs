//! HTTP client for the GitHub REST API

use super::models::{parse_manifest, ContentEntry, FileContent, ManifestError, RepoResponse};
use super::{FetchError, RepoLocator};
use crate::config::RepodocConfig;
use crate::snapshot::{Manifest, RepoEntry, RepositorySnapshot, MANIFEST_FILE};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Source of repository snapshots
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn fetch_snapshot(&self, locator: &RepoLocator)
        -> Result<RepositorySnapshot, FetchError>;
}

/// Unauthenticated GitHub REST client
///
/// A snapshot takes at most three sequential requests: repository metadata,
/// the root listing, and `package.json` when the listing contains one.
/// Requests are never retried.
pub struct GitHubClient {
    api_base: String,
    http_client: Client,
}

impl GitHubClient {
    pub fn new(config: &RepodocConfig) -> Result<Self, FetchError> {
        Self::build(
            &config.api_url,
            &config.user_agent,
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Client against an arbitrary API root, mainly for tests
    pub fn with_base_url(api_base: impl Into<String>) -> Result<Self, FetchError> {
        let defaults = RepodocConfig::defaults();
        Self::build(&api_base.into(), &defaults.user_agent, None)
    }

    fn build(api_base: &str, user_agent: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let mut builder = Client::builder()
            .user_agent(user_agent.to_string())
            .default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http_client = builder
            .build()
            .map_err(|e| FetchError::transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn repo_url(&self, locator: &RepoLocator, suffix: &str) -> String {
        format!(
            "{}/repos/{}/{}{}",
            self.api_base, locator.owner, locator.repo, suffix
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        locator: &RepoLocator,
    ) -> Result<T, FetchError> {
        debug!(url = %url, "GET");
        let start = Instant::now();

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        debug!(
            url = %url,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Response received"
        );

        if !status.is_success() {
            return Err(status_error(status, locator));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::transport(format!("invalid response body: {}", e)))
    }

    async fn fetch_manifest(&self, locator: &RepoLocator) -> Result<Manifest, ManifestFetchError> {
        let url = self.repo_url(locator, &format!("/contents/{}", MANIFEST_FILE));
        let file: FileContent = self.get_json(&url, locator).await?;
        let text = file.decode()?;
        Ok(parse_manifest(&text)?)
    }
}

#[derive(Debug, thiserror::Error)]
enum ManifestFetchError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] ManifestError),
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn fetch_snapshot(
        &self,
        locator: &RepoLocator,
    ) -> Result<RepositorySnapshot, FetchError> {
        let start = Instant::now();

        let metadata: RepoResponse = self.get_json(&self.repo_url(locator, ""), locator).await?;

        let listing: Vec<ContentEntry> = self
            .get_json(&self.repo_url(locator, "/contents"), locator)
            .await?;
        let entries: Vec<RepoEntry> = listing.into_iter().map(RepoEntry::from).collect();

        let manifest = if entries.iter().any(|e| e.name == MANIFEST_FILE) {
            match self.fetch_manifest(locator).await {
                Ok(manifest) => manifest,
                Err(e) => {
                    warn!(
                        repo = %locator,
                        error = %e,
                        "Could not read package.json, continuing without manifest data"
                    );
                    Manifest::default()
                }
            }
        } else {
            Manifest::default()
        };

        info!(
            repo = %locator,
            entries = entries.len(),
            dependencies = manifest.dependencies.len() + manifest.dev_dependencies.len(),
            duration_ms = start.elapsed().as_millis(),
            "Fetched repository snapshot"
        );

        Ok(metadata.into_snapshot(entries, manifest))
    }
}

fn status_error(status: StatusCode, locator: &RepoLocator) -> FetchError {
    match status {
        StatusCode::NOT_FOUND => FetchError::NotFound {
            repository: locator.to_string(),
        },
        StatusCode::FORBIDDEN => FetchError::AccessDenied,
        other => FetchError::Transport {
            status: Some(other.as_u16()),
            message: other
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| other.as_u16().to_string()),
        },
    }
}

fn map_request_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::transport(format!("request timed out: {}", e))
    } else if e.is_connect() {
        FetchError::transport(format!("connection failed: {}", e))
    } else {
        FetchError::transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mapping() {
        let locator = RepoLocator::new("octo", "demo");
        assert_eq!(
            status_error(StatusCode::NOT_FOUND, &locator),
            FetchError::NotFound {
                repository: "octo/demo".to_string()
            }
        );
        assert_eq!(
            status_error(StatusCode::FORBIDDEN, &locator),
            FetchError::AccessDenied
        );
        assert_eq!(
            status_error(StatusCode::BAD_GATEWAY, &locator),
            FetchError::Transport {
                status: Some(502),
                message: "Bad Gateway".to_string()
            }
        );
    }

    #[test]
    fn test_base_url_is_normalised() {
        let client = GitHubClient::with_base_url("http://localhost:1234/").unwrap();
        assert_eq!(client.api_base(), "http://localhost:1234");
        assert_eq!(
            client.repo_url(&RepoLocator::new("a", "b"), "/contents"),
            "http://localhost:1234/repos/a/b/contents"
        );
    }
}
