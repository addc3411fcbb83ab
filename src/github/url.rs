//! Repository URL validation

use super::FetchError;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

pub const DEFAULT_WEB_HOST: &str = "github.com";

/// `<owner>/<repo>` with an optional trailing slash and nothing else
fn owner_repo_path() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^/]+)/([^/]+)/?$").expect("valid regex"))
}

/// Owner and repository name taken from a validated URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoLocator {
    pub owner: String,
    pub repo: String,
}

impl RepoLocator {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Parses `https://github.com/<owner>/<repo>` with an optional trailing slash
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        Self::parse_with_host(input, DEFAULT_WEB_HOST)
    }

    /// Same as [`RepoLocator::parse`] for a different web host
    pub fn parse_with_host(input: &str, host: &str) -> Result<Self, FetchError> {
        let trimmed = input.trim();
        let invalid = || FetchError::InvalidUrl {
            input: input.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid());
        }

        let path = trimmed
            .strip_prefix("https://")
            .and_then(|rest| rest.strip_prefix(host))
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(invalid)?;
        let caps = owner_repo_path().captures(path).ok_or_else(invalid)?;

        Ok(Self::new(&caps[1], &caps[2]))
    }
}

impl fmt::Display for RepoLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
