//! Error types for repository fetching

use thiserror::Error;

/// Failure kinds surfaced to the user. Each one has a dedicated message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Input did not look like `https://github.com/<owner>/<repo>`
    #[error("Invalid repository URL: '{input}'")]
    InvalidUrl { input: String },

    /// HTTP 404 from any endpoint
    #[error("Repository not found: {repository}")]
    NotFound { repository: String },

    /// HTTP 403, which GitHub returns when the unauthenticated rate limit is hit
    #[error("GitHub API access denied (rate limit exceeded)")]
    AccessDenied,

    /// Other HTTP status, connection failure or unreadable response body
    #[error("GitHub API request failed: {message}")]
    Transport { status: Option<u16>, message: String },
}

impl FetchError {
    pub fn transport(message: impl Into<String>) -> Self {
        FetchError::Transport {
            status: None,
            message: message.into(),
        }
    }

    /// One-line message suitable for end users
    pub fn user_message(&self) -> String {
        match self {
            FetchError::InvalidUrl { input } if input.trim().is_empty() => {
                "Please enter a GitHub repository URL".to_string()
            }
            FetchError::InvalidUrl { .. } => {
                "Please enter a valid GitHub repository URL (e.g., https://github.com/username/repo)"
                    .to_string()
            }
            FetchError::NotFound { .. } => {
                "Repository not found. Please check the URL and make sure the repository is public."
                    .to_string()
            }
            FetchError::AccessDenied => {
                "API rate limit exceeded. Please try again later.".to_string()
            }
            FetchError::Transport {
                status: Some(_),
                message,
            } => format!("GitHub API error: {}", message),
            FetchError::Transport { status: None, .. } => {
                "Failed to analyze repository. Please check your internet connection and try again."
                    .to_string()
            }
        }
    }

    /// Multi-line message with troubleshooting hints for the CLI
    pub fn help_message(&self) -> String {
        match self {
            FetchError::InvalidUrl { input } => format!(
                "Error: {}\nInput: '{}'\n\n\
                 Help: The URL must point at a repository root, for example:\n\
                 - https://github.com/rust-lang/cargo\n\
                 - https://github.com/rust-lang/cargo/",
                self.user_message(),
                input
            ),
            FetchError::NotFound { repository } => format!(
                "Error: {}\nRepository: {}\n\n\
                 Help: Only public repositories can be read without authentication.\n\
                 Check the owner and repository name for typos.",
                self.user_message(),
                repository
            ),
            FetchError::AccessDenied => format!(
                "Error: {}\n\n\
                 Help: Unauthenticated clients get 60 requests per hour.\n\
                 Each generation uses up to 3 requests.",
                self.user_message()
            ),
            FetchError::Transport { message, .. } => format!(
                "Error: {}\nDetails: {}\n\n\
                 Help: Check network access to the GitHub API.\n\
                 Configuration:\n\
                 - REPODOC_API_URL (default: https://api.github.com)\n\
                 - REPODOC_REQUEST_TIMEOUT (seconds)",
                self.user_message(),
                message
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            FetchError::InvalidUrl {
                input: "  ".to_string()
            }
            .user_message(),
            "Please enter a GitHub repository URL"
        );
        assert!(FetchError::InvalidUrl {
            input: "not-a-url".to_string()
        }
        .user_message()
        .starts_with("Please enter a valid GitHub repository URL"));
        assert!(FetchError::NotFound {
            repository: "a/b".to_string()
        }
        .user_message()
        .starts_with("Repository not found."));
        assert_eq!(
            FetchError::AccessDenied.user_message(),
            "API rate limit exceeded. Please try again later."
        );
    }

    #[test]
    fn test_transport_messages() {
        let http = FetchError::Transport {
            status: Some(500),
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(http.user_message(), "GitHub API error: Internal Server Error");

        let offline = FetchError::transport("connection refused");
        assert!(offline.user_message().contains("internet connection"));
        assert!(offline.help_message().contains("connection refused"));
    }

    #[test]
    fn test_display() {
        let err = FetchError::NotFound {
            repository: "octo/missing".to_string(),
        };
        assert_eq!(err.to_string(), "Repository not found: octo/missing");
    }
}
