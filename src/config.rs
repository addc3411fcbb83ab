//! Configuration management for repodoc
//!
//! Settings are read from environment variables with built-in defaults.
//!
//! # Environment Variables
//!
//! - `REPODOC_API_URL`: GitHub REST API root - default: "https://api.github.com"
//! - `REPODOC_WEB_HOST`: Host accepted in repository URLs - default: "github.com"
//! - `REPODOC_USER_AGENT`: User-Agent sent with every request - default: "repodoc/<version>"
//! - `REPODOC_REQUEST_TIMEOUT`: Request timeout in seconds - default: unset (transport default)
//! - `REPODOC_LOG_LEVEL`: Logging level - default: "info"
//! - `REPODOC_LOG_JSON`: Emit logs as JSON when "true" or "1" - default: false
//!
//! # Example
//!
//! ```no_run
//! use repodoc::RepodocConfig;
//!
//! let config = RepodocConfig::default();
//! config.validate().expect("Invalid configuration");
//! ```

use crate::util::logging::parse_level;
use std::env;
use thiserror::Error;

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_WEB_HOST: &str = crate::github::DEFAULT_WEB_HOST;
const DEFAULT_LOG_LEVEL: &str = "info";
const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    /// Failed to parse configuration value
    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepodocConfig {
    /// GitHub REST API root, without trailing slash
    pub api_url: String,

    /// Host expected in `https://<host>/<owner>/<repo>` URLs
    pub web_host: String,

    pub user_agent: String,

    /// `None` leaves the HTTP client's default in place
    pub request_timeout_secs: Option<u64>,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    pub log_json: bool,
}

impl Default for RepodocConfig {
    /// Loads from `REPODOC_*` environment variables, falling back to defaults.
    /// Unparsable numeric values are ignored; use [`RepodocConfig::from_env`]
    /// to reject them instead.
    fn default() -> Self {
        let defaults = Self::defaults();

        Self {
            api_url: env::var("REPODOC_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            web_host: env::var("REPODOC_WEB_HOST").unwrap_or(defaults.web_host),
            user_agent: env::var("REPODOC_USER_AGENT").unwrap_or(defaults.user_agent),
            request_timeout_secs: env::var("REPODOC_REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.trim().parse::<u64>().ok()),
            log_level: env::var("REPODOC_LOG_LEVEL")
                .unwrap_or(defaults.log_level)
                .to_lowercase(),
            log_json: env::var("REPODOC_LOG_JSON")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.log_json),
        }
    }
}

impl RepodocConfig {
    /// Built-in defaults, ignoring the environment
    pub fn defaults() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            web_host: DEFAULT_WEB_HOST.to_string(),
            user_agent: format!("{}/{}", crate::NAME, crate::VERSION),
            request_timeout_secs: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }

    /// Strict variant of `default()` that reports malformed values
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("REPODOC_REQUEST_TIMEOUT") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::ParseError {
                    field: "REPODOC_REQUEST_TIMEOUT".to_string(),
                    error: e.to_string(),
                })?;
            config.request_timeout_secs = Some(secs);
        }

        Ok(config)
    }

    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` on the first invalid field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::ValidationFailed(format!(
                "API URL must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        if self.web_host.is_empty() || self.web_host.contains('/') {
            return Err(ConfigError::ValidationFailed(format!(
                "Web host must be a bare host name, got '{}'",
                self.web_host
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "User agent cannot be empty; GitHub rejects requests without one".to_string(),
            ));
        }

        if let Some(secs) = self.request_timeout_secs {
            if secs == 0 {
                return Err(ConfigError::ValidationFailed(
                    "Request timeout must be at least 1 second".to_string(),
                ));
            }
            if secs > MAX_REQUEST_TIMEOUT_SECS {
                return Err(ConfigError::ValidationFailed(
                    "Request timeout cannot exceed 10 minutes".to_string(),
                ));
            }
        }

        if parse_level(&self.log_level).is_none() {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                self.log_level
            )));
        }

        Ok(())
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: &[&str] = &[
        "REPODOC_API_URL",
        "REPODOC_WEB_HOST",
        "REPODOC_USER_AGENT",
        "REPODOC_REQUEST_TIMEOUT",
        "REPODOC_LOG_LEVEL",
        "REPODOC_LOG_JSON",
    ];

    /// Restores the touched variables when dropped
    struct EnvGuard {
        saved: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn clean() -> Self {
            let saved = KEYS.iter().map(|k| (*k, env::var(k).ok())).collect();
            for key in KEYS {
                env::remove_var(key);
            }
            Self { saved }
        }

        fn set(&self, key: &str, value: &str) {
            env::set_var(key, value);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guard = EnvGuard::clean();

        let config = RepodocConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.web_host, "github.com");
        assert!(config.user_agent.starts_with("repodoc/"));
        assert_eq!(config.request_timeout_secs, None);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(!config.log_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let guard = EnvGuard::clean();
        guard.set("REPODOC_API_URL", "http://localhost:8080/");
        guard.set("REPODOC_WEB_HOST", "github.example.com");
        guard.set("REPODOC_USER_AGENT", "tester");
        guard.set("REPODOC_REQUEST_TIMEOUT", "45");
        guard.set("REPODOC_LOG_LEVEL", "DEBUG");
        guard.set("REPODOC_LOG_JSON", "1");

        let config = RepodocConfig::default();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.web_host, "github.example.com");
        assert_eq!(config.user_agent, "tester");
        assert_eq!(config.request_timeout_secs, Some(45));
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_is_ignored_by_default_but_rejected_strictly() {
        let guard = EnvGuard::clean();
        guard.set("REPODOC_REQUEST_TIMEOUT", "soon");

        assert_eq!(RepodocConfig::default().request_timeout_secs, None);
        match RepodocConfig::from_env().unwrap_err() {
            ConfigError::ParseError { field, .. } => assert_eq!(field, "REPODOC_REQUEST_TIMEOUT"),
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_timeout_range() {
        let mut config = RepodocConfig::defaults();
        config.request_timeout_secs = Some(0);
        assert!(config.validate().is_err());
        config.request_timeout_secs = Some(601);
        assert!(config.validate().is_err());
        config.request_timeout_secs = Some(600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = RepodocConfig::defaults();
        config.api_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = RepodocConfig::defaults();
        config.web_host = "github.com/evil".to_string();
        assert!(config.validate().is_err());

        let mut config = RepodocConfig::defaults();
        config.user_agent = " ".to_string();
        assert!(config.validate().is_err());

        let mut config = RepodocConfig::defaults();
        config.log_level = "loud".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }
}
