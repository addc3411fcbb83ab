//! Structured logging setup for repodoc
//!
//! Events go to stderr, so stdout only ever carries generated documents and
//! formatted results. The level and format come from [`RepodocConfig`];
//! `RUST_LOG`, when set, replaces the computed filter entirely.
//!
//! # Example
//!
//! ```no_run
//! use repodoc::util::logging::{init_logging, LoggingConfig};
//! use repodoc::RepodocConfig;
//! use tracing::debug;
//!
//! let config = RepodocConfig::default();
//! init_logging(LoggingConfig::from_config(&config));
//!
//! debug!(repo = "octo/demo", "Fetching repository");
//! ```

use crate::config::RepodocConfig;
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// HTTP stack crates held at WARN unless `RUST_LOG` says otherwise
const QUIET_DEPENDENCIES: &[&str] = &["h2", "hyper", "reqwest"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Minimum level for repodoc's own events
    pub level: Level,

    /// One JSON object per event instead of console lines
    pub use_json: bool,

    /// File and line of each event; on for debug and trace
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            use_json: false,
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Unknown level names fall back to INFO; `RepodocConfig::validate`
    /// rejects them before logging is set up.
    pub fn from_config(config: &RepodocConfig) -> Self {
        let level = parse_level(&config.log_level).unwrap_or(Level::INFO);
        Self {
            level,
            use_json: config.log_json,
            include_location: level >= Level::DEBUG,
        }
    }

    /// Filter directives used when `RUST_LOG` is not set
    pub fn directives(&self) -> String {
        let mut directives = vec![
            "warn".to_string(),
            format!("{}={}", crate::NAME, self.level.as_str().to_lowercase()),
        ];
        directives.extend(QUIET_DEPENDENCIES.iter().map(|dep| format!("{}=warn", dep)));
        directives.join(",")
    }
}

/// Parses a level name case-insensitively
///
/// ```
/// use repodoc::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("WARN"), Some(Level::WARN));
/// assert_eq!(parse_level("loud"), None);
/// ```
pub fn parse_level(level_str: &str) -> Option<Level> {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Installs the global subscriber. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = if env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(config.directives())
        };

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location);

        if config.use_json {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .init();
        } else {
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        trace = { "trace", Some(Level::TRACE) },
        upper = { "DEBUG", Some(Level::DEBUG) },
        padded = { " info ", Some(Level::INFO) },
        warn = { "Warn", Some(Level::WARN) },
        error = { "error", Some(Level::ERROR) },
        unknown = { "loud", None },
        empty = { "", None },
    )]
    fn test_parse_level(input: &str, expected: Option<Level>) {
        assert_eq!(parse_level(input), expected);
    }

    #[test]
    fn test_from_config_uses_configured_level_and_format() {
        let mut config = RepodocConfig::defaults();
        config.log_level = "debug".to_string();
        config.log_json = true;

        let logging = LoggingConfig::from_config(&config);
        assert_eq!(logging.level, Level::DEBUG);
        assert!(logging.use_json);
        assert!(logging.include_location);
    }

    #[test]
    fn test_from_config_defaults() {
        let logging = LoggingConfig::from_config(&RepodocConfig::defaults());
        assert_eq!(logging, LoggingConfig::default());
    }

    #[test]
    fn test_directives() {
        let logging = LoggingConfig {
            level: Level::ERROR,
            ..Default::default()
        };
        assert_eq!(
            logging.directives(),
            "warn,repodoc=error,h2=warn,hyper=warn,reqwest=warn"
        );
    }
}
