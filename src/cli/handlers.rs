//! Subcommand handlers. Each returns the process exit code.

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::commands::{AnalyzeArgs, CliArgs, Commands, GenerateArgs, SessionArgs};
use super::output::OutputFormatter;
use super::session::{run_session, SESSION_HELP};
use crate::config::{ConfigError, RepodocConfig};
use crate::github::GitHubClient;
use crate::progress::{LoggingHandler, NoOpHandler, ProgressHandler, SpinnerHandler};
use crate::registry::SessionRegistry;
use crate::service::ReadmeService;

/// Environment configuration with command-line overrides applied, validated.
///
/// `--log-level` wins over `-v`/`-q`, which win over `REPODOC_LOG_LEVEL`.
pub fn load_config(args: &CliArgs) -> Result<RepodocConfig, ConfigError> {
    let mut config = RepodocConfig::from_env()?;

    let timeout = match &args.command {
        Commands::Generate(generate_args) => generate_args.timeout,
        Commands::Analyze(analyze_args) => analyze_args.timeout,
        Commands::Session(session_args) => session_args.timeout,
    };
    if timeout.is_some() {
        config.request_timeout_secs = timeout;
    }

    if let Some(level) = &args.log_level {
        config.log_level = level.to_lowercase();
    } else if args.verbose {
        config.log_level = "debug".to_string();
    } else if args.quiet {
        config.log_level = "error".to_string();
    }

    config.validate()?;
    Ok(config)
}

fn progress_handler(quiet: bool) -> Arc<dyn ProgressHandler> {
    if quiet {
        return Arc::new(NoOpHandler);
    }
    match SpinnerHandler::for_terminal() {
        Some(spinner) => Arc::new(spinner),
        None => Arc::new(LoggingHandler),
    }
}

fn build_service(
    config: &RepodocConfig,
    progress: Arc<dyn ProgressHandler>,
) -> Option<ReadmeService<GitHubClient>> {
    debug!(?config, "Building GitHub client");
    match GitHubClient::new(config) {
        Ok(client) => Some(ReadmeService::new(client, config).with_progress(progress)),
        Err(e) => {
            error!("Failed to create GitHub client: {}", e);
            eprintln!("\n{}", e.help_message());
            None
        }
    }
}

fn write_output(output: &str, path: Option<&Path>, quiet: bool) -> i32 {
    match path {
        Some(path) => {
            if let Err(e) = std::fs::write(path, output) {
                error!("Failed to write output file: {}", e);
                eprintln!("Error: failed to write {}: {}", path.display(), e);
                return 1;
            }
            if !quiet {
                eprintln!("Output written to: {}", path.display());
            }
        }
        None if output.ends_with('\n') => print!("{}", output),
        None => println!("{}", output),
    }
    0
}

pub async fn handle_generate(args: &GenerateArgs, config: &RepodocConfig, quiet: bool) -> i32 {
    info!(url = %args.url, "Generating README");

    let Some(service) = build_service(config, progress_handler(quiet)) else {
        return 1;
    };

    let readme = match service.generate(&args.url).await {
        Ok(readme) => readme,
        Err(e) => {
            error!("Generation failed: {}", e);
            eprintln!("\n{}", e.help_message());
            return 1;
        }
    };

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_readme(&readme) {
        Ok(output) => write_output(&output, args.output.as_deref(), quiet),
        Err(e) => {
            error!("Failed to format output: {:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

pub async fn handle_analyze(args: &AnalyzeArgs, config: &RepodocConfig, quiet: bool) -> i32 {
    info!(url = %args.url, "Analyzing repository");

    let Some(service) = build_service(config, progress_handler(quiet)) else {
        return 1;
    };

    let analysis = match service.analyze(&args.url).await {
        Ok(analysis) => analysis,
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("\n{}", e.help_message());
            return 1;
        }
    };

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_analysis(&analysis) {
        Ok(output) => write_output(&output, None, quiet),
        Err(e) => {
            error!("Failed to format output: {:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

pub async fn handle_session(_args: &SessionArgs, config: &RepodocConfig, quiet: bool) -> i32 {
    // Spinner output would interleave with the prompt.
    let progress: Arc<dyn ProgressHandler> = if quiet {
        Arc::new(NoOpHandler)
    } else {
        Arc::new(LoggingHandler)
    };
    let Some(service) = build_service(config, progress) else {
        return 1;
    };

    let interactive = atty::is(atty::Stream::Stdin);
    if interactive && !quiet {
        println!("repodoc session. Type 'help' for commands.\n");
        println!("{}\n", SESSION_HELP);
    }

    let mut registry = SessionRegistry::new();
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    let result = run_session(&service, &mut registry, stdin, &mut stdout, interactive).await;
    info!(documents = registry.len(), "Session ended");

    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("Session failed: {:#}", e);
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;
    use std::env;
    use tempfile::TempDir;

    const URL: &str = "https://github.com/octo/demo";

    fn load(argv: &[&str]) -> Result<RepodocConfig, ConfigError> {
        let mut full = vec!["repodoc"];
        full.extend_from_slice(argv);
        load_config(&CliArgs::parse_from(full))
    }

    /// Runs `f` with `REPODOC_LOG_LEVEL` set to `value`, then restores it
    fn with_log_level_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let saved = env::var("REPODOC_LOG_LEVEL").ok();
        match value {
            Some(v) => env::set_var("REPODOC_LOG_LEVEL", v),
            None => env::remove_var("REPODOC_LOG_LEVEL"),
        }
        let result = f();
        match saved {
            Some(v) => env::set_var("REPODOC_LOG_LEVEL", v),
            None => env::remove_var("REPODOC_LOG_LEVEL"),
        }
        result
    }

    #[test]
    #[serial]
    fn test_load_config_applies_timeout_override() {
        let config = with_log_level_env(None, || load(&["generate", URL, "--timeout", "42"])).unwrap();
        assert_eq!(config.request_timeout_secs, Some(42));

        let config = with_log_level_env(None, || load(&["session", "--timeout", "7"])).unwrap();
        assert_eq!(config.request_timeout_secs, Some(7));
    }

    #[test]
    #[serial]
    fn test_load_config_rejects_out_of_range_timeout() {
        let result = with_log_level_env(None, || load(&["analyze", URL, "--timeout", "0"]));
        assert!(matches!(result, Err(ConfigError::ValidationFailed(_))));
    }

    #[test]
    #[serial]
    fn test_log_level_precedence() {
        with_log_level_env(Some("warn"), || {
            assert_eq!(load(&["session"]).unwrap().log_level, "warn");
            assert_eq!(load(&["-v", "session"]).unwrap().log_level, "debug");
            assert_eq!(load(&["-q", "session"]).unwrap().log_level, "error");
            assert_eq!(
                load(&["-v", "--log-level", "TRACE", "session"]).unwrap().log_level,
                "trace"
            );
        });
    }

    #[test]
    #[serial]
    fn test_invalid_log_level_is_a_config_error() {
        let from_env = with_log_level_env(Some("loud"), || load(&["session"]));
        assert!(matches!(from_env, Err(ConfigError::ValidationFailed(_))));

        let from_flag = with_log_level_env(None, || load(&["--log-level", "loud", "session"]));
        assert!(matches!(from_flag, Err(ConfigError::ValidationFailed(_))));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("README.md");

        assert_eq!(write_output("# demo\n", Some(&path), true), 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# demo\n");
    }

    #[test]
    fn test_write_output_reports_bad_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("README.md");
        assert_eq!(write_output("x", Some(&path), true), 1);
    }
}
