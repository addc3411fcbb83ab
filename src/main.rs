use repodoc::cli::commands::{CliArgs, Commands};
use repodoc::cli::handlers::{handle_analyze, handle_generate, handle_session, load_config};
use repodoc::util::logging::{init_logging, LoggingConfig};
use repodoc::VERSION;

use clap::Parser;
use tracing::debug;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_logging(LoggingConfig::from_config(&config));

    debug!("repodoc v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Generate(generate_args) => {
            handle_generate(generate_args, &config, args.quiet).await
        }
        Commands::Analyze(analyze_args) => handle_analyze(analyze_args, &config, args.quiet).await,
        Commands::Session(session_args) => handle_session(session_args, &config, args.quiet).await,
    };

    std::process::exit(exit_code);
}
