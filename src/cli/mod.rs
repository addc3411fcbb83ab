pub mod commands;
pub mod handlers;
pub mod output;
pub mod session;

pub use commands::{AnalyzeArgs, CliArgs, Commands, GenerateArgs, SessionArgs};
pub use output::{OutputFormat, OutputFormatter};
pub use session::{run_session, SessionCommand};
