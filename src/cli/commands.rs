use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// README generator for public GitHub repositories
#[derive(Parser, Debug)]
#[command(
    name = "repodoc",
    about = "Generate a README.md for a public GitHub repository",
    version,
    long_about = "repodoc reads repository metadata, the root directory listing and \
                  package.json through the GitHub REST API, classifies the project \
                  (language, framework, project type) and renders a README.md from \
                  a fixed template. No authentication is used, so the unauthenticated \
                  rate limit applies."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Generate a README for a repository",
        long_about = "Fetches the repository, classifies it and prints the generated \
                      README.md.\n\n\
                      Examples:\n  \
                      repodoc generate https://github.com/octocat/Hello-World\n  \
                      repodoc generate https://github.com/octocat/Hello-World -o README.md\n  \
                      repodoc generate https://github.com/octocat/Hello-World --format json"
    )]
    Generate(GenerateArgs),

    #[command(
        about = "Show how a repository is classified",
        long_about = "Fetches the repository and prints the detected language, framework, \
                      project type and flags without rendering a README.\n\n\
                      Examples:\n  \
                      repodoc analyze https://github.com/vercel/next.js\n  \
                      repodoc analyze https://github.com/vercel/next.js --format yaml"
    )]
    Analyze(AnalyzeArgs),

    #[command(
        about = "Interactive session that keeps generated READMEs",
        long_about = "Starts a line-oriented session. Generated documents are kept in \
                      memory, newest first, until the session ends.\n\n\
                      Session commands:\n  \
                      generate <url>          Generate and record a README\n  \
                      list                    List recorded documents\n  \
                      show <id>               Print a document\n  \
                      save <id> [path]        Write a document (default: README.md)\n  \
                      rename <id> <name>      Change a document's name\n  \
                      describe <id> <text>    Change a document's description\n  \
                      delete <id>             Remove a document\n  \
                      help                    Show this list\n  \
                      quit                    End the session\n\n\
                      Ids may be shortened to any unique prefix."
    )]
    Session(SessionArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(value_name = "URL", help = "Repository URL, e.g. https://github.com/owner/repo")]
    pub url: String,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "markdown",
        help = "Output format"
    )]
    pub format: GenerateFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,

    #[arg(long, value_name = "SECONDS", help = "Request timeout in seconds")]
    pub timeout: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    #[arg(value_name = "URL", help = "Repository URL, e.g. https://github.com/owner/repo")]
    pub url: String,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: AnalyzeFormatArg,

    #[arg(long, value_name = "SECONDS", help = "Request timeout in seconds")]
    pub timeout: Option<u64>,
}

#[derive(Parser, Debug, Clone)]
pub struct SessionArgs {
    #[arg(long, value_name = "SECONDS", help = "Request timeout in seconds")]
    pub timeout: Option<u64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateFormatArg {
    Markdown,
    Json,
    Yaml,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzeFormatArg {
    Human,
    Json,
    Yaml,
}

impl From<GenerateFormatArg> for super::output::OutputFormat {
    fn from(arg: GenerateFormatArg) -> Self {
        match arg {
            GenerateFormatArg::Markdown => super::output::OutputFormat::Markdown,
            GenerateFormatArg::Json => super::output::OutputFormat::Json,
            GenerateFormatArg::Yaml => super::output::OutputFormat::Yaml,
        }
    }
}

impl From<AnalyzeFormatArg> for super::output::OutputFormat {
    fn from(arg: AnalyzeFormatArg) -> Self {
        match arg {
            AnalyzeFormatArg::Human => super::output::OutputFormat::Human,
            AnalyzeFormatArg::Json => super::output::OutputFormat::Json,
            AnalyzeFormatArg::Yaml => super::output::OutputFormat::Yaml,
        }
    }
}
