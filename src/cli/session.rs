//! Line-oriented interactive session over a [`SessionRegistry`]

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};
use uuid::Uuid;

use super::output::{OutputFormat, OutputFormatter};
use crate::github::RepositorySource;
use crate::registry::{DocumentUpdate, SessionRegistry};
use crate::service::ReadmeService;

const DEFAULT_SAVE_PATH: &str = "README.md";

pub const SESSION_HELP: &str = "Commands:
  generate <url>          Generate and record a README
  list                    List recorded documents
  show <id>               Print a document
  save <id> [path]        Write a document (default: README.md)
  rename <id> <name>      Change a document's name
  describe <id> <text>    Change a document's description
  delete <id>             Remove a document
  help                    Show this list
  quit                    End the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Generate(String),
    List,
    Show(String),
    Save { id: String, path: Option<PathBuf> },
    Rename { id: String, name: String },
    Describe { id: String, text: String },
    Delete(String),
    Help,
    Quit,
    /// Blank line
    Empty,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let required = |what: &str| -> Result<String, String> {
            if rest.is_empty() {
                Err(format!("'{}' needs {}", verb, what))
            } else {
                Ok(rest.to_string())
            }
        };
        let id_and_text = |what: &str| -> Result<(String, String), String> {
            match rest.split_once(char::is_whitespace) {
                Some((id, text)) if !text.trim().is_empty() => {
                    Ok((id.to_string(), text.trim().to_string()))
                }
                _ => Err(format!("'{}' needs an id and {}", verb, what)),
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Ok(SessionCommand::Empty),
            "generate" | "gen" => required("a repository URL").map(SessionCommand::Generate),
            "list" | "ls" => Ok(SessionCommand::List),
            "show" => required("an id").map(SessionCommand::Show),
            "save" => {
                if rest.is_empty() {
                    return Err("'save' needs an id".to_string());
                }
                let (id, path) = match rest.split_once(char::is_whitespace) {
                    Some((id, path)) => (id, Some(PathBuf::from(path.trim()))),
                    None => (rest, None),
                };
                Ok(SessionCommand::Save {
                    id: id.to_string(),
                    path,
                })
            }
            "rename" => id_and_text("a new name")
                .map(|(id, name)| SessionCommand::Rename { id, name }),
            "describe" => id_and_text("a description")
                .map(|(id, text)| SessionCommand::Describe { id, text }),
            "delete" | "rm" => required("an id").map(SessionCommand::Delete),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            other => Err(format!("Unknown command '{}'. Type 'help' for a list.", other)),
        }
    }
}

/// Runs commands from `input` until it ends or `quit` is read
pub async fn run_session<S, R, W>(
    service: &ReadmeService<S>,
    registry: &mut SessionRegistry,
    input: R,
    out: &mut W,
    prompt: bool,
) -> Result<()>
where
    S: RepositorySource,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        if prompt {
            write!(out, "repodoc> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{}", message)?;
                continue;
            }
        };
        debug!(?command, "Session command");

        if command == SessionCommand::Quit {
            break;
        }
        execute(service, registry, command, out).await?;
    }

    Ok(())
}

fn resolve(registry: &SessionRegistry, id: &str) -> Option<Uuid> {
    registry.find_by_prefix(id).map(|doc| doc.id)
}

async fn execute<S, W>(
    service: &ReadmeService<S>,
    registry: &mut SessionRegistry,
    command: SessionCommand,
    out: &mut W,
) -> Result<()>
where
    S: RepositorySource,
    W: Write,
{
    let formatter = OutputFormatter::new(OutputFormat::Human);

    match command {
        SessionCommand::Generate(url) => match service.generate_into(&url, registry).await {
            Ok(doc) => writeln!(
                out,
                "Generated README for {} [{}]",
                doc.name,
                &doc.id.to_string()[..8]
            )?,
            Err(e) => {
                warn!(url = %url, error = %e, "Generation failed");
                writeln!(out, "Error: {}", e.user_message())?;
            }
        },
        SessionCommand::List => {
            writeln!(out, "{}", formatter.format_documents(registry.list())?)?;
        }
        SessionCommand::Show(id) => match resolve(registry, &id).and_then(|id| registry.get(id)) {
            Some(doc) => write!(out, "{}", doc.content)?,
            None => writeln!(out, "No document matches '{}'", id)?,
        },
        SessionCommand::Save { id, path } => {
            match resolve(registry, &id).and_then(|id| registry.get(id)) {
                Some(doc) => {
                    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_PATH));
                    match std::fs::write(&path, &doc.content) {
                        Ok(()) => writeln!(out, "Saved {} to {}", doc.name, path.display())?,
                        Err(e) => writeln!(out, "Failed to write {}: {}", path.display(), e)?,
                    }
                }
                None => writeln!(out, "No document matches '{}'", id)?,
            }
        }
        SessionCommand::Rename { id, name } => {
            let update = DocumentUpdate {
                name: Some(name),
                ..Default::default()
            };
            match resolve(registry, &id).and_then(|id| registry.update(id, update)) {
                Some(doc) => writeln!(out, "Renamed to {}", doc.name)?,
                None => writeln!(out, "No document matches '{}'", id)?,
            }
        }
        SessionCommand::Describe { id, text } => {
            let update = DocumentUpdate {
                description: Some(text),
                ..Default::default()
            };
            match resolve(registry, &id).and_then(|id| registry.update(id, update)) {
                Some(doc) => writeln!(out, "Updated description of {}", doc.name)?,
                None => writeln!(out, "No document matches '{}'", id)?,
            }
        }
        SessionCommand::Delete(id) => match resolve(registry, &id).and_then(|id| registry.remove(id)) {
            Some(doc) => writeln!(out, "Deleted {}", doc.name)?,
            None => writeln!(out, "No document matches '{}'", id)?,
        },
        SessionCommand::Help => writeln!(out, "{}", SESSION_HELP)?,
        SessionCommand::Quit | SessionCommand::Empty => {}
    }

    Ok(())
}
