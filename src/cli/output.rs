//! Output formatting for analyses, generated READMEs and session listings
//!
//! # Example
//!
//! ```ignore
//! use repodoc::cli::output::{OutputFormat, OutputFormatter};
//!
//! let formatter = OutputFormatter::new(OutputFormat::Json);
//! let output = formatter.format_analysis(&analysis)?;
//! println!("{}", output);
//! ```

use anyhow::{Context, Result};

use crate::registry::GeneratedDocument;
use crate::service::{Analysis, GeneratedReadme};

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Raw Markdown document
    Markdown,
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable summary
    Human,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Formats a generated README. Markdown and Human both emit the document itself.
    pub fn format_readme(&self, readme: &GeneratedReadme) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(readme)
                .context("Failed to serialize generated README to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(readme).context("Failed to serialize generated README to YAML")
            }
            OutputFormat::Markdown | OutputFormat::Human => Ok(readme.markdown.clone()),
        }
    }

    /// Formats an analysis. Markdown falls back to the human summary.
    pub fn format_analysis(&self, analysis: &Analysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(analysis).context("Failed to serialize analysis to JSON")
            }
            OutputFormat::Yaml => {
                serde_yaml::to_string(analysis).context("Failed to serialize analysis to YAML")
            }
            OutputFormat::Human | OutputFormat::Markdown => Ok(self.format_analysis_human(analysis)),
        }
    }

    /// Formats the session registry listing
    pub fn format_documents(&self, documents: &[GeneratedDocument]) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(documents)
                .context("Failed to serialize documents to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(documents).context("Failed to serialize documents to YAML")
            }
            OutputFormat::Human | OutputFormat::Markdown => {
                Ok(self.format_documents_human(documents))
            }
        }
    }

    fn format_analysis_human(&self, analysis: &Analysis) -> String {
        let snapshot = &analysis.snapshot;
        let classification = &analysis.classification;
        let mut output = String::new();

        output.push_str(&format!(
            "Repository Analysis: {}/{}\n",
            snapshot.owner.login, snapshot.name
        ));
        output.push_str(RULE);
        output.push_str("\n\n");

        if let Some(description) = &snapshot.description {
            output.push_str(&format!("{}\n\n", description));
        }

        let language = snapshot
            .language
            .as_ref()
            .map(|l| l.name().to_string())
            .unwrap_or_else(|| "(unknown)".to_string());
        let framework = match classification.framework_label() {
            "" => "(none detected)",
            label => label,
        };

        output.push_str(&format!("Language:      {}\n", language));
        output.push_str(&format!("Framework:     {}\n", framework));
        output.push_str(&format!("Project Type:  {}\n", classification.project_type));
        output.push_str(&format!("Tests:         {}\n", yes_no(classification.has_tests)));
        output.push_str(&format!(
            "Dockerfile:    {}\n\n",
            yes_no(classification.has_container_file)
        ));

        output.push_str("Repository:\n");
        output.push_str(&format!(
            "\u{251C}\u{2500} Stars / Forks / Issues: {} / {} / {}\n",
            snapshot.stats.stars, snapshot.stats.forks, snapshot.stats.open_issues
        ));
        output.push_str(&format!(
            "\u{251C}\u{2500} License:  {}\n",
            snapshot
                .license
                .as_ref()
                .map(|l| l.name.as_str())
                .unwrap_or("(none)")
        ));
        output.push_str(&format!("\u{251C}\u{2500} Branch:   {}\n", snapshot.default_branch));
        output.push_str(&format!("\u{2514}\u{2500} Clone:    {}\n\n", snapshot.clone_url));

        let entries: Vec<String> = snapshot
            .entries
            .iter()
            .map(|e| match e.kind {
                crate::snapshot::EntryKind::Directory => format!("{}/", e.name),
                crate::snapshot::EntryKind::File => e.name.clone(),
            })
            .collect();
        output.push_str(&format!("Root Entries ({}):\n", entries.len()));
        if entries.is_empty() {
            output.push_str("  (empty)\n");
        } else {
            output.push_str(&format!("  {}\n", entries.join(", ")));
        }

        let manifest = &snapshot.manifest;
        if !manifest.is_empty() {
            output.push_str("\nManifest (package.json):\n");
            output.push_str(&format!(
                "\u{251C}\u{2500} Dependencies:     {}\n",
                join_or_none(manifest.dependencies.iter())
            ));
            output.push_str(&format!(
                "\u{251C}\u{2500} Dev Dependencies: {}\n",
                join_or_none(manifest.dev_dependencies.iter())
            ));
            output.push_str(&format!(
                "\u{2514}\u{2500} Scripts:          {}\n",
                join_or_none(manifest.scripts.iter().map(|s| &s.name))
            ));
        }

        output
    }

    fn format_documents_human(&self, documents: &[GeneratedDocument]) -> String {
        if documents.is_empty() {
            return "No documents generated in this session.".to_string();
        }

        let mut output = format!("Session Documents ({})\n{}\n", documents.len(), RULE);
        for doc in documents {
            let short_id: String = doc.id.to_string().chars().take(8).collect();
            output.push_str(&format!(
                "{}  {}  {:<12}  {}\n",
                short_id,
                doc.created_at.format("%Y-%m-%d %H:%M:%S"),
                doc.language,
                doc.name
            ));
        }
        output
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn join_or_none<'a>(items: impl Iterator<Item = &'a String>) -> String {
    let items: Vec<&str> = items.map(String::as_str).collect();
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
