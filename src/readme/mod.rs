//! README document synthesis
//!
//! [`synthesize`] renders a snapshot and its classification into a Markdown
//! document. Sections always appear in the same order and are separated by a
//! single blank line; sections that do not apply are left out entirely.
//!
//! # Example
//!
//! ```
//! use repodoc::classify::classify;
//! use repodoc::readme::synthesize;
//! use repodoc::snapshot::RepositorySnapshot;
//!
//! let snapshot = RepositorySnapshot::new("octocat", "hello-world");
//! let classification = classify(&snapshot);
//! let markdown = synthesize(&snapshot, &classification);
//! assert!(markdown.starts_with("# hello-world"));
//! ```

mod badges;
mod quickstart;
mod sections;

use crate::classify::ClassificationResult;
use crate::snapshot::RepositorySnapshot;
use regex::Regex;
use std::sync::OnceLock;

/// Inputs shared by every section renderer
pub(crate) struct ReadmeContext<'a> {
    pub snapshot: &'a RepositorySnapshot,
    pub classification: &'a ClassificationResult,
    pub slug: String,
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"))
}

/// Lower-cases ASCII letters and replaces each whitespace run with `-`.
///
/// Punctuation and non-ASCII characters are kept as they are.
///
/// ```
/// use repodoc::readme::slug;
///
/// assert_eq!(slug("My Cool  App"), "my-cool-app");
/// assert_eq!(slug("Café.JS"), "café.js");
/// ```
pub fn slug(name: &str) -> String {
    whitespace_run()
        .replace_all(&name.to_ascii_lowercase(), "-")
        .into_owned()
}

/// Module name used in `python -m` invocations
pub fn python_module_name(slug: &str) -> String {
    slug.replace('-', "_")
}

/// Renders the README for a classified repository
pub fn synthesize(snapshot: &RepositorySnapshot, classification: &ClassificationResult) -> String {
    let ctx = ReadmeContext {
        snapshot,
        classification,
        slug: slug(&snapshot.name),
    };

    let parts: Vec<Option<String>> = vec![
        Some(sections::title(&ctx)),
        Some(badges::render(&ctx)),
        sections::topics(&ctx),
        Some(sections::description(&ctx)),
        Some(sections::features(&ctx)),
        Some(format!(
            "## 🚀 Quick Start\n\n### Prerequisites\n\n{}",
            quickstart::prerequisites(&ctx)
        )),
        Some(format!("### Installation\n\n{}", quickstart::installation(&ctx))),
        Some(format!("### Usage\n\n{}", quickstart::usage(&ctx))),
        sections::api_documentation(&ctx),
        sections::scripts(&ctx),
        sections::testing(&ctx),
        sections::docker(&ctx),
        Some(sections::project_structure(&ctx)),
        Some(sections::built_with(&ctx)),
        Some(sections::contributing(&ctx)),
        Some(sections::license(&ctx)),
        Some(sections::authors(&ctx)),
        Some(sections::acknowledgments()),
        Some(sections::stats(&ctx)),
        Some(sections::footer()),
        sections::live_demo(&ctx),
    ];

    let mut document = parts.into_iter().flatten().collect::<Vec<_>>().join("\n\n");
    document.push('\n');
    document
}
