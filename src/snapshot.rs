//! Repository facts gathered before classification
//!
//! A [`RepositorySnapshot`] is built once per generation by the fetcher and is
//! read-only for the classifier and synthesizer.

use crate::stack::LanguageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Name of the root manifest whose dependencies drive classification
pub const MANIFEST_FILE: &str = "package.json";

/// Everything known about a repository at generation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    pub name: String,
    pub owner: Owner,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub language: Option<LanguageId>,
    pub license: Option<License>,
    pub homepage: Option<String>,
    pub clone_url: String,
    pub ssh_url: String,
    pub default_branch: String,
    pub stats: RepoStats,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Root directory listing in API order
    pub entries: Vec<RepoEntry>,
    /// Empty unless a root `package.json` was found and parsed
    pub manifest: Manifest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub login: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
    pub spdx_id: Option<String>,
}

impl License {
    /// SPDX identifier when the API supplied one, otherwise the display name
    pub fn badge_label(&self) -> &str {
        self.spdx_id.as_deref().unwrap_or(&self.name)
    }

    pub fn is_mit(&self) -> bool {
        self.spdx_id.as_deref() == Some("MIT")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStats {
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// One item of the root directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoEntry {
    pub name: String,
    pub kind: EntryKind,
    pub path: String,
}

impl RepoEntry {
    pub fn file(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            kind: EntryKind::Directory,
        }
    }
}

/// One `scripts` entry of `package.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub name: String,
    pub command: String,
}

/// Dependency and script data extracted from `package.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub dependencies: BTreeSet<String>,
    pub dev_dependencies: BTreeSet<String>,
    /// In declaration order
    pub scripts: Vec<Script>,
}

impl Manifest {
    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty() && self.scripts.is_empty()
    }

    /// Runtime or development dependency
    pub fn has_any_dependency(&self, name: &str) -> bool {
        self.dependencies.contains(name) || self.dev_dependencies.contains(name)
    }

    pub fn has_runtime_dependency(&self, name: &str) -> bool {
        self.dependencies.contains(name)
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.command.as_str())
    }

    /// Replaces the command of an existing script, otherwise appends it
    pub fn set_script(&mut self, name: impl Into<String>, command: impl Into<String>) {
        let name = name.into();
        let command = command.into();
        match self.scripts.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.command = command,
            None => self.scripts.push(Script { name, command }),
        }
    }
}

impl RepositorySnapshot {
    /// Minimal snapshot with public github.com URLs and no metadata
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            owner: Owner {
                login: owner.to_string(),
                avatar_url: None,
            },
            description: None,
            topics: Vec::new(),
            language: None,
            license: None,
            homepage: None,
            clone_url: format!("https://github.com/{}/{}.git", owner, name),
            ssh_url: format!("git@github.com:{}/{}.git", owner, name),
            default_branch: "main".to_string(),
            stats: RepoStats::default(),
            created_at: DateTime::<Utc>::default(),
            updated_at: DateTime::<Utc>::default(),
            entries: Vec::new(),
            manifest: Manifest::default(),
        }
    }

    pub fn has_entry(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    pub fn has_manifest_entry(&self) -> bool {
        self.has_entry(MANIFEST_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_badge_label_prefers_spdx() {
        let license = License {
            name: "MIT License".to_string(),
            spdx_id: Some("MIT".to_string()),
        };
        assert_eq!(license.badge_label(), "MIT");
        assert!(license.is_mit());

        let license = License {
            name: "Other".to_string(),
            spdx_id: None,
        };
        assert_eq!(license.badge_label(), "Other");
        assert!(!license.is_mit());
    }

    #[test]
    fn test_manifest_dependency_lookup() {
        let mut manifest = Manifest::default();
        assert!(manifest.is_empty());

        manifest.dependencies.insert("react".to_string());
        manifest.dev_dependencies.insert("jest".to_string());

        assert!(manifest.has_any_dependency("react"));
        assert!(manifest.has_any_dependency("jest"));
        assert!(manifest.has_runtime_dependency("react"));
        assert!(!manifest.has_runtime_dependency("jest"));
        assert!(!manifest.is_empty());
    }

    #[test]
    fn test_scripts_keep_insertion_order() {
        let mut manifest = Manifest::default();
        manifest.set_script("dev", "vite");
        manifest.set_script("build", "vite build");
        manifest.set_script("dev", "vite --host");

        let names: Vec<&str> = manifest.scripts.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["dev", "build"]);
        assert_eq!(manifest.script("dev"), Some("vite --host"));
        assert_eq!(manifest.script("lint"), None);
    }

    #[test]
    fn test_entry_constructors() {
        let file = RepoEntry::file("index.html");
        assert_eq!(file.kind, EntryKind::File);
        assert_eq!(file.path, "index.html");

        let dir = RepoEntry::directory("src");
        assert_eq!(dir.kind, EntryKind::Directory);
    }
}
