//! GitHub REST API response shapes
//!
//! Only the fields used downstream are declared; everything else in the
//! payloads is ignored.

use crate::snapshot::{
    EntryKind, License, Manifest, Owner, RepoEntry, RepoStats, RepositorySnapshot,
};
use crate::stack::LanguageId;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, Deserialize)]
pub struct RepoResponse {
    pub name: String,
    pub owner: OwnerResponse,
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub language: Option<String>,
    pub license: Option<LicenseResponse>,
    pub homepage: Option<String>,
    pub clone_url: String,
    #[serde(default)]
    pub ssh_url: String,
    #[serde(default)]
    pub default_branch: String,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnerResponse {
    pub login: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LicenseResponse {
    pub name: String,
    pub spdx_id: Option<String>,
}

/// One element of the `/contents` listing
#[derive(Debug, Clone, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<ContentEntry> for RepoEntry {
    fn from(entry: ContentEntry) -> Self {
        let kind = if entry.kind == "dir" {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        RepoEntry {
            name: entry.name,
            kind,
            path: entry.path,
        }
    }
}

/// Body of `/contents/<file>`
#[derive(Debug, Clone, Deserialize)]
pub struct FileContent {
    pub content: Option<String>,
    pub encoding: Option<String>,
}

/// Sections may be absent or `null`; both read as empty.
/// `Map` keeps declaration order (serde_json `preserve_order`).
#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: Option<Map<String, Value>>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Option<Map<String, Value>>,
    #[serde(default)]
    scripts: Option<Map<String, Value>>,
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest response has no content")]
    MissingContent,

    #[error("unsupported manifest encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("manifest is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("manifest is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl FileContent {
    /// Decodes the base64 payload, ignoring the line breaks GitHub inserts
    pub fn decode(&self) -> Result<String, ManifestError> {
        if let Some(encoding) = self.encoding.as_deref() {
            if encoding != "base64" {
                return Err(ManifestError::UnsupportedEncoding(encoding.to_string()));
            }
        }
        let raw = self.content.as_deref().ok_or(ManifestError::MissingContent)?;
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = STANDARD.decode(compact)?;
        Ok(String::from_utf8(bytes)?)
    }
}

/// Extracts dependency names and scripts from `package.json` text.
///
/// Script entries whose value is not a string are skipped.
pub fn parse_manifest(json: &str) -> Result<Manifest, ManifestError> {
    let package: PackageJson = serde_json::from_str(json)?;

    let mut manifest = Manifest {
        dependencies: package
            .dependencies
            .unwrap_or_default()
            .into_iter()
            .map(|(name, _)| name)
            .collect(),
        dev_dependencies: package
            .dev_dependencies
            .unwrap_or_default()
            .into_iter()
            .map(|(name, _)| name)
            .collect(),
        scripts: Vec::new(),
    };
    for (name, command) in package.scripts.unwrap_or_default() {
        if let Value::String(command) = command {
            manifest.set_script(name, command);
        }
    }

    Ok(manifest)
}

impl RepoResponse {
    pub fn into_snapshot(self, entries: Vec<RepoEntry>, manifest: Manifest) -> RepositorySnapshot {
        RepositorySnapshot {
            name: self.name,
            owner: Owner {
                login: self.owner.login,
                avatar_url: self.owner.avatar_url,
            },
            description: self.description.filter(|d| !d.trim().is_empty()),
            topics: self.topics,
            language: self.language.as_deref().map(LanguageId::parse),
            license: self.license.map(|l| License {
                name: l.name,
                spdx_id: l.spdx_id.filter(|id| !id.is_empty()),
            }),
            homepage: self.homepage.filter(|h| !h.trim().is_empty()),
            clone_url: self.clone_url,
            ssh_url: self.ssh_url,
            default_branch: self.default_branch,
            stats: RepoStats {
                stars: self.stargazers_count,
                forks: self.forks_count,
                open_issues: self.open_issues_count,
            },
            created_at: self.created_at,
            updated_at: self.updated_at,
            entries,
            manifest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manifest() {
        let manifest = parse_manifest(
            r#"{
                "name": "demo",
                "dependencies": { "react": "^18.0.0", "next": "14.0.0" },
                "devDependencies": { "jest": "^29" },
                "scripts": { "test": "jest", "build": "next build" }
            }"#,
        )
        .unwrap();

        assert!(manifest.dependencies.contains("react"));
        assert!(manifest.dependencies.contains("next"));
        assert!(manifest.dev_dependencies.contains("jest"));
        assert_eq!(manifest.script("test"), Some("jest"));
        assert_eq!(manifest.script("build"), Some("next build"));
    }

    #[test]
    fn test_parse_manifest_null_sections_read_as_empty() {
        let manifest = parse_manifest(
            r#"{ "dependencies": null, "devDependencies": null, "scripts": { "test": "jest" } }"#,
        )
        .unwrap();

        assert!(manifest.dependencies.is_empty());
        assert!(manifest.dev_dependencies.is_empty());
        assert_eq!(manifest.script("test"), Some("jest"));

        let manifest =
            parse_manifest(r#"{ "dependencies": { "react": "18" }, "scripts": null }"#).unwrap();
        assert!(manifest.dependencies.contains("react"));
        assert!(manifest.scripts.is_empty());
    }

    #[test]
    fn test_parse_manifest_keeps_script_order() {
        let manifest = parse_manifest(
            r#"{ "scripts": { "dev": "vite", "build": "vite build", "lint": "eslint .", "test": "vitest" } }"#,
        )
        .unwrap();

        let names: Vec<&str> = manifest.scripts.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["dev", "build", "lint", "test"]);
    }

    #[test]
    fn test_parse_manifest_without_sections() {
        let manifest = parse_manifest(r#"{ "name": "bare" }"#).unwrap();
        assert!(manifest.is_empty());
    }

    #[test]
    fn test_parse_manifest_skips_non_string_scripts() {
        let manifest = parse_manifest(r#"{ "scripts": { "ok": "run", "weird": 3 } }"#).unwrap();
        assert_eq!(manifest.scripts.len(), 1);
    }

    #[test]
    fn test_parse_manifest_invalid_json() {
        assert!(matches!(
            parse_manifest("{ not json"),
            Err(ManifestError::Json(_))
        ));
    }

    #[test]
    fn test_decode_strips_line_breaks() {
        let encoded = STANDARD.encode(r#"{"scripts":{"dev":"vite"}}"#);
        let (head, tail) = encoded.split_at(10);
        let file = FileContent {
            content: Some(format!("{}\n{}\n", head, tail)),
            encoding: Some("base64".to_string()),
        };
        assert_eq!(file.decode().unwrap(), r#"{"scripts":{"dev":"vite"}}"#);
    }

    #[test]
    fn test_decode_errors() {
        let missing = FileContent {
            content: None,
            encoding: Some("base64".to_string()),
        };
        assert!(matches!(missing.decode(), Err(ManifestError::MissingContent)));

        let garbage = FileContent {
            content: Some("!!!".to_string()),
            encoding: None,
        };
        assert!(matches!(garbage.decode(), Err(ManifestError::Base64(_))));

        let other = FileContent {
            content: Some(String::new()),
            encoding: Some("none".to_string()),
        };
        assert!(matches!(
            other.decode(),
            Err(ManifestError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn test_content_entry_kind() {
        let dir: RepoEntry = ContentEntry {
            name: "src".to_string(),
            path: "src".to_string(),
            kind: "dir".to_string(),
        }
        .into();
        assert_eq!(dir.kind, EntryKind::Directory);

        let link: RepoEntry = ContentEntry {
            name: "docs".to_string(),
            path: "docs".to_string(),
            kind: "symlink".to_string(),
        }
        .into();
        assert_eq!(link.kind, EntryKind::File);
    }

    #[test]
    fn test_into_snapshot_normalises_empty_strings() {
        let response: RepoResponse = serde_json::from_value(serde_json::json!({
            "name": "demo",
            "owner": { "login": "octo", "avatar_url": null },
            "description": "",
            "language": "C++",
            "license": { "name": "Other", "spdx_id": "" },
            "homepage": "",
            "clone_url": "https://github.com/octo/demo.git",
            "stargazers_count": 5,
            "created_at": "2020-01-02T03:04:05Z"
        }))
        .unwrap();

        let snapshot = response.into_snapshot(Vec::new(), Manifest::default());
        assert_eq!(snapshot.description, None);
        assert_eq!(snapshot.homepage, None);
        assert_eq!(snapshot.language, Some(LanguageId::Cpp));
        assert_eq!(snapshot.license.unwrap().spdx_id, None);
        assert_eq!(snapshot.stats.stars, 5);
        assert_eq!(snapshot.created_at.to_rfc3339(), "2020-01-02T03:04:05+00:00");
    }
}
