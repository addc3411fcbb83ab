//! Heuristic repository classification
//!
//! Classification is a pure function of a [`RepositorySnapshot`]: the same
//! snapshot always yields the same [`ClassificationResult`]. Every rule table
//! is ordered and the first match wins.

mod framework;
mod project_type;

pub use framework::detect_framework;
pub use project_type::detect_project_type;

use crate::snapshot::RepositorySnapshot;
use crate::stack::{FrameworkId, ProjectType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Entry names that mark a test directory or file outright
const TEST_ENTRY_NAMES: &[&str] = &["__tests__", "tests"];

/// Substrings that mark an entry as test-related
const TEST_NAME_FRAGMENTS: &[&str] = &["test", "spec"];

const CONTAINER_FILES: &[&str] = &["Dockerfile", "dockerfile"];

/// Facts derived from a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// `None` when no framework rule matched
    pub framework: Option<FrameworkId>,
    pub project_type: ProjectType,
    pub has_tests: bool,
    pub has_container_file: bool,
}

impl ClassificationResult {
    /// Framework label, empty when nothing was detected
    pub fn framework_label(&self) -> &'static str {
        self.framework.map(|f| f.label()).unwrap_or("")
    }
}

/// Classifies a repository snapshot
pub fn classify(snapshot: &RepositorySnapshot) -> ClassificationResult {
    let result = ClassificationResult {
        framework: detect_framework(snapshot),
        project_type: detect_project_type(snapshot),
        has_tests: has_tests(snapshot),
        has_container_file: has_container_file(snapshot),
    };

    debug!(
        repo = %snapshot.name,
        framework = result.framework_label(),
        project_type = %result.project_type,
        has_tests = result.has_tests,
        has_container_file = result.has_container_file,
        "Classified repository"
    );

    result
}

/// True when any root entry looks like tests
pub fn has_tests(snapshot: &RepositorySnapshot) -> bool {
    snapshot.entries.iter().any(|entry| {
        TEST_ENTRY_NAMES.contains(&entry.name.as_str())
            || TEST_NAME_FRAGMENTS
                .iter()
                .any(|fragment| entry.name.contains(fragment))
    })
}

pub fn has_container_file(snapshot: &RepositorySnapshot) -> bool {
    snapshot
        .entries
        .iter()
        .any(|entry| CONTAINER_FILES.contains(&entry.name.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::RepoEntry;
    use crate::stack::LanguageId;

    fn snapshot_with(entries: &[&str], deps: &[&str]) -> RepositorySnapshot {
        let mut snapshot = RepositorySnapshot::new("octo", "demo");
        snapshot.entries = entries.iter().map(|e| RepoEntry::file(*e)).collect();
        snapshot.manifest.dependencies = deps.iter().map(|d| d.to_string()).collect();
        snapshot
    }

    #[test]
    fn test_classify_is_deterministic() {
        let mut snapshot = snapshot_with(&["package.json", "src", "Dockerfile"], &["react", "next"]);
        snapshot.language = Some(LanguageId::TypeScript);

        let first = classify(&snapshot);
        let second = classify(&snapshot);
        assert_eq!(first, second);
        assert_eq!(first.framework, Some(FrameworkId::NextJs));
        assert_eq!(first.project_type, ProjectType::WebApplication);
        assert!(first.has_container_file);
    }

    #[test]
    fn test_framework_label_empty_when_none() {
        let result = classify(&snapshot_with(&["README.md"], &[]));
        assert_eq!(result.framework, None);
        assert_eq!(result.framework_label(), "");
        assert_eq!(result.project_type, ProjectType::SoftwareProject);
    }

    #[test]
    fn test_has_tests_by_name() {
        assert!(has_tests(&snapshot_with(&["__tests__"], &[])));
        assert!(has_tests(&snapshot_with(&["tests"], &[])));
        assert!(has_tests(&snapshot_with(&["jest.config.js", "test_utils.py"], &[])));
        assert!(has_tests(&snapshot_with(&["spec"], &[])));
        assert!(has_tests(&snapshot_with(&["karma.spec.ts"], &[])));
        assert!(!has_tests(&snapshot_with(&["src", "README.md"], &[])));
    }

    #[test]
    fn test_has_tests_is_case_sensitive() {
        assert!(!has_tests(&snapshot_with(&["Tests"], &[])));
    }

    #[test]
    fn test_has_container_file() {
        assert!(has_container_file(&snapshot_with(&["Dockerfile"], &[])));
        assert!(has_container_file(&snapshot_with(&["dockerfile"], &[])));
        assert!(!has_container_file(&snapshot_with(&["Dockerfile.dev"], &[])));
        assert!(!has_container_file(&snapshot_with(&["docker-compose.yml"], &[])));
    }
}
