//! Project type detection
//!
//! Rules are evaluated in a fixed order. Dependency checks here look at
//! runtime dependencies only; a UI library pulled in as a dev dependency does
//! not make a package a web application.

use crate::snapshot::RepositorySnapshot;
use crate::stack::{LanguageId, ProjectType};

const WEB_UI_DEPENDENCIES: &[&str] = &["react", "vue"];
const BACKEND_DEPENDENCIES: &[&str] = &["express", "fastify", "koa"];
const MOBILE_ENTRIES: &[&str] = &["android", "ios", "App.js"];
const DESKTOP_DEPENDENCIES: &[&str] = &["electron", "tauri"];

pub fn detect_project_type(snapshot: &RepositorySnapshot) -> ProjectType {
    let manifest = &snapshot.manifest;
    let has_index_html = snapshot.has_entry("index.html");

    if has_index_html
        || WEB_UI_DEPENDENCIES
            .iter()
            .any(|dep| manifest.has_runtime_dependency(dep))
    {
        return ProjectType::WebApplication;
    }

    if BACKEND_DEPENDENCIES
        .iter()
        .any(|dep| manifest.has_runtime_dependency(dep))
    {
        return ProjectType::ApiBackend;
    }

    if snapshot
        .entries
        .iter()
        .any(|entry| entry.name == "bin" || entry.path.contains("bin/"))
    {
        return ProjectType::CliTool;
    }

    if snapshot.has_manifest_entry() && !has_index_html {
        return ProjectType::Library;
    }

    if MOBILE_ENTRIES.iter().any(|name| snapshot.has_entry(name)) {
        return ProjectType::MobileApplication;
    }

    if DESKTOP_DEPENDENCIES
        .iter()
        .any(|dep| manifest.has_runtime_dependency(dep))
    {
        return ProjectType::DesktopApplication;
    }

    match snapshot.language {
        Some(LanguageId::Python) => ProjectType::PythonApplication,
        Some(LanguageId::Java) => ProjectType::JavaApplication,
        Some(LanguageId::Go) => ProjectType::GoApplication,
        Some(LanguageId::Rust) => ProjectType::RustApplication,
        Some(LanguageId::Cpp) => ProjectType::CppApplication,
        _ => ProjectType::SoftwareProject,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::RepoEntry;
    use yare::parameterized;

    fn snapshot(entries: &[&str], deps: &[&str], language: Option<LanguageId>) -> RepositorySnapshot {
        let mut snapshot = RepositorySnapshot::new("octo", "demo");
        snapshot.entries = entries.iter().map(|e| RepoEntry::file(*e)).collect();
        snapshot.manifest.dependencies = deps.iter().map(|d| d.to_string()).collect();
        snapshot.language = language;
        snapshot
    }

    #[parameterized(
        index_html = { &["index.html"], &[], None, ProjectType::WebApplication },
        react = { &["package.json"], &["react"], None, ProjectType::WebApplication },
        vue = { &["package.json"], &["vue"], None, ProjectType::WebApplication },
        express = { &["package.json"], &["express"], None, ProjectType::ApiBackend },
        koa = { &["package.json"], &["koa"], None, ProjectType::ApiBackend },
        bin_dir = { &["package.json", "bin"], &[], None, ProjectType::CliTool },
        library = { &["package.json", "src"], &["lodash"], None, ProjectType::Library },
        android = { &["android", "build.gradle"], &[], Some(LanguageId::Java), ProjectType::MobileApplication },
        app_js = { &["App.js"], &[], None, ProjectType::MobileApplication },
        python = { &["requirements.txt", "main.py"], &[], Some(LanguageId::Python), ProjectType::PythonApplication },
        java = { &["pom.xml"], &[], Some(LanguageId::Java), ProjectType::JavaApplication },
        go = { &["go.mod"], &[], Some(LanguageId::Go), ProjectType::GoApplication },
        rust = { &["Cargo.toml"], &[], Some(LanguageId::Rust), ProjectType::RustApplication },
        cpp = { &["CMakeLists.txt"], &[], Some(LanguageId::Cpp), ProjectType::CppApplication },
        ruby = { &["Gemfile"], &[], Some(LanguageId::Ruby), ProjectType::SoftwareProject },
        nothing = { &[], &[], None, ProjectType::SoftwareProject },
    )]
    fn test_detect_project_type(
        entries: &[&str],
        deps: &[&str],
        language: Option<LanguageId>,
        expected: ProjectType,
    ) {
        assert_eq!(detect_project_type(&snapshot(entries, deps, language)), expected);
    }

    #[test]
    fn test_dev_dependencies_do_not_affect_project_type() {
        let mut lib = snapshot(&["package.json"], &[], None);
        lib.manifest.dev_dependencies.insert("react".to_string());
        assert_eq!(detect_project_type(&lib), ProjectType::Library);
    }

    #[test]
    fn test_bin_path_fragment_marks_cli() {
        let mut cli = snapshot(&[], &[], Some(LanguageId::Rust));
        cli.entries.push(RepoEntry {
            name: "cli.rs".to_string(),
            kind: crate::snapshot::EntryKind::File,
            path: "src/bin/cli.rs".to_string(),
        });
        assert_eq!(detect_project_type(&cli), ProjectType::CliTool);
    }

    #[test]
    fn test_library_rule_precedes_language_rule() {
        let package = snapshot(&["package.json", "setup.py"], &[], Some(LanguageId::Python));
        assert_eq!(detect_project_type(&package), ProjectType::Library);
    }

    #[test]
    fn test_electron_app_with_manifest_is_library() {
        // The manifest rule fires before the desktop rule
        let app = snapshot(&["package.json"], &["electron"], None);
        assert_eq!(detect_project_type(&app), ProjectType::Library);

        let app = snapshot(&[], &["electron"], None);
        assert_eq!(detect_project_type(&app), ProjectType::DesktopApplication);
    }
}
