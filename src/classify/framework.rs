//! Framework detection from manifest dependencies and root files

use crate::snapshot::{Manifest, RepositorySnapshot};
use crate::stack::FrameworkId;

/// Meta-frameworks built on React, checked in order when `react` is present
const REACT_FRAMEWORKS: &[(&str, FrameworkId)] = &[
    ("next", FrameworkId::NextJs),
    ("gatsby", FrameworkId::Gatsby),
    ("@remix-run/react", FrameworkId::Remix),
];

const BACKEND_FRAMEWORKS: &[(&str, FrameworkId)] = &[
    ("express", FrameworkId::Express),
    ("fastify", FrameworkId::Fastify),
    ("koa", FrameworkId::Koa),
    ("nestjs", FrameworkId::NestJs),
    ("@nestjs/core", FrameworkId::NestJs),
];

const BUILD_TOOLS: &[(&str, FrameworkId)] = &[
    ("vite", FrameworkId::Vite),
    ("webpack", FrameworkId::Webpack),
    ("parcel", FrameworkId::Parcel),
];

/// Root files that identify a Python project
const PYTHON_MARKERS: &[&str] = &["requirements.txt", "pyproject.toml"];

/// Detects the framework, searching runtime and development dependencies
pub fn detect_framework(snapshot: &RepositorySnapshot) -> Option<FrameworkId> {
    let manifest = &snapshot.manifest;

    if manifest.has_any_dependency("react") {
        return Some(first_match(manifest, REACT_FRAMEWORKS).unwrap_or(FrameworkId::React));
    }

    if manifest.has_any_dependency("vue") {
        return Some(if manifest.has_any_dependency("nuxt") {
            FrameworkId::Nuxt
        } else {
            FrameworkId::Vue
        });
    }

    if manifest.has_any_dependency("@angular/core") {
        return Some(FrameworkId::Angular);
    }

    if let Some(framework) = first_match(manifest, BACKEND_FRAMEWORKS) {
        return Some(framework);
    }

    if let Some(tool) = first_match(manifest, BUILD_TOOLS) {
        return Some(tool);
    }

    if PYTHON_MARKERS.iter().any(|marker| snapshot.has_entry(marker)) {
        return Some(FrameworkId::Python);
    }

    None
}

fn first_match(manifest: &Manifest, table: &[(&str, FrameworkId)]) -> Option<FrameworkId> {
    table
        .iter()
        .find(|(dep, _)| manifest.has_any_dependency(dep))
        .map(|(_, framework)| *framework)
}
