//! shields.io badge row

use super::ReadmeContext;
use crate::stack::{FrameworkId, LanguageId};

fn language_badge(language: &LanguageId) -> String {
    let badge = match language {
        LanguageId::JavaScript => "![JavaScript](https://img.shields.io/badge/javascript-%23323330.svg?style=for-the-badge&logo=javascript&logoColor=%23F7DF1E)",
        LanguageId::TypeScript => "![TypeScript](https://img.shields.io/badge/typescript-%23007ACC.svg?style=for-the-badge&logo=typescript&logoColor=white)",
        LanguageId::Python => "![Python](https://img.shields.io/badge/python-3670A0?style=for-the-badge&logo=python&logoColor=ffdd54)",
        LanguageId::Java => "![Java](https://img.shields.io/badge/java-%23ED8B00.svg?style=for-the-badge&logo=java&logoColor=white)",
        LanguageId::Cpp => "![C++](https://img.shields.io/badge/c++-%2300599C.svg?style=for-the-badge&logo=c%2B%2B&logoColor=white)",
        LanguageId::Go => "![Go](https://img.shields.io/badge/go-%2300ADD8.svg?style=for-the-badge&logo=go&logoColor=white)",
        LanguageId::Rust => "![Rust](https://img.shields.io/badge/rust-%23000000.svg?style=for-the-badge&logo=rust&logoColor=white)",
        LanguageId::Php => "![PHP](https://img.shields.io/badge/php-%23777BB4.svg?style=for-the-badge&logo=php&logoColor=white)",
        LanguageId::Ruby => "![Ruby](https://img.shields.io/badge/ruby-%23CC342D.svg?style=for-the-badge&logo=ruby&logoColor=white)",
        LanguageId::Swift => "![Swift](https://img.shields.io/badge/swift-F54A2A?style=for-the-badge&logo=swift&logoColor=white)",
        LanguageId::Custom(name) => {
            return format!(
                "![{}](https://img.shields.io/badge/{}-blue?style=for-the-badge)",
                name,
                escape_badge_text(name)
            )
        }
    };
    badge.to_string()
}

/// Only a handful of frameworks have a dedicated badge
fn framework_badge(framework: FrameworkId) -> Option<&'static str> {
    match framework {
        FrameworkId::React => Some("![React](https://img.shields.io/badge/react-%2320232a.svg?style=for-the-badge&logo=react&logoColor=%2361DAFB)"),
        FrameworkId::NextJs => Some("![Next JS](https://img.shields.io/badge/Next-black?style=for-the-badge&logo=next.js&logoColor=white)"),
        FrameworkId::Vue => Some("![Vue.js](https://img.shields.io/badge/vuejs-%2335495e.svg?style=for-the-badge&logo=vuedotjs&logoColor=%234FC08D)"),
        FrameworkId::Angular => Some("![Angular](https://img.shields.io/badge/angular-%23DD0031.svg?style=for-the-badge&logo=angular&logoColor=white)"),
        FrameworkId::Express => Some("![Express.js](https://img.shields.io/badge/express.js-%23404d59.svg?style=for-the-badge&logo=express&logoColor=%2361DAFB)"),
        FrameworkId::Vite => Some("![Vite](https://img.shields.io/badge/vite-%23646CFF.svg?style=for-the-badge&logo=vite&logoColor=white)"),
        _ => None,
    }
}

/// Escapes text for a static shields.io badge path segment, where a single
/// dash separates label from message
pub(crate) fn escape_badge_text(text: &str) -> String {
    text.replace('-', "--")
        .replace('_', "__")
        .replace(' ', "%20")
}

pub(super) fn render(ctx: &ReadmeContext<'_>) -> String {
    let snapshot = ctx.snapshot;
    let mut badges = Vec::new();

    if let Some(language) = &snapshot.language {
        badges.push(language_badge(language));
    }

    if let Some(badge) = ctx.classification.framework.and_then(framework_badge) {
        badges.push(badge.to_string());
    }

    if let Some(license) = &snapshot.license {
        badges.push(format!(
            "![License](https://img.shields.io/badge/license-{}-blue.svg?style=for-the-badge)",
            escape_badge_text(license.badge_label())
        ));
    }

    badges.push(format!(
        "![GitHub stars](https://img.shields.io/github/stars/{}/{}?style=for-the-badge)",
        snapshot.owner.login, snapshot.name
    ));
    badges.push(format!(
        "![GitHub forks](https://img.shields.io/github/forks/{}/{}?style=for-the-badge)",
        snapshot.owner.login, snapshot.name
    ));

    badges.join(" ")
}
