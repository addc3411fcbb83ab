//! Strongly-typed identifiers for languages, frameworks and project types.
//!
//! Languages come from the hosting API and may be anything, so [`LanguageId`]
//! keeps unknown names in a `Custom(String)` variant. Frameworks and project
//! types are produced by the classifier from fixed rule tables, so their enums
//! are closed.

#[macro_use]
pub mod id_enum_macro;

pub mod framework_id;
pub mod language_id;
pub mod project_type;

pub use framework_id::FrameworkId;
pub use language_id::LanguageId;
pub use project_type::ProjectType;
