//! In-memory registry of generated documents
//!
//! The registry lives for one session and is owned by whoever drives
//! generation. Records are kept newest first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A README produced during this session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub language: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when recording a new document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub name: String,
    pub description: String,
    pub language: String,
    pub content: String,
}

/// Partial update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Default)]
pub struct SessionRegistry {
    documents: Vec<GeneratedDocument>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents ordered newest first
    pub fn list(&self) -> &[GeneratedDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Records a document with a fresh id and the current time
    pub fn add(&mut self, new: NewDocument) -> GeneratedDocument {
        let document = GeneratedDocument {
            id: Uuid::new_v4(),
            name: new.name,
            description: new.description,
            language: new.language,
            content: new.content,
            created_at: Utc::now(),
        };
        self.documents.insert(0, document.clone());
        document
    }

    pub fn get(&self, id: Uuid) -> Option<&GeneratedDocument> {
        self.documents.iter().find(|d| d.id == id)
    }

    /// Resolves a full id or an unambiguous id prefix
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&GeneratedDocument> {
        let prefix = prefix.to_ascii_lowercase();
        if prefix.is_empty() {
            return None;
        }
        let mut matches = self
            .documents
            .iter()
            .filter(|d| d.id.to_string().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(doc), None) => Some(doc),
            _ => None,
        }
    }

    /// Removes a document. Unknown ids leave the registry unchanged.
    pub fn remove(&mut self, id: Uuid) -> Option<GeneratedDocument> {
        let index = self.documents.iter().position(|d| d.id == id)?;
        Some(self.documents.remove(index))
    }

    /// Applies a partial update in place; `id` and `created_at` never change
    pub fn update(&mut self, id: Uuid, update: DocumentUpdate) -> Option<&GeneratedDocument> {
        let document = self.documents.iter_mut().find(|d| d.id == id)?;

        if let Some(name) = update.name {
            document.name = name;
        }
        if let Some(description) = update.description {
            document.description = description;
        }
        if let Some(language) = update.language {
            document.language = language;
        }
        if let Some(content) = update.content {
            document.content = content;
        }

        Some(&*document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_doc(name: &str) -> NewDocument {
        NewDocument {
            name: name.to_string(),
            description: "desc".to_string(),
            language: "Rust".to_string(),
            content: format!("# {}\n", name),
        }
    }

    #[test]
    fn test_add_orders_newest_first() {
        let mut registry = SessionRegistry::new();
        let first = registry.add(new_doc("first"));
        let second = registry.add(new_doc("second"));

        let names: Vec<&str> = registry.list().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["second", "first"]);
        assert_ne!(first.id, second.id);
        assert!(second.created_at >= first.created_at);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut registry = SessionRegistry::new();
        registry.add(new_doc("a"));
        registry.add(new_doc("b"));
        let before = registry.list().to_vec();

        assert!(registry.remove(Uuid::new_v4()).is_none());
        assert_eq!(registry.list(), before.as_slice());
    }

    #[test]
    fn test_remove_existing() {
        let mut registry = SessionRegistry::new();
        let doc = registry.add(new_doc("a"));
        let removed = registry.remove(doc.id).unwrap();
        assert_eq!(removed.name, "a");
        assert!(registry.is_empty());
    }

    #[test]
    fn test_update_merges_partial_fields() {
        let mut registry = SessionRegistry::new();
        let doc = registry.add(new_doc("a"));

        let updated = registry
            .update(
                doc.id,
                DocumentUpdate {
                    name: Some("renamed".to_string()),
                    ..Default::default()
                },
            )
            .unwrap()
            .clone();

        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.description, doc.description);
        assert_eq!(updated.content, doc.content);
        assert_eq!(updated.id, doc.id);
        assert_eq!(updated.created_at, doc.created_at);
    }

    #[test]
    fn test_update_unknown_id() {
        let mut registry = SessionRegistry::new();
        assert!(registry
            .update(Uuid::new_v4(), DocumentUpdate::default())
            .is_none());
    }

    #[test]
    fn test_find_by_prefix() {
        let mut registry = SessionRegistry::new();
        let doc = registry.add(new_doc("a"));
        let full = doc.id.to_string();

        assert_eq!(registry.find_by_prefix(&full).map(|d| d.id), Some(doc.id));
        assert_eq!(registry.find_by_prefix(&full[..8]).map(|d| d.id), Some(doc.id));
        assert_eq!(
            registry.find_by_prefix(&full[..8].to_uppercase()).map(|d| d.id),
            Some(doc.id)
        );
        assert!(registry.find_by_prefix("").is_none());
        assert!(registry.find_by_prefix("zzzz").is_none());
    }
}
