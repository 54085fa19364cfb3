//! Document store interface and the in-memory implementation.
//!
//! Every query takes the store as an explicit parameter, so the engine has
//! no ambient collection state and tests substitute [`MemoryStore`]
//! fixtures for the filesystem.

use crate::content::{
    document::{AuthorProfile, Collection, Document, Heading, Project},
    markdown,
};
use anyhow::Result;
use std::collections::HashMap;

/// Snapshot access to the content collections.
///
/// `load_collection` returns a complete, unordered snapshot; callers own
/// ordering and filtering. Load and render failures propagate untouched;
/// "not found" is never an error here, only an empty snapshot.
pub trait DocumentStore {
    /// All documents of a post-shaped collection.
    fn load_collection(&self, collection: Collection) -> Result<Vec<Document>>;

    /// All author profiles.
    fn load_authors(&self) -> Result<Vec<AuthorProfile>>;

    /// All project entries.
    fn load_projects(&self) -> Result<Vec<Project>>;

    /// Flat heading outline of a document's body.
    fn render_headings(&self, doc: &Document) -> Result<Vec<Heading>>;
}

/// In-memory store over pre-built documents.
///
/// Used by tests and by callers that already hold their content in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: HashMap<Collection, Vec<Document>>,
    authors: Vec<AuthorProfile>,
    projects: Vec<Project>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add documents to a collection, keeping any already present.
    pub fn with_posts(mut self, collection: Collection, docs: Vec<Document>) -> Self {
        self.collections.entry(collection).or_default().extend(docs);
        self
    }

    pub fn with_authors(mut self, authors: Vec<AuthorProfile>) -> Self {
        self.authors.extend(authors);
        self
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects.extend(projects);
        self
    }
}

impl DocumentStore for MemoryStore {
    fn load_collection(&self, collection: Collection) -> Result<Vec<Document>> {
        Ok(self.collections.get(&collection).cloned().unwrap_or_default())
    }

    fn load_authors(&self) -> Result<Vec<AuthorProfile>> {
        Ok(self.authors.clone())
    }

    fn load_projects(&self) -> Result<Vec<Project>> {
        Ok(self.projects.clone())
    }

    fn render_headings(&self, doc: &Document) -> Result<Vec<Heading>> {
        Ok(markdown::extract_headings(&doc.body))
    }
}
