//! Content relationship engine.
//!
//! Derives ordering, subpost grouping, adjacency navigation, tag and author
//! indexes, reading time, and table-of-contents sections from flat markdown
//! collections. All queries take the document store explicitly and recompute
//! from a fresh snapshot on every call; nothing here caches or mutates.
//!
//! # Collections
//!
//! | Collection | Shape | Notes |
//! |------------|-------|-------|
//! | `blog`, `news`, `event` | post | merged for tags, feed, by-author |
//! | `media` | post | no subposts in practice |
//! | `authors` | profile | resolved by id from post front matter |
//! | `projects` | project | sorted by start date |
//!
//! A document id containing `/` marks a subpost (`parent/sub`); see [`id`].

pub mod authors;
pub mod document;
pub mod fs_store;
pub mod id;
pub mod markdown;
pub mod queries;
pub mod readtime;
pub mod store;
pub mod tags;
pub mod toc;

pub use document::{AuthorProfile, Collection, Document, Heading, PostMeta, Project};
pub use fs_store::FsStore;
pub use store::{DocumentStore, MemoryStore};
