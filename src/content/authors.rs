//! Author id resolution.
//!
//! Posts reference authors by id; unregistered ids are tolerated and fall
//! back to a placeholder identity rather than failing the page.

use crate::content::{document::AuthorProfile, store::DocumentStore};
use anyhow::Result;
use rustc_hash::FxHashMap;

/// Avatar used for author ids with no profile in the authors collection.
pub const PLACEHOLDER_AVATAR: &str = "/static/logo.svg";

/// An author id resolved against the authors collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAuthor {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub is_registered: bool,
}

/// All author profiles, unordered.
pub fn all_authors(store: &impl DocumentStore) -> Result<Vec<AuthorProfile>> {
    store.load_authors()
}

/// Resolve author ids, preserving order and duplicates.
///
/// Unregistered ids keep the id as the display name. Empty input skips
/// the store lookup entirely.
pub fn parse_authors(store: &impl DocumentStore, ids: &[String]) -> Result<Vec<ResolvedAuthor>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let profiles = store.load_authors()?;
    let by_id: FxHashMap<&str, &AuthorProfile> =
        profiles.iter().map(|a| (a.id.as_str(), a)).collect();

    Ok(ids
        .iter()
        .map(|id| match by_id.get(id.as_str()) {
            Some(profile) => ResolvedAuthor {
                id: id.clone(),
                name: profile.meta.name.clone(),
                avatar: profile
                    .meta
                    .avatar
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER_AVATAR.to_owned()),
                is_registered: true,
            },
            None => ResolvedAuthor {
                id: id.clone(),
                name: id.clone(),
                avatar: PLACEHOLDER_AVATAR.to_owned(),
                is_registered: false,
            },
        })
        .collect())
}
