//! Tag occurrence index.
//!
//! Rebuilt from scratch on every query; there is no persisted index.

use crate::content::{document::Collection, queries::all_posts, store::DocumentStore};
use anyhow::Result;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// A tag with its number of occurrences across the scanned collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Count tag occurrences over the non-draft posts (subposts included) of
/// the given collections.
pub fn tag_counts(
    store: &impl DocumentStore,
    collections: &[Collection],
) -> Result<FxHashMap<String, usize>> {
    let mut counts = FxHashMap::default();

    for &collection in collections {
        for post in all_posts(store, collection, true)? {
            for tag in &post.meta.tags {
                *counts.entry(tag.clone()).or_insert(0) += 1;
            }
        }
    }

    Ok(counts)
}

/// Tag counts sorted by count descending, ties by tag name ascending.
pub fn sorted_tags(
    store: &impl DocumentStore,
    collections: &[Collection],
) -> Result<Vec<TagCount>> {
    let mut tags: Vec<TagCount> = tag_counts(store, collections)?
        .into_iter()
        .map(|(tag, count)| TagCount { tag, count })
        .collect();
    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    Ok(tags)
}
