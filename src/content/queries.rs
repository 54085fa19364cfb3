//! Post filtering, ordering, and relationship queries.
//!
//! Every function recomputes from a fresh store snapshot; absent documents
//! come back as `None` or an empty vec, never as errors. Only store I/O
//! failures propagate, untransformed.
//!
//! # Ordering
//!
//! Top-level listings sort by (date desc, id asc); subpost sibling lists
//! sort by (date asc, order asc, id asc) with a missing `order` treated
//! as 0. The id tie-break keeps results deterministic regardless of the
//! order the store returns documents in.

use crate::content::{
    document::{Collection, Document, Project},
    id::{is_subpost, parent_id},
    store::DocumentStore,
};
use anyhow::Result;
use chrono::Datelike;
use std::cmp::Ordering;

/// Previous/next navigation context for a post.
///
/// `parent` is only populated when the post is a subpost.
#[derive(Debug, Default)]
pub struct AdjacentPosts {
    pub newer: Option<Document>,
    pub older: Option<Document>,
    pub parent: Option<Document>,
}

/// Non-draft posts of a collection, newest first.
///
/// Subposts are excluded unless `include_subposts` is set.
pub fn all_posts(
    store: &impl DocumentStore,
    collection: Collection,
    include_subposts: bool,
) -> Result<Vec<Document>> {
    let mut posts: Vec<_> = store
        .load_collection(collection)?
        .into_iter()
        .filter(|post| !post.meta.draft && (include_subposts || !is_subpost(&post.id)))
        .collect();
    posts.sort_by(compare_newest_first);
    Ok(posts)
}

/// Non-draft subposts of `parent`, in reading order (date asc, order asc).
pub fn subposts_for_parent(
    store: &impl DocumentStore,
    parent: &str,
    collection: Collection,
) -> Result<Vec<Document>> {
    let mut subposts: Vec<_> = store
        .load_collection(collection)?
        .into_iter()
        .filter(|post| !post.meta.draft && parent_id(&post.id) == Some(parent))
        .collect();
    subposts.sort_by(compare_reading_order);
    Ok(subposts)
}

/// Neighbors of `current_id` within its ordering context.
///
/// Subposts navigate their ascending sibling list, so `newer` sits at
/// index + 1. Top-level posts navigate the descending list from
/// [`all_posts`], so `newer` sits at index - 1. An unknown id yields
/// `None` neighbors (keeping `parent` when it resolves).
pub fn adjacent_posts(
    store: &impl DocumentStore,
    current_id: &str,
    collection: Collection,
    include_subposts: bool,
) -> Result<AdjacentPosts> {
    let all = all_posts(store, collection, include_subposts)?;

    if let Some(parent) = parent_id(current_id) {
        let parent_post = all.iter().find(|post| post.id == parent).cloned();
        let siblings = subposts_for_parent(store, parent, collection)?;

        let Some(index) = siblings.iter().position(|post| post.id == current_id) else {
            return Ok(AdjacentPosts {
                newer: None,
                older: None,
                parent: parent_post,
            });
        };

        return Ok(AdjacentPosts {
            newer: siblings.get(index + 1).cloned(),
            older: index.checked_sub(1).and_then(|i| siblings.get(i).cloned()),
            parent: parent_post,
        });
    }

    let top_level: Vec<_> = all.into_iter().filter(|post| !is_subpost(&post.id)).collect();
    let Some(index) = top_level.iter().position(|post| post.id == current_id) else {
        return Ok(AdjacentPosts::default());
    };

    Ok(AdjacentPosts {
        newer: index.checked_sub(1).and_then(|i| top_level.get(i).cloned()),
        older: top_level.get(index + 1).cloned(),
        parent: None,
    })
}

/// Partition posts into year buckets, preserving input order.
///
/// Years appear in order of first appearance, so feeding a newest-first
/// list yields a newest-first archive.
pub fn group_posts_by_year(posts: &[Document]) -> Vec<(String, Vec<Document>)> {
    let mut groups: Vec<(String, Vec<Document>)> = Vec::new();

    for post in posts {
        let year = post.meta.date.year().to_string();
        match groups.iter_mut().find(|(y, _)| *y == year) {
            Some((_, bucket)) => bucket.push(post.clone()),
            None => groups.push((year, vec![post.clone()])),
        }
    }

    groups
}

/// The `count` newest top-level posts of a collection.
pub fn recent_posts(
    store: &impl DocumentStore,
    collection: Collection,
    count: usize,
) -> Result<Vec<Document>> {
    let mut posts = all_posts(store, collection, false)?;
    posts.truncate(count);
    Ok(posts)
}

/// Top-level posts across blog, news, and events carrying `tag`.
pub fn posts_by_tag(store: &impl DocumentStore, tag: &str) -> Result<Vec<Document>> {
    merged_posts(store, |post| post.meta.tags.iter().any(|t| t == tag))
}

/// Top-level posts across blog, news, and events credited to `author_id`.
pub fn posts_by_author(store: &impl DocumentStore, author_id: &str) -> Result<Vec<Document>> {
    merged_posts(store, |post| post.meta.authors.iter().any(|a| a == author_id))
}

/// The post with `post_id`, subposts included; `None` for drafts or unknowns.
pub fn post_by_id(
    store: &impl DocumentStore,
    post_id: &str,
    collection: Collection,
) -> Result<Option<Document>> {
    let posts = all_posts(store, collection, true)?;
    Ok(posts.into_iter().find(|post| post.id == post_id))
}

/// The parent document of a subpost; `None` for top-level ids.
pub fn parent_post(
    store: &impl DocumentStore,
    subpost_id: &str,
    collection: Collection,
) -> Result<Option<Document>> {
    let Some(parent) = parent_id(subpost_id) else {
        return Ok(None);
    };
    let posts = all_posts(store, collection, false)?;
    Ok(posts.into_iter().find(|post| post.id == parent))
}

pub fn subpost_count(
    store: &impl DocumentStore,
    parent: &str,
    collection: Collection,
) -> Result<usize> {
    Ok(subposts_for_parent(store, parent, collection)?.len())
}

pub fn has_subposts(
    store: &impl DocumentStore,
    post_id: &str,
    collection: Collection,
) -> Result<bool> {
    Ok(subpost_count(store, post_id, collection)? > 0)
}

/// Non-draft media entries, newest first.
pub fn all_media(store: &impl DocumentStore) -> Result<Vec<Document>> {
    all_posts(store, Collection::Media, true)
}

/// Projects sorted by start date, newest first; undated projects last.
pub fn all_projects(store: &impl DocumentStore) -> Result<Vec<Project>> {
    let mut projects = store.load_projects()?;
    projects.sort_by(|a, b| {
        b.meta
            .start_date
            .cmp(&a.meta.start_date)
            .then_with(|| a.id.cmp(&b.id))
    });
    Ok(projects)
}

fn merged_posts(
    store: &impl DocumentStore,
    keep: impl Fn(&Document) -> bool,
) -> Result<Vec<Document>> {
    let mut merged = Vec::new();
    for collection in Collection::POSTS {
        merged.extend(
            all_posts(store, collection, false)?
                .into_iter()
                .filter(&keep),
        );
    }
    Ok(merged)
}

fn compare_newest_first(a: &Document, b: &Document) -> Ordering {
    b.meta
        .date
        .cmp(&a.meta.date)
        .then_with(|| a.id.cmp(&b.id))
}

fn compare_reading_order(a: &Document, b: &Document) -> Ordering {
    a.meta
        .date
        .cmp(&b.meta.date)
        .then_with(|| a.meta.order.unwrap_or(0).cmp(&b.meta.order.unwrap_or(0)))
        .then_with(|| a.id.cmp(&b.id))
}
