//! Reading time estimation.
//!
//! Word counts come from a tag-stripping pass over the body, so the same
//! function handles raw markdown and rendered HTML alike.

use crate::content::{
    document::Collection,
    id::is_subpost,
    queries::{post_by_id, subposts_for_parent},
    store::DocumentStore,
};
use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;

/// Words per minute assumed by [`reading_time`].
const WORDS_PER_MINUTE: f64 = 200.0;

static RE_MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// Count whitespace-separated words, ignoring `<...>` markup tags.
pub fn word_count_from_html(html: &str) -> usize {
    RE_MARKUP_TAG
        .replace_all(html, "")
        .split_whitespace()
        .count()
}

/// Format a word count as a reading-time label, minimum one minute.
pub fn reading_time(word_count: usize) -> String {
    #[allow(clippy::cast_precision_loss, clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let minutes = ((word_count as f64 / WORDS_PER_MINUTE).round() as usize).max(1);
    format!("{minutes} min read")
}

/// Reading time of exactly the named post.
pub fn post_reading_time(
    store: &impl DocumentStore,
    post_id: &str,
    collection: Collection,
) -> Result<String> {
    let Some(post) = post_by_id(store, post_id, collection)? else {
        return Ok(reading_time(0));
    };
    Ok(reading_time(word_count_from_html(&post.body)))
}

/// Reading time of a post plus all of its subposts.
///
/// Subposts only contribute when the named post is itself top-level.
pub fn combined_reading_time(
    store: &impl DocumentStore,
    post_id: &str,
    collection: Collection,
) -> Result<String> {
    let Some(post) = post_by_id(store, post_id, collection)? else {
        return Ok(reading_time(0));
    };

    let mut words = word_count_from_html(&post.body);
    if !is_subpost(post_id) {
        for subpost in subposts_for_parent(store, post_id, collection)? {
            words += word_count_from_html(&subpost.body);
        }
    }

    Ok(reading_time(words))
}
