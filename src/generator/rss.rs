//! rss feed generation.
//!
//! Merges the blog, news, and event collections into one syndication
//! channel. Each item links under its own collection's URL segment.

use crate::{
    config::SiteConfig,
    content::{
        document::{Collection, Document},
        queries::all_posts,
        store::DocumentStore,
    },
    log,
};
use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveTime, Utc};
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::{fs, path::Path};

// ============================================================================
// Public API
// ============================================================================

/// Build the feed and write it under the configured output path.
///
/// `output` overrides the configured feed path when given. Does nothing
/// when the feed is disabled in config.
pub fn build_feed(
    config: &SiteConfig,
    store: &impl DocumentStore,
    output: Option<&Path>,
) -> Result<()> {
    if !config.build.feed.enable {
        return Ok(());
    }

    let xml = feed_xml(config, store)?;
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => config.build.output.join(&config.build.feed.path),
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &xml)?;

    log!("feed"; "{}", path.display());
    Ok(())
}

// ============================================================================
// Channel Assembly
// ============================================================================

/// Generate the feed xml for all post collections.
fn feed_xml(config: &SiteConfig, store: &impl DocumentStore) -> Result<String> {
    let mut items = Vec::new();
    for collection in Collection::POSTS {
        for post in all_posts(store, collection, false)? {
            items.push(post_to_item(&post, collection, config));
        }
    }

    let channel = ChannelBuilder::default()
        .title(config.base.title.clone())
        .link(config.base.url.clone().unwrap_or_default())
        .description(config.base.description.clone())
        .language(config.base.language.clone())
        .generator("plume".to_string())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("rss validation failed: {e}"))?;
    Ok(channel.to_string())
}

/// Convert a post to an rss item.
fn post_to_item(post: &Document, collection: Collection, config: &SiteConfig) -> rss::Item {
    let link = post_url(config, collection, &post.id);

    ItemBuilder::default()
        .title(post.meta.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(post.meta.description.clone())
        .pub_date(rfc2822_midnight(post))
        .build()
}

/// Absolute URL of a post, segmented by its own collection.
fn post_url(config: &SiteConfig, collection: Collection, id: &str) -> String {
    let base = config.base.url.as_deref().unwrap_or_default();
    format!(
        "{}/{}/{}/",
        base.trim_end_matches('/'),
        collection.key(),
        id
    )
}

/// RFC 2822 publication timestamp at midnight UTC of the post date.
fn rfc2822_midnight(post: &Document) -> String {
    let midnight = post.meta.date.and_time(NaiveTime::MIN);
    DateTime::<Utc>::from_naive_utc_and_offset(midnight, Utc).to_rfc2822()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::testutil::post;
    use crate::content::MemoryStore;

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.base.title = "Example".to_owned();
        config.base.description = "An example site".to_owned();
        config.base.url = Some("https://example.com".to_owned());
        config
    }

    fn make_store() -> MemoryStore {
        MemoryStore::new()
            .with_posts(Collection::Blog, vec![post("hello", "2024-01-15")])
            .with_posts(Collection::News, vec![post("launch", "2024-02-01")])
            .with_posts(Collection::Event, vec![post("meetup", "2024-03-01")])
    }

    #[test]
    fn test_post_url_uses_own_collection_segment() {
        let config = make_config();
        assert_eq!(
            post_url(&config, Collection::News, "launch"),
            "https://example.com/news/launch/"
        );
        assert_eq!(
            post_url(&config, Collection::Blog, "hello"),
            "https://example.com/blog/hello/"
        );
    }

    #[test]
    fn test_post_url_trims_trailing_slash() {
        let mut config = make_config();
        config.base.url = Some("https://example.com/".to_owned());
        assert_eq!(
            post_url(&config, Collection::Event, "meetup"),
            "https://example.com/event/meetup/"
        );
    }

    #[test]
    fn test_post_to_item_fields() {
        let config = make_config();
        let doc = post("hello", "2024-01-15");

        let item = post_to_item(&doc, Collection::Blog, &config);
        assert_eq!(item.title(), Some("Title of hello"));
        assert_eq!(item.link(), Some("https://example.com/blog/hello/"));
        assert_eq!(item.description(), Some("About hello"));
        assert!(item.pub_date().unwrap().contains("Jan 2024"));
    }

    #[test]
    fn test_feed_xml_merges_all_post_collections() {
        let xml = feed_xml(&make_config(), &make_store()).unwrap();
        assert!(xml.contains("https://example.com/blog/hello/"));
        assert!(xml.contains("https://example.com/news/launch/"));
        assert!(xml.contains("https://example.com/event/meetup/"));
    }

    #[test]
    fn test_feed_xml_channel_metadata() {
        let xml = feed_xml(&make_config(), &make_store()).unwrap();
        assert!(xml.contains("<title>Example</title>"));
        assert!(xml.contains("<description>An example site</description>"));
    }

    #[test]
    fn test_build_feed_disabled_writes_nothing() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut config = make_config();
        config.build.feed.enable = false;
        config.build.output = tmp.path().to_path_buf();

        build_feed(&config, &make_store(), None).unwrap();
        assert!(!tmp.path().join("feed.xml").exists());
    }

    #[test]
    fn test_build_feed_writes_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut config = make_config();
        config.build.output = tmp.path().to_path_buf();

        build_feed(&config, &make_store(), None).unwrap();
        let written = fs::read_to_string(tmp.path().join("feed.xml")).unwrap();
        assert!(written.contains("<rss"));
    }
}
