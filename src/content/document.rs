//! Document model shared by all content collections.
//!
//! These types mirror the front matter schema of the markdown sources.
//! Everything here is a read-only projection; queries clone what they
//! return and never write back to the store.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// A post-shaped collection.
///
/// Authors and projects carry different schemas and are loaded through
/// dedicated store methods instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Collection {
    Blog,
    News,
    Event,
    Media,
}

impl Collection {
    /// Collections merged for cross-collection queries and the feed.
    pub const POSTS: [Self; 3] = [Self::Blog, Self::News, Self::Event];

    /// Directory and URL segment for this collection.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::News => "news",
            Self::Event => "event",
            Self::Media => "media",
        }
    }
}

/// A single content item within a collection.
#[derive(Debug, Clone)]
pub struct Document {
    /// Id unique within the collection; contains `/` iff this is a subpost.
    pub id: String,

    /// Parsed front matter.
    pub meta: PostMeta,

    /// Raw markdown body (front matter stripped).
    pub body: String,
}

/// Front matter fields common to the blog, news, event, and media schemas.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMeta {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Publication date. Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
    #[serde(deserialize_with = "de_date")]
    pub date: NaiveDate,

    /// Tie-break for subposts sharing a date. Missing means 0.
    #[serde(default)]
    pub order: Option<i32>,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Author ids resolved against the authors collection.
    #[serde(default)]
    pub authors: Vec<String>,

    #[serde(default)]
    pub draft: bool,
}

/// An author entry, referenced by id from a post's `authors` list.
#[derive(Debug, Clone)]
pub struct AuthorProfile {
    pub id: String,
    pub meta: AuthorMeta,
}

/// Front matter schema for the authors collection.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorMeta {
    pub name: String,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub website: Option<String>,

    #[serde(default)]
    pub github: Option<String>,

    #[serde(default)]
    pub mail: Option<String>,
}

/// A portfolio project entry.
#[derive(Debug, Clone)]
pub struct Project {
    pub id: String,
    pub meta: ProjectMeta,
}

/// Front matter schema for the projects collection.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectMeta {
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub link: Option<String>,

    #[serde(default, rename = "startDate", deserialize_with = "de_opt_date")]
    pub start_date: Option<NaiveDate>,

    #[serde(default, rename = "endDate", deserialize_with = "de_opt_date")]
    pub end_date: Option<NaiveDate>,
}

/// One entry of a rendered heading outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub slug: String,
    pub text: String,
    pub depth: u8,
}

/// Parse a front matter date, with or without a time component.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.date_naive())
}

fn de_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: `{raw}`")))
}

fn de_opt_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => parse_date(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date: `{raw}`"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_keys() {
        assert_eq!(Collection::Blog.key(), "blog");
        assert_eq!(Collection::News.key(), "news");
        assert_eq!(Collection::Event.key(), "event");
        assert_eq!(Collection::Media.key(), "media");
    }

    #[test]
    fn test_post_collections_exclude_media() {
        assert!(!Collection::POSTS.contains(&Collection::Media));
        assert_eq!(Collection::POSTS.len(), 3);
    }

    #[test]
    fn test_parse_date_plain() {
        assert_eq!(
            parse_date("2024-06-15"),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
    }

    #[test]
    fn test_parse_date_rfc3339() {
        assert_eq!(
            parse_date("2024-06-15T10:30:00Z"),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
    }

    #[test]
    fn test_parse_date_invalid() {
        assert_eq!(parse_date("June 15th"), None);
        assert_eq!(parse_date("2024-13-01"), None);
    }

    #[test]
    fn test_post_meta_from_yaml_defaults() {
        let meta: PostMeta = serde_yaml::from_str(
            r#"
            title: Hello
            date: 2024-01-02
            "#,
        )
        .unwrap();

        assert_eq!(meta.title, "Hello");
        assert_eq!(meta.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(meta.order, None);
        assert!(meta.tags.is_empty());
        assert!(meta.authors.is_empty());
        assert!(!meta.draft);
    }

    #[test]
    fn test_post_meta_full() {
        let meta: PostMeta = serde_yaml::from_str(
            r#"
            title: Hello
            description: a post
            date: 2024-01-02T08:00:00Z
            order: 3
            tags: [rust, web]
            authors: [alice]
            draft: true
            "#,
        )
        .unwrap();

        assert_eq!(meta.description.as_deref(), Some("a post"));
        assert_eq!(meta.order, Some(3));
        assert_eq!(meta.tags, vec!["rust", "web"]);
        assert_eq!(meta.authors, vec!["alice"]);
        assert!(meta.draft);
    }

    #[test]
    fn test_project_meta_camel_case_dates() {
        let meta: ProjectMeta = serde_yaml::from_str(
            r#"
            name: plume
            startDate: 2023-03-01
            "#,
        )
        .unwrap();

        assert_eq!(meta.name, "plume");
        assert_eq!(
            meta.start_date,
            NaiveDate::from_ymd_opt(2023, 3, 1)
        );
        assert_eq!(meta.end_date, None);
    }
}
