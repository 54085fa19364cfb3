//! The `parent/sub` post id convention.
//!
//! A document id contains a `/` separator iff the document is a subpost of
//! the top-level document named by the segment before the separator. Ids are
//! validated once at the store boundary; the query layer can then treat the
//! convention as trustworthy.

use thiserror::Error;

/// Separator between the parent and sub segment of a subpost id.
pub const SEPARATOR: char = '/';

/// Errors for ids that violate the `parent/sub` convention.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdError {
    #[error("empty post id")]
    Empty,

    #[error("post id `{0}` nests more than one level deep")]
    TooDeep(String),

    #[error("post id `{0}` contains an empty segment")]
    EmptySegment(String),
}

/// Whether `id` names a subpost.
pub fn is_subpost(id: &str) -> bool {
    id.contains(SEPARATOR)
}

/// Parent segment of a subpost id, `None` for top-level ids.
pub fn parent_id(id: &str) -> Option<&str> {
    id.split_once(SEPARATOR).map(|(parent, _)| parent)
}

/// Validate an id against the `parent/sub` convention.
///
/// Accepts `post` and `post/part`; rejects empty ids, ids with empty
/// segments (`/post`, `post/`), and deeper nesting (`a/b/c`). Called when
/// documents enter the system, so malformed ids surface as load errors
/// instead of silently-wrong parent lookups.
pub fn validate_id(id: &str) -> Result<(), IdError> {
    if id.is_empty() {
        return Err(IdError::Empty);
    }

    let segments: Vec<&str> = id.split(SEPARATOR).collect();
    if segments.len() > 2 {
        return Err(IdError::TooDeep(id.to_owned()));
    }
    if segments.iter().any(|s| s.is_empty()) {
        return Err(IdError::EmptySegment(id.to_owned()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_subpost() {
        assert!(!is_subpost("hello-world"));
        assert!(is_subpost("hello-world/part-1"));
    }

    #[test]
    fn test_is_subpost_matches_separator_presence() {
        for id in ["a", "a/b", "deeply-dashed-id", "x/y"] {
            assert_eq!(is_subpost(id), id.contains(SEPARATOR));
        }
    }

    #[test]
    fn test_parent_id_of_subpost() {
        assert_eq!(parent_id("hello-world/part-1"), Some("hello-world"));
    }

    #[test]
    fn test_parent_id_of_top_level() {
        assert_eq!(parent_id("hello-world"), None);
    }

    #[test]
    fn test_validate_id_accepts_valid() {
        assert_eq!(validate_id("post"), Ok(()));
        assert_eq!(validate_id("post/part"), Ok(()));
    }

    #[test]
    fn test_validate_id_rejects_empty() {
        assert_eq!(validate_id(""), Err(IdError::Empty));
    }

    #[test]
    fn test_validate_id_rejects_deep_nesting() {
        assert_eq!(
            validate_id("a/b/c"),
            Err(IdError::TooDeep("a/b/c".to_owned()))
        );
    }

    #[test]
    fn test_validate_id_rejects_empty_segments() {
        assert_eq!(
            validate_id("/post"),
            Err(IdError::EmptySegment("/post".to_owned()))
        );
        assert_eq!(
            validate_id("post/"),
            Err(IdError::EmptySegment("post/".to_owned()))
        );
    }
}
