//! Filesystem-backed document store.
//!
//! Reads markdown sources with YAML front matter from a content directory:
//!
//! ```text
//! content/
//! ├── blog/
//! │   ├── hello.md            -> id "hello"
//! │   └── hello/
//! │       └── part-1.md       -> id "hello/part-1" (subpost)
//! ├── news/ ...
//! ├── authors/
//! │   └── alice.md            -> id "alice"
//! └── projects/ ...
//! ```
//!
//! Ids are the relative path without extension, `/`-separated, and are
//! validated against the `parent/sub` convention on load. Each load walks
//! the directory again; freshness over speed, there is no cache.

use crate::content::{
    document::{AuthorMeta, AuthorProfile, Collection, Document, Heading, PostMeta, Project, ProjectMeta},
    id::validate_id,
    markdown,
    store::DocumentStore,
};
use anyhow::{Context, Result, anyhow};
use serde::de::DeserializeOwned;
use std::{
    fs,
    path::{Path, PathBuf},
};
use walkdir::WalkDir;

/// Store rooted at a content directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    content_dir: PathBuf,
}

impl FsStore {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }

    /// Load every markdown source under `<content>/<name>/`.
    ///
    /// A missing directory is an empty collection, not an error.
    fn load_dir<M: DeserializeOwned>(&self, name: &str) -> Result<Vec<(String, M, String)>> {
        let dir = self.content_dir.join(name);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_markdown(entry.path()) {
                continue;
            }

            let path = entry.path();
            let id = doc_id(path, &dir)?;
            validate_id(&id).with_context(|| format!("invalid id from {}", path.display()))?;

            let source = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let (meta, body) = parse_source(&source)
                .with_context(|| format!("parsing {}", path.display()))?;

            entries.push((id, meta, body));
        }

        Ok(entries)
    }
}

impl DocumentStore for FsStore {
    fn load_collection(&self, collection: Collection) -> Result<Vec<Document>> {
        let entries = self.load_dir::<PostMeta>(collection.key())?;
        Ok(entries
            .into_iter()
            .map(|(id, meta, body)| Document { id, meta, body })
            .collect())
    }

    fn load_authors(&self) -> Result<Vec<AuthorProfile>> {
        let entries = self.load_dir::<AuthorMeta>("authors")?;
        Ok(entries
            .into_iter()
            .map(|(id, meta, _)| AuthorProfile { id, meta })
            .collect())
    }

    fn load_projects(&self) -> Result<Vec<Project>> {
        let entries = self.load_dir::<ProjectMeta>("projects")?;
        Ok(entries
            .into_iter()
            .map(|(id, meta, _)| Project { id, meta })
            .collect())
    }

    fn render_headings(&self, doc: &Document) -> Result<Vec<Heading>> {
        Ok(markdown::extract_headings(&doc.body))
    }
}

fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("md" | "mdx")
    )
}

/// Relative path minus extension, joined with `/` regardless of platform.
fn doc_id(path: &Path, base: &Path) -> Result<String> {
    let rel = path.strip_prefix(base)?.with_extension("");
    let segments: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(segments.join("/"))
}

/// Split a source file into parsed YAML front matter and markdown body.
fn parse_source<M: DeserializeOwned>(source: &str) -> Result<(M, String)> {
    let (front, body) =
        split_front_matter(source).ok_or_else(|| anyhow!("missing front matter block"))?;
    let meta: M = serde_yaml::from_str(front).context("invalid front matter")?;
    Ok((meta, body.to_owned()))
}

/// Split `---\n<yaml>\n---\n<body>`. Returns `None` when the leading
/// delimiter is absent or unterminated.
fn split_front_matter(source: &str) -> Option<(&str, &str)> {
    let rest = source.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let end = rest.find("\n---")?;
    let front = &rest[..end];

    let mut body = &rest[end + "\n---".len()..];
    body = body.strip_prefix('\r').unwrap_or(body);
    body = body.strip_prefix('\n').unwrap_or(body);

    Some((front, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn post_source(title: &str, date: &str) -> String {
        format!("---\ntitle: {title}\ndate: {date}\n---\n\nbody text\n")
    }

    #[test]
    fn test_split_front_matter() {
        let (front, body) = split_front_matter("---\ntitle: Hi\n---\n\nbody\n").unwrap();
        assert_eq!(front, "title: Hi");
        assert_eq!(body, "\nbody\n");
    }

    #[test]
    fn test_split_front_matter_missing_or_unterminated() {
        assert!(split_front_matter("no front matter").is_none());
        assert!(split_front_matter("---\ntitle: Hi\n").is_none());
    }

    #[test]
    fn test_load_collection_builds_subpost_ids() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "blog/hello.md", &post_source("Hello", "2024-01-01"));
        write(
            tmp.path(),
            "blog/hello/part-1.md",
            &post_source("Part 1", "2024-01-02"),
        );

        let store = FsStore::new(tmp.path());
        let mut docs = store.load_collection(Collection::Blog).unwrap();
        docs.sort_by(|a, b| a.id.cmp(&b.id));

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].id, "hello");
        assert_eq!(docs[1].id, "hello/part-1");
        assert_eq!(docs[1].meta.title, "Part 1");
        assert!(docs[0].body.contains("body text"));
    }

    #[test]
    fn test_load_collection_missing_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FsStore::new(tmp.path());
        assert!(store.load_collection(Collection::News).unwrap().is_empty());
    }

    #[test]
    fn test_load_collection_skips_non_markdown() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "blog/post.md", &post_source("Post", "2024-01-01"));
        write(tmp.path(), "blog/notes.txt", "not content");

        let store = FsStore::new(tmp.path());
        assert_eq!(store.load_collection(Collection::Blog).unwrap().len(), 1);
    }

    #[test]
    fn test_load_collection_rejects_deep_nesting() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "blog/a/b/c.md",
            &post_source("Too Deep", "2024-01-01"),
        );

        let store = FsStore::new(tmp.path());
        let err = store.load_collection(Collection::Blog).unwrap_err();
        assert!(err.to_string().contains("invalid id"));
    }

    #[test]
    fn test_load_collection_rejects_bad_front_matter() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "blog/broken.md", "---\ntitle: No Date\n---\n\nbody\n");

        let store = FsStore::new(tmp.path());
        assert!(store.load_collection(Collection::Blog).is_err());
    }

    #[test]
    fn test_load_authors() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "authors/alice.md",
            "---\nname: Alice\navatar: /static/alice.png\n---\n",
        );

        let store = FsStore::new(tmp.path());
        let authors = store.load_authors().unwrap();
        assert_eq!(authors.len(), 1);
        assert_eq!(authors[0].id, "alice");
        assert_eq!(authors[0].meta.name, "Alice");
    }

    #[test]
    fn test_load_projects() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "projects/plume.md",
            "---\nname: plume\nstartDate: 2023-03-01\n---\n",
        );

        let store = FsStore::new(tmp.path());
        let projects = store.load_projects().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].meta.name, "plume");
    }

    #[test]
    fn test_mdx_accepted() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "blog/x.mdx", &post_source("X", "2024-01-01"));

        let store = FsStore::new(tmp.path());
        assert_eq!(store.load_collection(Collection::Blog).unwrap().len(), 1);
    }
}
