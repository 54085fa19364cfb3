//! Table-of-contents assembly.
//!
//! A post's TOC spans its whole subpost family: one "Overview" section for
//! the parent document, then one section per subpost in reading order.
//! Asking for any member of the family yields the same sections.

use crate::content::{
    document::Collection,
    id::parent_id,
    queries::{post_by_id, subposts_for_parent},
    store::DocumentStore,
};
use anyhow::Result;

/// Which document a TOC section came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Parent,
    Subpost,
}

/// A heading outline entry within a TOC section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocHeading {
    pub slug: String,
    pub text: String,
    pub depth: u8,
    /// Set on the first heading of a subpost section, which doubles as the
    /// subpost's title anchor in page navigation.
    pub is_subpost_title: bool,
}

/// A derived, per-document grouping of heading outline entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocSection {
    pub kind: SectionKind,
    pub title: String,
    pub headings: Vec<TocHeading>,
    /// Id of the subpost this section belongs to; `None` for the parent.
    pub subpost_id: Option<String>,
}

/// Build the TOC sections for `post_id`.
///
/// Sections with no headings are dropped. An unknown post, or a subpost
/// whose parent is absent, yields no sections.
pub fn toc_sections(
    store: &impl DocumentStore,
    post_id: &str,
    collection: Collection,
) -> Result<Vec<TocSection>> {
    let Some(post) = post_by_id(store, post_id, collection)? else {
        return Ok(Vec::new());
    };

    let (family_root, parent) = match parent_id(post_id) {
        Some(pid) => (pid.to_owned(), post_by_id(store, pid, collection)?),
        None => (post_id.to_owned(), Some(post)),
    };
    let Some(parent) = parent else {
        return Ok(Vec::new());
    };

    let mut sections = Vec::new();

    let parent_headings = store.render_headings(&parent)?;
    if !parent_headings.is_empty() {
        sections.push(TocSection {
            kind: SectionKind::Parent,
            title: "Overview".to_owned(),
            headings: parent_headings
                .into_iter()
                .map(|h| TocHeading {
                    slug: h.slug,
                    text: h.text,
                    depth: h.depth,
                    is_subpost_title: false,
                })
                .collect(),
            subpost_id: None,
        });
    }

    for subpost in subposts_for_parent(store, &family_root, collection)? {
        let headings = store.render_headings(&subpost)?;
        if headings.is_empty() {
            continue;
        }
        sections.push(TocSection {
            kind: SectionKind::Subpost,
            title: subpost.meta.title.clone(),
            headings: headings
                .into_iter()
                .enumerate()
                .map(|(i, h)| TocHeading {
                    slug: h.slug,
                    text: h.text,
                    depth: h.depth,
                    is_subpost_title: i == 0,
                })
                .collect(),
            subpost_id: Some(subpost.id),
        });
    }

    Ok(sections)
}
