//! Markdown heading outline extraction.
//!
//! The query layer only needs a flat heading outline per document (for
//! table-of-contents assembly), not full HTML rendering.

use crate::content::document::Heading;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Extract the flat heading outline of a markdown body.
///
/// Heading text is the concatenation of text and inline-code events inside
/// the heading; slugs are derived from that text.
pub fn extract_headings(markdown: &str) -> Vec<Heading> {
    let mut headings = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new_ext(markdown, Options::empty()) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((heading_depth(level), String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((depth, text)) = current.take() {
                    headings.push(Heading {
                        slug: slug::slugify(&text),
                        text,
                        depth,
                    });
                }
            }
            _ => {}
        }
    }

    headings
}

const fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_headings_depths() {
        let headings = extract_headings("# Top\n\nbody\n\n## Nested\n\n### Deeper\n");
        assert_eq!(headings.len(), 3);
        assert_eq!(headings[0].depth, 1);
        assert_eq!(headings[1].depth, 2);
        assert_eq!(headings[2].depth, 3);
    }

    #[test]
    fn test_extract_headings_text_and_slug() {
        let headings = extract_headings("## Getting Started\n");
        assert_eq!(headings[0].text, "Getting Started");
        assert_eq!(headings[0].slug, "getting-started");
    }

    #[test]
    fn test_extract_headings_inline_code() {
        let headings = extract_headings("## Using `serde`\n");
        assert_eq!(headings[0].text, "Using serde");
        assert_eq!(headings[0].slug, "using-serde");
    }

    #[test]
    fn test_extract_headings_none() {
        assert!(extract_headings("just a paragraph\n\nand another\n").is_empty());
    }

    #[test]
    fn test_extract_headings_ignores_body_text() {
        let headings = extract_headings("## Title\n\nparagraph text here\n");
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "Title");
    }
}
