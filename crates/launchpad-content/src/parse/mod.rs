//! Structured content parsing for resource files.
//!
//! This module decomposes the raw text of a resource file in two passes:
//!
//! - [`frontmatter`]: leading key/value metadata, delimited or implicit
//! - [`sections`]: top-level `<tag>...</tag>` blocks in the remaining body
//! - [`helpers`]: line splitting, trimming, and quote stripping
//!
//! Parsing never fails. Malformed input degrades to "no frontmatter, no
//! sections, everything is remaining content".
//!
//! # Example
//!
//! ```rust
//! use launchpad_content::parse::parse_content;
//!
//! let parsed = parse_content("name: reviewer\n<role>Review code</role>\nBe kind.");
//!
//! assert_eq!(parsed.frontmatter_value("name"), Some("reviewer"));
//! assert_eq!(parsed.sections[0].tag, "role");
//! assert_eq!(parsed.remaining_content, "Be kind.");
//! ```

pub mod frontmatter;
pub mod helpers;
pub mod sections;

use serde::{Deserialize, Serialize};

pub use frontmatter::{extract_frontmatter, FrontmatterMap, FrontmatterScan};
pub use sections::{extract_sections, Section, SectionScan};

use helpers::{split_lines, trim_text};

/// A resource file decomposed into metadata, sections, and free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedContent {
    /// Frontmatter fields, or `None` when no field was recognized.
    pub frontmatter: Option<FrontmatterMap>,
    /// Tagged sections in order of appearance.
    pub sections: Vec<Section>,
    /// Body without frontmatter and sections, trimmed. Rendered as markdown.
    pub remaining_content: String,
}

impl ParsedContent {
    /// Returns `true` if any frontmatter field was found.
    pub fn has_frontmatter(&self) -> bool {
        self.frontmatter.is_some()
    }

    /// Look up a frontmatter value.
    pub fn frontmatter_value(&self, key: &str) -> Option<&str> {
        self.frontmatter.as_ref()?.get(key).map(String::as_str)
    }

    /// Sections carrying the given tag, in order.
    pub fn sections_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Section> {
        self.sections.iter().filter(move |s| s.tag == tag)
    }

    /// Returns `true` if nothing at all was extracted or left over.
    pub fn is_empty(&self) -> bool {
        self.frontmatter.is_none() && self.sections.is_empty() && self.remaining_content.is_empty()
    }
}

/// Parse the raw text of a resource file.
///
/// Frontmatter is removed first; the rest of the text (trimmed) is then
/// scanned for tagged sections.
pub fn parse_content(content: &str) -> ParsedContent {
    let lines = split_lines(content);
    let scan = extract_frontmatter(&lines);
    let body_start = scan.body_start.min(lines.len());
    let body = lines[body_start..].join("\n");

    let SectionScan {
        sections,
        remaining,
    } = extract_sections(trim_text(&body));

    log::trace!(
        "parsed content: body starts at line {body_start}, {} sections",
        sections.len()
    );

    ParsedContent {
        frontmatter: scan.into_fields(),
        sections,
        remaining_content: remaining,
    }
}
