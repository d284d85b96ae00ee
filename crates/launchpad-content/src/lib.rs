//! Structured content parsing for Launchpad resource files.
//!
//! Agents, commands, skills, and plans are markdown-ish files with optional
//! metadata at the top and XML-like instruction blocks in the body. This
//! crate turns their raw text into a [`ParsedContent`] that a renderer can
//! show as a metadata table, a list of labeled blocks, and free markdown.
//!
//! # Modules
//!
//! - [`parse`]: Frontmatter and section extraction
//!   - [`parse::frontmatter`]: Delimited and implicit key/value blocks
//!   - [`parse::sections`]: `<tag>...</tag>` blocks
//!   - [`parse::helpers`]: Line and field helpers
//! - [`labels`]: Section labels and icons
//! - [`description`]: One-line catalog descriptions
//!
//! Everything here is a pure function of its input text: no I/O, no shared
//! state, and no failure path.
//!
//! # Example
//!
//! ```rust
//! use launchpad_content::{parse_content, section_label};
//!
//! let parsed = parse_content("---\nmodel: opus\n---\n<role>Reviewer</role>\nNotes");
//!
//! assert_eq!(parsed.frontmatter_value("model"), Some("opus"));
//! assert_eq!(section_label(&parsed.sections[0].tag), "Role");
//! assert_eq!(parsed.remaining_content, "Notes");
//! ```

pub mod description;
pub mod labels;
pub mod parse;

// Re-export commonly used types
pub use description::extract_description;
pub use labels::{section_icon, section_label};
pub use parse::{
    extract_frontmatter, extract_sections, parse_content, FrontmatterMap, FrontmatterScan,
    ParsedContent, Section, SectionScan,
};
