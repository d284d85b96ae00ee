//! Frontmatter detection for resource files.
//!
//! Resource files carry metadata in one of two shapes. Some use a delimited
//! block:
//!
//! ```markdown
//! ---
//! name: code-reviewer
//! model: opus
//! ---
//!
//! Body text.
//! ```
//!
//! Others open directly with a run of `key: value` lines that ends at the
//! first blank line or tag:
//!
//! ```markdown
//! name: code-reviewer
//! description: Reviews diffs
//! <role>
//! You review code.
//! </role>
//! ```
//!
//! [`extract_frontmatter`] tries the delimited shape when the first line is
//! `---` and the implicit shape otherwise. Both shapes are exposed as their own
//! functions. Values are flat strings; nothing here interprets YAML.
//!
//! # Usage
//!
//! ```rust
//! use launchpad_content::parse::frontmatter::extract_frontmatter;
//! use launchpad_content::parse::helpers::split_lines;
//!
//! let lines = split_lines("---\ntitle: Test\n---\nBody");
//! let scan = extract_frontmatter(&lines);
//!
//! assert_eq!(scan.get("title"), Some("Test"));
//! assert_eq!(scan.body_start, 3);
//! ```

use std::collections::BTreeMap;

use super::helpers::{field_colon, split_field, trim_text};

/// Line that opens and closes a delimited frontmatter block.
pub const DELIMITER: &str = "---";

/// Flat frontmatter key/value pairs.
pub type FrontmatterMap = BTreeMap<String, String>;

/// Result of scanning the top of a document for frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontmatterScan {
    /// Recognized fields; may be empty.
    pub fields: FrontmatterMap,
    /// Index of the first body line.
    pub body_start: usize,
}

impl FrontmatterScan {
    /// Look up a field value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The fields, or `None` when there are none.
    pub fn into_fields(self) -> Option<FrontmatterMap> {
        if self.fields.is_empty() {
            None
        } else {
            Some(self.fields)
        }
    }
}

/// Scan the leading lines of a document for frontmatter.
///
/// When the first line is `---`, only the delimited shape is tried; an
/// unclosed block yields no fields and a body starting at line 0. Otherwise
/// the implicit shape is scanned.
pub fn extract_frontmatter(lines: &[&str]) -> FrontmatterScan {
    if opens_delimited_block(lines) {
        delimited_block(lines).unwrap_or_else(|| {
            log::debug!("frontmatter opening delimiter found but no closing delimiter");
            FrontmatterScan::default()
        })
    } else {
        implicit_block(lines)
    }
}

fn opens_delimited_block(lines: &[&str]) -> bool {
    lines.first().is_some_and(|line| is_delimiter(line))
}

fn is_delimiter(line: &str) -> bool {
    trim_text(line) == DELIMITER
}

/// Parse a `---` delimited block at the top of `lines`.
///
/// Returns `None` when the first line is not `---` or no closing `---`
/// follows it. Lines inside the block without a usable `key: value` pair are
/// ignored, and the body starts right after the closing delimiter.
pub fn delimited_block(lines: &[&str]) -> Option<FrontmatterScan> {
    if !opens_delimited_block(lines) {
        return None;
    }
    let end = lines
        .iter()
        .skip(1)
        .position(|line| is_delimiter(line))
        .map(|pos| pos + 1)?;

    Some(FrontmatterScan {
        fields: collect_fields(&lines[1..end]),
        body_start: end + 1,
    })
}

/// Parse an undelimited run of `key: value` lines at the top of `lines`.
///
/// The run ends at the first line that is blank, starts with `<` or `-`, or
/// has no colon after its first character. That line belongs to the body.
/// A line inside the run whose key or value is empty is consumed without
/// producing a field.
pub fn implicit_block(lines: &[&str]) -> FrontmatterScan {
    let consumed = lines
        .iter()
        .take_while(|line| is_implicit_field_line(line))
        .count();

    FrontmatterScan {
        fields: collect_fields(&lines[..consumed]),
        body_start: consumed,
    }
}

fn is_implicit_field_line(line: &str) -> bool {
    let trimmed = trim_text(line);
    !trimmed.is_empty()
        && !trimmed.starts_with('<')
        && !trimmed.starts_with('-')
        && field_colon(line).is_some()
}

fn collect_fields(lines: &[&str]) -> FrontmatterMap {
    lines
        .iter()
        .filter_map(|line| split_field(line))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
