//! Tag-delimited section extraction.
//!
//! Agent and command files often group instructions into XML-like blocks:
//!
//! ```text
//! <role>
//! You are a careful reviewer.
//! </role>
//! <workflow>
//! 1. Read the diff.
//! </workflow>
//! ```
//!
//! [`extract_sections`] pulls every top-level `<name>...</name>` block out of
//! a body, in order of appearance, and returns the body with those blocks
//! removed. A block closes at the first `</name>` with the same name, so
//! nested blocks of the same name are not supported: `<a><a>x</a></a>` yields
//! one section with content `<a>x` and leaves a stray `</a>` behind. Tags
//! without a matching close are left untouched.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::helpers::trim_text;

static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Za-z0-9_]+)>").expect("Invalid open tag regex"));

/// A named, tag-delimited region of a resource body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Tag name, e.g. `role`.
    pub tag: String,
    /// Trimmed text between the open and close tags. May be empty.
    pub content: String,
}

impl Section {
    /// Create a section.
    pub fn new(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            content: content.into(),
        }
    }
}

/// Result of scanning a body for sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionScan {
    /// Sections in order of appearance.
    pub sections: Vec<Section>,
    /// Body with every matched block removed, trimmed.
    pub remaining: String,
}

/// Extract all top-level tagged sections from `body`.
///
/// ```rust
/// use launchpad_content::parse::sections::{extract_sections, Section};
///
/// let scan = extract_sections("<a>1</a>text<b>2</b>");
/// assert_eq!(scan.sections, vec![Section::new("a", "1"), Section::new("b", "2")]);
/// assert_eq!(scan.remaining, "text");
/// ```
pub fn extract_sections(body: &str) -> SectionScan {
    let mut sections = Vec::new();
    let mut remaining = String::with_capacity(body.len());
    let mut copied_to = 0;
    let mut cursor = 0;

    while let Some(caps) = OPEN_TAG.captures_at(body, cursor) {
        let (Some(open), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let close = format!("</{}>", name.as_str());

        match body[open.end()..].find(&close) {
            Some(offset) => {
                let inner_end = open.end() + offset;
                sections.push(Section::new(
                    name.as_str(),
                    trim_text(&body[open.end()..inner_end]),
                ));
                remaining.push_str(&body[copied_to..open.start()]);
                cursor = inner_end + close.len();
                copied_to = cursor;
            }
            None => {
                log::trace!("unclosed <{}> at byte {}", name.as_str(), open.start());
                // `<` is one byte, so this stays on a char boundary.
                cursor = open.start() + 1;
            }
        }
    }
    remaining.push_str(&body[copied_to..]);

    SectionScan {
        sections,
        remaining: trim_text(&remaining).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_section() {
        let scan = extract_sections("<role>\n  You review code.\n</role>");
        assert_eq!(scan.sections, vec![Section::new("role", "You review code.")]);
        assert_eq!(scan.remaining, "");
    }

    #[test]
    fn test_sections_in_order_with_text_between() {
        let scan = extract_sections("intro\n<b>2</b>\nmiddle\n<a>1</a>\noutro");
        assert_eq!(scan.sections, vec![Section::new("b", "2"), Section::new("a", "1")]);
        assert_eq!(scan.remaining, "intro\n\nmiddle\n\noutro");
    }

    #[test]
    fn test_duplicate_tags_are_separate_sections() {
        let scan = extract_sections("<ex>one</ex><ex>two</ex>");
        assert_eq!(scan.sections, vec![Section::new("ex", "one"), Section::new("ex", "two")]);
    }

    #[test]
    fn test_close_must_match_name() {
        let scan = extract_sections("<a>x</b>y</a>");
        assert_eq!(scan.sections, vec![Section::new("a", "x</b>y")]);
        assert_eq!(scan.remaining, "");
    }

    #[test]
    fn test_nested_same_name_first_close_wins() {
        let scan = extract_sections("<a><a>x</a></a>");
        assert_eq!(scan.sections, vec![Section::new("a", "<a>x")]);
        assert_eq!(scan.remaining, "</a>");
    }

    #[test]
    fn test_nested_different_names_only_outer() {
        let scan = extract_sections("<outer><inner>x</inner></outer>");
        assert_eq!(scan.sections, vec![Section::new("outer", "<inner>x</inner>")]);
    }

    #[test]
    fn test_unclosed_tag_left_verbatim() {
        let scan = extract_sections("before <note> after");
        assert!(scan.sections.is_empty());
        assert_eq!(scan.remaining, "before <note> after");
    }

    #[test]
    fn test_unclosed_tag_does_not_hide_later_section() {
        let scan = extract_sections("<open>\n<done>ok</done>");
        assert_eq!(scan.sections, vec![Section::new("done", "ok")]);
        assert_eq!(scan.remaining, "<open>");
    }

    #[test]
    fn test_whitespace_only_content_is_kept() {
        let scan = extract_sections("<empty>   \n </empty>rest");
        assert_eq!(scan.sections, vec![Section::new("empty", "")]);
        assert_eq!(scan.remaining, "rest");
    }

    #[test]
    fn test_tags_with_attributes_or_hyphens_ignored() {
        let scan = extract_sections("<div class=\"x\">a</div><my-tag>b</my-tag>");
        assert!(scan.sections.is_empty());
    }

    #[test]
    fn test_underscore_and_digit_names() {
        let scan = extract_sections("<task_format>t</task_format><h2>x</h2>");
        assert_eq!(
            scan.sections,
            vec![Section::new("task_format", "t"), Section::new("h2", "x")]
        );
    }

    #[test]
    fn test_open_tag_inside_broken_tag() {
        let scan = extract_sections("<a<b>x</b>");
        assert_eq!(scan.sections, vec![Section::new("b", "x")]);
        assert_eq!(scan.remaining, "<a");
    }

    #[test]
    fn test_multibyte_text_around_sections() {
        let scan = extract_sections("前<a>中</a>後");
        assert_eq!(scan.sections, vec![Section::new("a", "中")]);
        assert_eq!(scan.remaining, "前後");
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(extract_sections(""), SectionScan::default());
    }

    #[test]
    fn test_rescan_of_remaining_finds_nothing() {
        let scan = extract_sections("<a><a>x</a></a> <b>unclosed");
        let again = extract_sections(&scan.remaining);
        assert!(again.sections.is_empty());
        assert_eq!(again.remaining, scan.remaining);
    }
}
