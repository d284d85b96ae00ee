//! Property-based tests for content parsing.

use launchpad_content::{extract_sections, parse_content};
use proptest::prelude::*;

/// Body fragments: prose without angle brackets, closed blocks, unclosed
/// opens, and stray closes. Prose never contains `<` or `>`, so removing a
/// block can never splice a new tag together.
fn fragment() -> impl Strategy<Value = String> {
    let tag = "[a-c]{1,2}";
    prop_oneof![
        "[a-z :\\n]{0,12}",
        (tag, "[a-z \\n]{0,8}").prop_map(|(t, body)| format!("<{t}>{body}</{t}>")),
        tag.prop_map(|t| format!("<{t}>")),
        tag.prop_map(|t| format!("</{t}>")),
    ]
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..10).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn test_rescan_of_remaining_finds_no_sections(doc in document()) {
        let parsed = parse_content(&doc);
        let again = extract_sections(&parsed.remaining_content);
        prop_assert!(again.sections.is_empty());
        prop_assert_eq!(again.remaining, parsed.remaining_content);
    }

    #[test]
    fn test_frontmatter_keys_and_values_non_empty(doc in "[a-z:'\" \\n-]{0,40}") {
        if let Some(fields) = parse_content(&doc).frontmatter {
            prop_assert!(!fields.is_empty());
            for (key, value) in &fields {
                prop_assert!(!key.is_empty());
                prop_assert!(!value.is_empty());
            }
        }
    }

    #[test]
    fn test_remaining_content_is_trimmed(doc in document()) {
        let remaining = parse_content(&doc).remaining_content;
        prop_assert_eq!(remaining.trim(), remaining.as_str());
    }

    #[test]
    fn test_parse_never_panics(doc in "\\PC{0,80}") {
        let _ = parse_content(&doc);
    }
}
