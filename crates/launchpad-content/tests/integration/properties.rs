//! Documented parsing properties, one test per property.

use launchpad_content::{extract_sections, parse_content};

use crate::common::{fields, sections};

#[test]
fn test_no_frontmatter_means_trimmed_input_minus_sections() {
    let parsed = parse_content("\n# Title\n\n<note>n</note>\nProse.\n");
    assert!(parsed.frontmatter.is_none());
    assert_eq!(parsed.remaining_content, "# Title\n\n\nProse.");
}

#[test]
fn test_delimited_frontmatter() {
    let parsed = parse_content("---\na: 1\nb: two\n---\nBODY");
    assert_eq!(parsed.frontmatter, Some(fields(&[("a", "1"), ("b", "two")])));
    assert!(parsed.remaining_content.starts_with("BODY"));
}

#[test]
fn test_implicit_frontmatter_stops_at_blank_line() {
    let parsed = parse_content("a: 1\nb: 2\n\ntext");
    assert_eq!(parsed.frontmatter, Some(fields(&[("a", "1"), ("b", "2")])));
    assert_eq!(parsed.remaining_content, "text");
}

#[test]
fn test_implicit_frontmatter_stops_at_tag_line() {
    let parsed = parse_content("a: 1\n<role>x</role>");
    assert_eq!(parsed.frontmatter, Some(fields(&[("a", "1")])));
    assert_eq!(parsed.sections, sections(&[("role", "x")]));
    assert_eq!(parsed.remaining_content, "");
}

#[test]
fn test_non_field_line_halts_implicit_scan() {
    let parsed = parse_content("a: 1\nplain line\nb: 2");
    assert_eq!(parsed.frontmatter, Some(fields(&[("a", "1")])));
    assert_eq!(parsed.remaining_content, "plain line\nb: 2");
}

#[test]
fn test_quote_stripping() {
    let cases = [
        ("key: \"value\"", "value"),
        ("key: 'va\"lue'", "va\"lue"),
        ("key: \"mismatched'", "\"mismatched'"),
    ];
    for (line, expected) in cases {
        let parsed = parse_content(line);
        assert_eq!(parsed.frontmatter_value("key"), Some(expected), "line: {line}");
    }
}

#[test]
fn test_value_keeps_later_colons() {
    let parsed = parse_content("url: https://example.com:8080/x");
    assert_eq!(parsed.frontmatter_value("url"), Some("https://example.com:8080/x"));
}

#[test]
fn test_sections_in_order_of_appearance() {
    let parsed = parse_content("<a>1</a>text<b>2</b>");
    assert_eq!(parsed.sections, sections(&[("a", "1"), ("b", "2")]));
    assert_eq!(parsed.remaining_content, "text");
}

#[test]
fn test_unclosed_tag_left_verbatim() {
    let parsed = parse_content("<draft>\nnot closed\n<b>2</b>");
    assert_eq!(parsed.sections, sections(&[("b", "2")]));
    assert_eq!(parsed.remaining_content, "<draft>\nnot closed");
}

#[test]
fn test_nested_same_name_keeps_stray_close() {
    let parsed = parse_content("<a><a>x</a></a>");
    assert_eq!(parsed.sections, sections(&[("a", "<a>x")]));
    assert_eq!(parsed.remaining_content, "</a>");
}

#[test]
fn test_rescan_of_remaining_content_is_empty() {
    let parsed = parse_content("<a>1</a>mid <open> <b>2</b> </c> tail");
    let again = extract_sections(&parsed.remaining_content);
    assert!(again.sections.is_empty());
    assert_eq!(again.remaining, parsed.remaining_content);
}

#[test]
fn test_empty_key_or_value_skipped() {
    let parsed = parse_content("---\nempty:\n : novalue\nok: yes\n---\n");
    assert_eq!(parsed.frontmatter, Some(fields(&[("ok", "yes")])));
}

#[test]
fn test_frontmatter_only_blank_fields_is_absent() {
    let parsed = parse_content("tools:\n\nbody");
    assert!(parsed.frontmatter.is_none());
    assert_eq!(parsed.remaining_content, "body");
}
