//! Shared line helpers for the frontmatter and section extractors.

/// Trim whitespace and byte-order marks from both ends of `text`.
///
/// Resource files saved by some editors start with a BOM; treating it as
/// whitespace keeps a leading `---` recognizable.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Split content into lines on `\n`.
///
/// Unlike [`str::lines`], a trailing newline yields a final empty line and
/// `\r` is left in place for trimming to deal with.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// Split a `key: value` line at its first colon.
///
/// The key is trimmed. The value is trimmed and loses one enclosing pair of
/// matching quotes. Returns `None` when the line has no colon after its first
/// character, or when either side ends up empty.
///
/// ```
/// use launchpad_content::parse::helpers::split_field;
///
/// assert_eq!(split_field("url: https://x.dev"), Some(("url", "https://x.dev")));
/// assert_eq!(split_field("name: 'reviewer'"), Some(("name", "reviewer")));
/// assert_eq!(split_field("empty:"), None);
/// ```
pub fn split_field(line: &str) -> Option<(&str, &str)> {
    let colon = field_colon(line)?;
    let key = trim_text(&line[..colon]);
    let value = strip_matching_quotes(trim_text(&line[colon + 1..]));
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Byte index of the first colon, if it is not the line's first character.
pub fn field_colon(line: &str) -> Option<usize> {
    line.find(':').filter(|&idx| idx > 0)
}

/// Remove one pair of enclosing quotes when both ends use the same quote.
///
/// ```
/// use launchpad_content::parse::helpers::strip_matching_quotes;
///
/// assert_eq!(strip_matching_quotes("\"value\""), "value");
/// assert_eq!(strip_matching_quotes("'va\"lue'"), "va\"lue");
/// assert_eq!(strip_matching_quotes("\"mismatched'"), "\"mismatched'");
/// ```
pub fn strip_matching_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(&open @ (b'"' | b'\'')), Some(&close)) if bytes.len() >= 2 && open == close => {
            &value[1..value.len() - 1]
        }
        _ => value,
    }
}
