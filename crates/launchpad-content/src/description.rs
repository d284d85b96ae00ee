//! Short catalog descriptions for resource files.

/// Maximum description length in characters, before the ellipsis.
pub const MAX_DESCRIPTION_CHARS: usize = 100;

/// Extract a one-line description from a resource file.
///
/// Picks the first non-empty line that is outside a `---` block and is not a
/// markdown heading. Every trimmed `---` line toggles the block, so stray
/// horizontal rules flip it too. Descriptions longer than
/// [`MAX_DESCRIPTION_CHARS`] are cut and end in `...`.
///
/// ```
/// use launchpad_content::description::extract_description;
///
/// let content = "---\nname: x\n---\n# Title\n\nReviews pull requests.";
/// assert_eq!(extract_description(content).as_deref(), Some("Reviews pull requests."));
/// ```
pub fn extract_description(content: &str) -> Option<String> {
    let mut in_frontmatter = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed == "---" {
            in_frontmatter = !in_frontmatter;
            continue;
        }
        if in_frontmatter || trimmed.starts_with('#') || trimmed.is_empty() {
            continue;
        }
        return Some(truncate(trimmed));
    }
    None
}

fn truncate(text: &str) -> String {
    match text.char_indices().nth(MAX_DESCRIPTION_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
