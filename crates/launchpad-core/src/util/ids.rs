//! Resource name utilities.
//!
//! Resource names come from file stems written in kebab-case or snake_case.
//! These helpers turn them into display titles and derive names from paths.

use std::path::Path;

/// Format a resource name from kebab-case/snake_case into Proper Case.
///
/// Each word has its first character uppercased and the rest lowercased.
/// Empty segments (from doubled separators) are kept as empty words.
///
/// # Examples
///
/// ```
/// use launchpad_core::util::ids::format_resource_name;
///
/// assert_eq!(format_resource_name("create-agent-skill"), "Create Agent Skill");
/// assert_eq!(format_resource_name("commit_push_pr"), "Commit Push Pr");
/// assert_eq!(format_resource_name("README"), "Readme");
/// ```
pub fn format_resource_name(name: &str) -> String {
    name.split(['-', '_'])
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Derive a resource name from a file path's stem.
///
/// Returns `None` if the path has no file stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use launchpad_core::util::ids::name_from_path;
///
/// assert_eq!(
///     name_from_path(Path::new("/home/me/.claude/agents/code-reviewer.md")),
///     Some("code-reviewer".to_string())
/// );
/// assert_eq!(name_from_path(Path::new("/")), None);
/// ```
pub fn name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(String::from)
}
