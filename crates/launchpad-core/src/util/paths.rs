//! Path helpers for project-relative display and config locations.

use std::path::PathBuf;

/// Make `path` relative to `root` for display.
///
/// The root prefix is removed along with one leading `/` or `\` separator.
/// The prefix only counts when it ends on a path component boundary, so a
/// sibling such as `/work/application` is not under `/work/app`. Paths
/// outside `root` come back unchanged. Works on strings so Windows-style
/// catalog paths behave the same on every host.
///
/// ```
/// use launchpad_core::util::paths::relative_to_root;
///
/// assert_eq!(relative_to_root("/work/app/tools/build.md", "/work/app"), "tools/build.md");
/// assert_eq!(relative_to_root("/elsewhere/x.md", "/work/app"), "/elsewhere/x.md");
/// assert_eq!(relative_to_root("/work/application/x.md", "/work/app"), "/work/application/x.md");
/// ```
pub fn relative_to_root<'a>(path: &'a str, root: &str) -> &'a str {
    if root.is_empty() {
        return path;
    }
    let Some(rest) = path.strip_prefix(root) else {
        return path;
    };
    if rest.is_empty() || root.ends_with(is_separator) {
        return rest;
    }
    match rest.strip_prefix(is_separator) {
        Some(relative) => relative,
        None => path,
    }
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Expand a leading `~` to the user's home directory.
///
/// Returns the path unchanged when it has no tilde or no home is known.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
