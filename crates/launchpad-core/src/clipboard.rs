//! Plain-text clipboard and drag payloads for resources.
//!
//! A slash command is referenced as `/name`. Everything else is wrapped in a
//! tag named after its kind, with the resource path as content:
//!
//! ```text
//! /deploy
//! <skill>tools/build.md</skill>
//! <agent>/home/me/.claude/agents/reviewer.md</agent>
//! ```
//!
//! Project-scoped paths are shown relative to the project root when one is
//! known; all other paths stay absolute.
//!
//! # Example
//!
//! ```rust
//! use launchpad_core::clipboard::ClipboardFormatter;
//! use launchpad_core::resource::{Resource, ResourceKind, ResourceScope};
//!
//! let fmt = ClipboardFormatter::new(Some("/work/app".into()));
//! let skill = Resource::new("build", ResourceKind::Skill, "/work/app/tools/build.md")
//!     .with_scope(ResourceScope::Project);
//!
//! assert_eq!(fmt.format(&skill), "<skill>tools/build.md</skill>");
//! ```

use crate::resource::{Resource, ResourceScope};
use crate::selection::Selection;
use crate::util::paths::relative_to_root;

/// Renders resources into the text placed on the clipboard or in a drag.
#[derive(Debug, Clone, Default)]
pub struct ClipboardFormatter {
    project_root: Option<String>,
}

impl ClipboardFormatter {
    /// Create a formatter, optionally aware of the open project's root.
    pub fn new(project_root: Option<String>) -> Self {
        Self {
            project_root: project_root.filter(|root| !root.is_empty()),
        }
    }

    /// The project root used for relative paths, if known.
    pub fn project_root(&self) -> Option<&str> {
        self.project_root.as_deref()
    }

    /// The path shown for `resource`.
    pub fn display_path<'a>(&self, resource: &'a Resource) -> &'a str {
        match (&self.project_root, resource.scope) {
            (Some(root), ResourceScope::Project) => relative_to_root(&resource.path, root),
            _ => &resource.path,
        }
    }

    /// Format a single resource.
    pub fn format(&self, resource: &Resource) -> String {
        if resource.kind.is_command() {
            return format!("/{}", resource.name);
        }
        let kind = resource.kind.as_str();
        format!("<{kind}>{}</{kind}>", self.display_path(resource).trim())
    }

    /// Format several resources, one per line, in the given order.
    pub fn format_many<'a, I>(&self, resources: I) -> String
    where
        I: IntoIterator<Item = &'a Resource>,
    {
        resources
            .into_iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the current selection in selection order.
    ///
    /// Returns `None` when nothing in the selection resolves to a resource.
    pub fn format_selection(
        &self,
        selection: &Selection,
        resources: &[Resource],
    ) -> Option<String> {
        let picked = selection.resolve(resources);
        if picked.is_empty() {
            log::debug!("nothing to copy: selection resolves to no resources");
            return None;
        }
        Some(self.format_many(picked))
    }

    /// Payload for dragging `dragged`.
    ///
    /// Dragging a selected resource carries the whole selection; dragging an
    /// unselected one carries only that resource.
    pub fn drag_payload(
        &self,
        dragged: &Resource,
        selection: &Selection,
        resources: &[Resource],
    ) -> String {
        if selection.contains(&dragged.id) {
            if let Some(text) = self.format_selection(selection, resources) {
                return text;
            }
        }
        self.format(dragged)
    }
}
