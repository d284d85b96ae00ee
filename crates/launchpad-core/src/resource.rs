//! Resource catalog data model.
//!
//! A [`Resource`] is one catalog entry backed by a file: an agent, a slash
//! command, a skill, a hook, a plan, or a plugin. The serialized shape matches
//! what the browser front end exchanges over IPC (`type`, `pluginName`).
//!
//! # Example
//!
//! ```rust
//! use launchpad_core::resource::{Resource, ResourceKind, ResourceScope, ResourceSource};
//!
//! let r = Resource::new("deploy", ResourceKind::Command, "/home/me/.claude/commands/deploy.md")
//!     .with_scope(ResourceScope::Global)
//!     .with_source(ResourceSource::User);
//!
//! assert_eq!(r.id, "command-user-global-user-deploy");
//! assert!(r.kind.is_command());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// ResourceKind
// ============================================================================

/// The kind of a catalog resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    /// Sub-agent definition.
    Agent,
    /// Executable slash command.
    Command,
    /// Skill bundle.
    Skill,
    /// Hook script or definition.
    Hook,
    /// Plan or project memory file.
    Plan,
    /// Plugin manifest.
    Plugin,
}

impl ResourceKind {
    /// All kinds, in catalog display order.
    pub const ALL: [ResourceKind; 6] = [
        Self::Agent,
        Self::Command,
        Self::Skill,
        Self::Hook,
        Self::Plan,
        Self::Plugin,
    ];

    /// Lowercase name, used as the clipboard tag and in ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Agent => "agent",
            Self::Command => "command",
            Self::Skill => "skill",
            Self::Hook => "hook",
            Self::Plan => "plan",
            Self::Plugin => "plugin",
        }
    }

    /// Human-facing label for headers and badges.
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Agent => "Agent",
            Self::Command => "Slash Command",
            Self::Skill => "Skill",
            Self::Hook => "Hook",
            Self::Plan => "Plan",
            Self::Plugin => "Plugin",
        }
    }

    /// Returns `true` for executable slash commands.
    pub fn is_command(self) -> bool {
        matches!(self, Self::Command)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::parse(format!("unknown resource kind '{s}'")))
    }
}

// ============================================================================
// ResourceScope / ResourceSource
// ============================================================================

/// Where a resource lives relative to the open project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceScope {
    /// Inside the current project directory.
    Project,
    /// In the user's global configuration directory.
    #[default]
    Global,
}

impl ResourceScope {
    /// Lowercase name used in ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Global => "global",
        }
    }
}

impl fmt::Display for ResourceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who provided a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceSource {
    /// Authored by the user.
    #[default]
    User,
    /// Shipped by an installed plugin.
    Plugin,
}

impl ResourceSource {
    /// Lowercase name used in ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Plugin => "plugin",
        }
    }
}

impl fmt::Display for ResourceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Resource
// ============================================================================

/// A single catalog entry backed by a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Stable identifier, see [`resource_id`].
    pub id: String,
    /// Name as shown in the catalog (nested commands use `dir/name`).
    pub name: String,
    /// Resource kind.
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Absolute filesystem path of the backing file.
    pub path: String,
    /// Short description, usually the first prose line of the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Who provided the resource.
    #[serde(default)]
    pub source: ResourceSource,
    /// Owning plugin, when `source` is [`ResourceSource::Plugin`].
    #[serde(
        rename = "pluginName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub plugin_name: Option<String>,
    /// Project or global scope.
    #[serde(default)]
    pub scope: ResourceScope,
}

impl Resource {
    /// Create a global, user-sourced resource and derive its id.
    pub fn new(name: impl Into<String>, kind: ResourceKind, path: impl Into<String>) -> Self {
        let mut resource = Self {
            id: String::new(),
            name: name.into(),
            kind,
            path: path.into(),
            description: None,
            source: ResourceSource::User,
            plugin_name: None,
            scope: ResourceScope::Global,
        };
        resource.refresh_id();
        resource
    }

    /// Set the scope and re-derive the id.
    pub fn with_scope(mut self, scope: ResourceScope) -> Self {
        self.scope = scope;
        self.refresh_id();
        self
    }

    /// Set the source and re-derive the id.
    pub fn with_source(mut self, source: ResourceSource) -> Self {
        self.source = source;
        self.refresh_id();
        self
    }

    /// Mark the resource as provided by `plugin` and re-derive the id.
    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.source = ResourceSource::Plugin;
        self.plugin_name = Some(plugin.into());
        self.refresh_id();
        self
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn refresh_id(&mut self) {
        self.id = resource_id(
            self.kind,
            self.source,
            self.scope,
            self.plugin_name.as_deref(),
            &self.name,
        );
    }
}

/// Build the stable id of a resource.
///
/// Format: `{kind}-{source}-{scope}-{plugin or "user"}-{name}`.
///
/// ```
/// use launchpad_core::resource::{resource_id, ResourceKind, ResourceScope, ResourceSource};
///
/// let id = resource_id(
///     ResourceKind::Skill,
///     ResourceSource::Plugin,
///     ResourceScope::Global,
///     Some("toolbox"),
///     "build",
/// );
/// assert_eq!(id, "skill-plugin-global-toolbox-build");
/// ```
pub fn resource_id(
    kind: ResourceKind,
    source: ResourceSource,
    scope: ResourceScope,
    plugin_name: Option<&str>,
    name: &str,
) -> String {
    format!(
        "{kind}-{source}-{scope}-{}-{name}",
        plugin_name.unwrap_or("user")
    )
}
