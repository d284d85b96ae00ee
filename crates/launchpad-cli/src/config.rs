//! Launchpad CLI configuration.
//!
//! Configuration lives in a TOML file:
//!
//! ```toml
//! project_root = "~/work/app"
//! output = "json"
//! log_level = "info"
//! ```
//!
//! The file is located from `--config` / `LAUNCHPAD_CONFIG`, falling back to
//! `<config dir>/launchpad/config.toml`. A missing file means defaults.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use launchpad_core::util::paths::expand_tilde;
use launchpad_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Project name, used for the config directory and messages.
pub const PROJECT_NAME: &str = "launchpad";

/// Config file name inside the project config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// ============================================================================
// OutputFormat
// ============================================================================

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::config(format!(
                "unknown output format '{other}' (expected 'text' or 'json')"
            ))),
        }
    }
}

// ============================================================================
// LaunchpadConfig
// ============================================================================

/// Effective CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchpadConfig {
    /// Root of the open project; project-scoped paths are shown relative to it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,
    /// Default output format.
    pub output: OutputFormat,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for LaunchpadConfig {
    fn default() -> Self {
        Self {
            project_root: None,
            output: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl LaunchpadConfig {
    /// Default config file location for this platform.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join(CONFIG_FILE_NAME))
    }

    /// Resolve the config file path from an explicit path or the default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(expand_tilde(path)),
            None => Self::default_config_path(),
        }
    }

    /// Load configuration, using defaults when the file does not exist.
    ///
    /// An explicitly named file that is missing is an error.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            log::debug!("no config directory on this platform; using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            if explicit.is_some() {
                return Err(Error::config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            log::debug!("config file {} absent; using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.project_root = config
            .project_root
            .map(|root| expand_tilde(&root.to_string_lossy()));
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Project root as a string, with an override taking precedence.
    pub fn project_root_with(&self, override_root: Option<&Path>) -> Option<String> {
        override_root
            .or(self.project_root.as_deref())
            .map(|root| root.to_string_lossy().into_owned())
    }
}
