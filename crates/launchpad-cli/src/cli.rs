//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::OutputFormat;

/// Launchpad - preview and reference agents, commands, skills, and plans
#[derive(Parser, Debug)]
#[command(name = "launchpad")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "LAUNCHPAD_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a resource file into frontmatter, sections, and content
    Parse {
        /// Resource file to parse
        file: PathBuf,

        /// Output format (defaults to the configured one)
        #[arg(short, long)]
        format: Option<FormatArg>,
    },

    /// Print the display name and one-line description of a resource file
    Describe {
        /// Resource file to describe
        file: PathBuf,
    },

    /// Print the clipboard text for selected catalog resources
    Copy {
        /// JSON catalog: an array of resources
        #[arg(long)]
        catalog: PathBuf,

        /// Project root for project-relative paths
        #[arg(long, env = "LAUNCHPAD_PROJECT_ROOT")]
        project_root: Option<PathBuf>,

        /// Resource ids, toggled in order
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Configuration operations
    Config {
        /// Config action to run
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Show the effective configuration as TOML
    Show,
    /// Get a configuration value by dotted key
    Get {
        /// Key to read, e.g. `output`
        key: String,
    },
}

/// `--format` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}
