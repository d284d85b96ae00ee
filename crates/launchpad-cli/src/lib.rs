//! # launchpad-cli
//!
//! Command-line front end for Launchpad:
//! - Parse a resource file into frontmatter, sections, and content
//! - Describe a resource file in one line
//! - Produce clipboard text for a selection of catalog resources
//! - Inspect configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod logging;

pub use cli::{Args, Command, ConfigAction};
pub use config::{LaunchpadConfig, OutputFormat};
