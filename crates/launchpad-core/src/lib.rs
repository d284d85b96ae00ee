//! Launchpad Core: shared types, errors, and resource utilities.
//!
//! This crate provides the foundational types used across all Launchpad
//! crates. It has no internal Launchpad dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`resource`]: Resource catalog data model
//! - [`selection`]: Insertion-ordered multi-selection
//! - [`clipboard`]: Clipboard and drag text formatting
//! - [`content`]: Raw resource content supplier
//! - [`util`]: Name and path utilities

pub mod clipboard;
pub mod content;
pub mod error;
pub mod resource;
pub mod selection;
pub mod util;

// Re-export key types at crate root for convenience
pub use clipboard::ClipboardFormatter;
pub use content::read_resource_content;
pub use error::{Error, Result};
pub use resource::{Resource, ResourceKind, ResourceScope, ResourceSource};
pub use selection::Selection;

// Convenience re-exports from util
pub use util::ids::{format_resource_name, name_from_path};
pub use util::paths::relative_to_root;
