//! Utility modules for launchpad-core.
//!
//! - [`ids`]: Resource name formatting
//! - [`paths`]: Project-relative path handling

pub mod ids;
pub mod paths;
