//! Error types for launchpad-core.
//!
//! The content parser itself never fails. Errors only arise at the edges:
//! reading resource files, decoding catalogs, and loading configuration.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for launchpad operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur at the Launchpad I/O and configuration boundary.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O failure on a specific path (missing file, permission, decode).
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path that was being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A catalog or other structured input could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Output could not be encoded (e.g. parsed content to JSON).
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

impl Error {
    /// Wrap an I/O error together with the path it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Build a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Build a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Build a not-found error.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    /// Returns `true` if this error was caused by a missing file.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Self::NotFound(_) => true,
            _ => false,
        }
    }
}
