//! Raw resource content supplier.
//!
//! Reads the text of a resource file. A failure here means the parser is
//! never invoked; callers surface the error on their own.

use std::path::Path;

use crate::error::{Error, Result};

/// Read a resource file as UTF-8 text.
pub async fn read_resource_content(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    log::debug!("reading resource content from {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}
