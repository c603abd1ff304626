//! Result tree loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a result tree.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The result file could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The result document is not a valid result tree.
    #[error("Invalid result tree: {0}")]
    Json(#[from] serde_json::Error),
}
