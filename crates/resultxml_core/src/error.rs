//! Output error types.

use thiserror::Error;

/// Errors that can occur while producing an output document.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The underlying sink refused data. Fatal: the document is incomplete.
    #[error("Writing output file '{destination}' failed: {source}")]
    Sink {
        /// Where the document was being written.
        destination: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The result tree could not be loaded.
    #[error("Input error: {0}")]
    Input(#[from] resultxml_model::ModelError),
}

impl OutputError {
    /// Creates a sink error for the given destination.
    pub fn sink(destination: impl Into<String>, source: std::io::Error) -> Self {
        Self::Sink {
            destination: destination.into(),
            source,
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
