//! Error types for the core crate.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while reading or writing game state.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Filesystem access to the save document failed.
    #[error("save file {path}: {source}")]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The save document is not valid JSON for a session.
    #[error("malformed save document: {0}")]
    Json(#[from] serde_json::Error),

    /// A scenario identifier was not recognised.
    #[error("unknown scenario: {0}")]
    UnknownScenario(String),
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
