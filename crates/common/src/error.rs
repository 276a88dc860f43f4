//! Error types shared across Scrawl crates.

use std::path::PathBuf;

/// Top-level error type for Scrawl operations.
#[derive(Debug, thiserror::Error)]
pub enum ScrawlError {
    /// A point source or stroke recording failure.
    #[error("Capture error: {message}")]
    Capture { message: String },

    /// A gesture library could not be loaded or written.
    #[error("Library error: {message}")]
    Library { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using ScrawlError.
pub type ScrawlResult<T> = Result<T, ScrawlError>;

impl ScrawlError {
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture {
            message: msg.into(),
        }
    }

    pub fn library(msg: impl Into<String>) -> Self {
        Self::Library {
            message: msg.into(),
        }
    }
}
