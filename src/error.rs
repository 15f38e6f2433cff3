//! Error types for Ramen.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Ramen operations.
pub type Result<T> = std::result::Result<T, RamenError>;

/// Errors that can occur in Ramen.
#[derive(Debug, Error)]
pub enum RamenError {
    /// Failed to open a local data file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// The payload was not the expected JSON array.
    #[error("Malformed JSON from {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A background worker went away.
    #[error("Worker disconnected: {0}")]
    Disconnected(String),
}

impl RamenError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(source_name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            source,
        }
    }

    /// Create a Status error.
    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::Status {
            url: url.into(),
            status,
        }
    }
}
