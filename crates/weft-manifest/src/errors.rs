use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while materializing a manifest
#[derive(Error, Debug)]
pub enum MaterializeError {
    #[error("Invalid path '{key}': {reason}")]
    InvalidPath { key: String, reason: String },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create target directory '{path}': {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

impl MaterializeError {
    /// Build an `InvalidPath` error for a manifest key
    pub fn invalid_path(key: &str, reason: impl Into<String>) -> Self {
        MaterializeError::InvalidPath {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
