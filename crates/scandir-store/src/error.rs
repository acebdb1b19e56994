//! Error types for JSON persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while saving or loading JSON files.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file could not be opened for reading.
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was opened but reading it failed.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid JSON or does not have the expected shape.
    #[error("Malformed content in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The content parsed but its totals disagree with its counts.
    #[error("Inconsistent stats in {path}: {message}")]
    Inconsistent { path: PathBuf, message: String },

    /// A value could not be encoded as JSON.
    #[error("Failed to encode JSON: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// Writing the temporary output file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The finished temporary file could not be moved into place.
    #[error("Failed to move output into {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Check if the error means the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Open { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    /// Check if the file exists but its content cannot be used.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::Inconsistent { .. })
    }
}
