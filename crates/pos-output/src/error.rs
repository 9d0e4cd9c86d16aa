//! Error types for output generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing transaction batches.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to serialize the batch to JSON.
    #[error("failed to serialize transactions: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write the output file.
    #[error("failed to write output file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
