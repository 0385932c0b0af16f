//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the local store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the store directory.
    #[error("failed to open store at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize or deserialize a value.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to read or write the backing file.
    #[error("store operation failed: {0}")]
    Io(#[from] std::io::Error),
}
