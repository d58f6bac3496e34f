/**
 * Storage Error Types
 *
 * Errors surfaced by the marker document store and the photo blob store.
 * Both stores sit below the service layer, so these errors carry raw I/O
 * and serialization causes; the service maps them onto API responses.
 */
use std::io;
use thiserror::Error;

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while reading or writing marker state on disk
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The marker collection could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
