//! Error types for the store crate.

use crate::id::PayloadId;

/// Errors from payload store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested payload was not found.
    #[error("payload not found: {0}")]
    NotFound(PayloadId),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
