//! Error types for the index crate.

/// Errors from index operations.
///
/// Everything else — not found, already present, already absent — is an
/// ordinary value, not an error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IndexError {
    /// Admission refused: every slot, live or tombstoned, is occupied. The
    /// attempted insert left the index untouched; the caller must free
    /// capacity (prune, or evict externally) or reject the request.
    #[error("index is full: all {capacity} slots are occupied")]
    CapacityExceeded { capacity: usize },

    /// An internal post-condition failed. This is a bug in the index, not a
    /// normal runtime condition.
    #[error("index invariant violated: {0}")]
    InvariantViolation(String),
}

/// Convenience alias for index results.
pub type IndexResult<T> = Result<T, IndexError>;
