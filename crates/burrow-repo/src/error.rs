//! Error types for the repository facade.

use burrow_store::PayloadId;

/// Errors surfaced across the repository facade.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The index refused or failed an operation.
    #[error("index error: {0}")]
    Index(#[from] burrow_index::IndexError),

    /// The payload store failed.
    #[error("store error: {0}")]
    Store(#[from] burrow_store::StoreError),

    /// A packet failed to encode or decode.
    #[error("packet error: {0}")]
    Packet(#[from] burrow_packet::PacketError),

    /// The index resolved a query to an id the store no longer holds.
    /// Indicates the two components went out of sync.
    #[error("payload missing for indexed id {0}")]
    MissingPayload(PayloadId),
}

/// Convenience alias for repository results.
pub type RepoResult<T> = Result<T, RepoError>;
