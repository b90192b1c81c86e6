//! The payload store trait.

use crate::error::StoreResult;
use crate::id::PayloadId;

/// Payload storage behind opaque ids.
///
/// All implementations must satisfy these invariants:
/// - Ids are assigned by the store, are unique for its lifetime, and are
///   never reused after removal.
/// - Stored bytes are returned exactly as written; the store never interprets
///   payload contents.
/// - The [`NONE`](PayloadId::NONE) sentinel is never a valid stored id.
/// - All I/O errors are propagated, never silently ignored.
pub trait PayloadStore: Send + Sync {
    /// Store a payload and return its freshly assigned id.
    fn insert(&self, payload: &[u8]) -> StoreResult<PayloadId>;

    /// Read a payload by id.
    ///
    /// Returns `Ok(None)` if no payload has this id.
    /// Returns `Err` on I/O failure.
    fn read(&self, id: PayloadId) -> StoreResult<Option<Vec<u8>>>;

    /// Remove a payload by id. Returns `true` if it existed.
    fn remove(&self, id: PayloadId) -> StoreResult<bool>;

    /// All currently stored ids, in ascending order.
    ///
    /// Drives index rebuilds; the order makes rebuilds deterministic.
    fn ids(&self) -> StoreResult<Vec<PayloadId>>;
}
