//! In-memory payload store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::id::PayloadId;
use crate::traits::PayloadStore;

/// In-memory, HashMap-based payload store.
///
/// Intended for tests and embedding. Payloads are held behind a `RwLock`;
/// ids are assigned from a monotonically increasing counter starting at 1,
/// so the [`PayloadId::NONE`] sentinel never collides with a stored id.
pub struct InMemoryPayloadStore {
    payloads: RwLock<HashMap<i64, Vec<u8>>>,
    next_id: AtomicI64,
}

impl InMemoryPayloadStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            payloads: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of payloads currently stored.
    pub fn len(&self) -> usize {
        self.payloads.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.payloads.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored payloads.
    pub fn total_bytes(&self) -> u64 {
        self.payloads
            .read()
            .expect("lock poisoned")
            .values()
            .map(|p| p.len() as u64)
            .sum()
    }

    /// Remove all payloads. Does not reset id assignment.
    pub fn clear(&self) {
        self.payloads.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryPayloadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadStore for InMemoryPayloadStore {
    fn insert(&self, payload: &[u8]) -> StoreResult<PayloadId> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut map = self.payloads.write().expect("lock poisoned");
        map.insert(id, payload.to_vec());
        Ok(PayloadId::new(id))
    }

    fn read(&self, id: PayloadId) -> StoreResult<Option<Vec<u8>>> {
        let map = self.payloads.read().expect("lock poisoned");
        Ok(map.get(&id.as_i64()).cloned())
    }

    fn remove(&self, id: PayloadId) -> StoreResult<bool> {
        let mut map = self.payloads.write().expect("lock poisoned");
        Ok(map.remove(&id.as_i64()).is_some())
    }

    fn ids(&self) -> StoreResult<Vec<PayloadId>> {
        let map = self.payloads.read().expect("lock poisoned");
        let mut ids: Vec<PayloadId> = map.keys().map(|&raw| PayloadId::new(raw)).collect();
        ids.sort();
        Ok(ids)
    }
}

impl std::fmt::Debug for InMemoryPayloadStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryPayloadStore")
            .field("payload_count", &self.len())
            .finish()
    }
}
