//! The repository facade.

use std::sync::Arc;

use burrow_index::{EntryStatus, Index};
use burrow_name::Name;
use burrow_packet::{Data, Query};
use burrow_store::{InMemoryPayloadStore, PayloadStore};
use tracing::{debug, info};

use crate::config::RepoConfig;
use crate::error::{RepoError, RepoResult};

/// A content repository: payload store plus name index.
///
/// All lookups go through the index; all bytes live in the store. The two
/// meet only at the opaque payload id, so either side can be swapped out
/// without the other noticing.
pub struct Repository {
    index: Index,
    store: Arc<dyn PayloadStore>,
}

impl Repository {
    /// Create an empty repository over the given payload store.
    pub fn new(config: RepoConfig, store: Arc<dyn PayloadStore>) -> Self {
        Self {
            index: Index::new(config.capacity),
            store,
        }
    }

    /// Create an empty repository over a fresh in-memory store.
    pub fn in_memory(config: RepoConfig) -> Self {
        Self::new(config, Arc::new(InMemoryPayloadStore::new()))
    }

    /// Rebuild a repository from an existing payload store.
    ///
    /// The index is not persisted anywhere; it is reconstructed by decoding
    /// every stored packet and re-indexing it under its original id.
    pub fn rebuild(config: RepoConfig, store: Arc<dyn PayloadStore>) -> RepoResult<Self> {
        let mut repo = Self::new(config, store);
        let ids = repo.store.ids()?;
        for id in &ids {
            let bytes = repo
                .store
                .read(*id)?
                .ok_or(RepoError::MissingPayload(*id))?;
            let data = Data::from_bytes(&bytes)?;
            repo.index.insert(&data, *id)?;
        }
        info!(packets = ids.len(), "index rebuilt from payload store");
        Ok(repo)
    }

    /// Number of live packets.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no live packets exist.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Store and index a packet.
    ///
    /// Returns `Ok(false)` when a live packet already occupies the full
    /// name; the just-written payload is removed again so duplicates do not
    /// leak storage.
    pub fn put(&mut self, data: &Data) -> RepoResult<bool> {
        let bytes = data.to_bytes()?;
        let id = self.store.insert(&bytes)?;
        let inserted = match self.index.insert(data, id) {
            Ok(inserted) => inserted,
            Err(refused) => {
                self.store.remove(id)?;
                return Err(refused.into());
            }
        };
        if !inserted {
            self.store.remove(id)?;
            debug!(name = %data.full_name(), "duplicate put ignored");
        }
        Ok(inserted)
    }

    /// Read and decode the payload behind an indexed id.
    ///
    /// A dangling id the store no longer holds is [`RepoError::MissingPayload`]
    /// (an internal inconsistency, distinct from plain not-found).
    fn fetch(&self, id: burrow_store::PayloadId) -> RepoResult<Data> {
        let bytes = self.store.read(id)?.ok_or(RepoError::MissingPayload(id))?;
        Ok(Data::from_bytes(&bytes)?)
    }

    /// Resolve a query and fetch the matched packet.
    pub fn get(&self, query: &Query) -> RepoResult<Option<Data>> {
        match self.index.find(query) {
            Some((id, _)) => self.fetch(id).map(Some),
            None => Ok(None),
        }
    }

    /// Fetch the first live packet under a name prefix, ignoring selectors.
    pub fn get_name(&self, prefix: &Name) -> RepoResult<Option<Data>> {
        match self.index.find_name(prefix) {
            Some((id, _)) => self.fetch(id).map(Some),
            None => Ok(None),
        }
    }

    /// Returns `true` if this exact packet is stored and live.
    pub fn contains(&self, data: &Data) -> bool {
        self.index.has_data(data)
    }

    /// Lifecycle status of the first entry under a name prefix.
    pub fn status(&self, prefix: &Name) -> EntryStatus {
        self.index.status(prefix)
    }

    /// Delete the packet with exactly this full name.
    ///
    /// The payload is removed from the store immediately; the index entry is
    /// tombstoned and keeps its slot until [`compact`](Self::compact).
    pub fn delete(&mut self, full_name: &Name) -> RepoResult<bool> {
        let Some(entry) = self.index.get(full_name) else {
            return Ok(false);
        };
        if entry.status() == EntryStatus::Deleted {
            return Ok(false);
        }
        let id = entry.id();
        if !self.index.erase(full_name) {
            return Ok(false);
        }
        self.store.remove(id)?;
        debug!(name = %full_name, id = %id, "packet deleted");
        Ok(true)
    }

    /// Run the deferred compaction sweep. Returns the number of tombstones
    /// reclaimed.
    pub fn compact(&mut self) -> usize {
        self.index.prune()
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("index", &self.index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use burrow_packet::ChildSelector;

    use super::*;

    fn name(uri: &str) -> Name {
        uri.parse().unwrap()
    }

    fn small_repo() -> (Repository, Arc<InMemoryPayloadStore>) {
        let store = Arc::new(InMemoryPayloadStore::new());
        let repo = Repository::new(RepoConfig::with_capacity(16), store.clone());
        (repo, store)
    }

    #[test]
    fn put_then_get_roundtrips() {
        let (mut repo, _) = small_repo();
        let data = Data::new(name("/a/b"), b"payload".to_vec());
        assert!(repo.put(&data).unwrap());

        let fetched = repo.get(&Query::new(name("/a"))).unwrap().unwrap();
        assert_eq!(fetched, data);
        assert_eq!(repo.get_name(&name("/a/b")).unwrap().unwrap(), data);
        assert!(repo.contains(&data));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn duplicate_put_does_not_leak_payloads() {
        let (mut repo, store) = small_repo();
        let data = Data::new(name("/a"), b"x".to_vec());
        assert!(repo.put(&data).unwrap());
        assert!(!repo.put(&data).unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn capacity_refusal_does_not_leak_payloads() {
        let store = Arc::new(InMemoryPayloadStore::new());
        let mut repo = Repository::new(RepoConfig::with_capacity(1), store.clone());
        assert!(repo.put(&Data::new(name("/a"), b"x".to_vec())).unwrap());

        let overflow = repo.put(&Data::new(name("/b"), b"y".to_vec()));
        assert!(matches!(overflow, Err(RepoError::Index(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_then_compact() {
        let (mut repo, store) = small_repo();
        let data = Data::new(name("/a"), b"x".to_vec());
        let full = data.full_name();
        assert!(repo.put(&data).unwrap());

        assert!(repo.delete(&full).unwrap());
        assert!(!repo.delete(&full).unwrap());
        assert_eq!(store.len(), 0);
        assert_eq!(repo.status(&full), EntryStatus::Deleted);
        assert_eq!(repo.get(&Query::new(name("/a"))).unwrap(), None);

        assert_eq!(repo.compact(), 1);
        assert_eq!(repo.status(&full), EntryStatus::None);
    }

    #[test]
    fn selectors_reach_through_the_facade() {
        let (mut repo, _) = small_repo();
        let first = Data::new(name("/a/1"), b"one".to_vec());
        let last = Data::new(name("/a/2"), b"two".to_vec());
        assert!(repo.put(&first).unwrap());
        assert!(repo.put(&last).unwrap());

        let rightmost =
            Query::new(name("/a")).with_child_selector(ChildSelector::Rightmost);
        assert_eq!(repo.get(&rightmost).unwrap().unwrap(), last);
    }

    #[test]
    fn rebuild_recovers_the_index() {
        let (mut repo, store) = small_repo();
        let kept = Data::new(name("/a/1"), b"one".to_vec());
        let dropped = Data::new(name("/a/2"), b"two".to_vec());
        assert!(repo.put(&kept).unwrap());
        assert!(repo.put(&dropped).unwrap());
        assert!(repo.delete(&dropped.full_name()).unwrap());
        drop(repo);

        let rebuilt =
            Repository::rebuild(RepoConfig::with_capacity(16), store.clone()).unwrap();
        assert_eq!(rebuilt.len(), 1);
        assert!(rebuilt.contains(&kept));
        assert!(!rebuilt.contains(&dropped));
    }
}
