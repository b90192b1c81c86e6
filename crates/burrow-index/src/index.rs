//! The index controller: admission, lookup, soft delete, and compaction.

use std::collections::BTreeMap;
use std::ops::Bound;

use burrow_crypto::Digest;
use burrow_name::Name;
use burrow_packet::{Data, Query};
use burrow_store::PayloadId;
use tracing::debug;

use crate::entry::Entry;
use crate::error::{IndexError, IndexResult};
use crate::select;
use crate::status::EntryStatus;

/// Ordered name index over stored packets.
///
/// Entries are keyed by full name alone; payload id, locator hash, and
/// status play no part in the ordering, so a bare name addresses an entry
/// regardless of its metadata. Deletion is a status flip — tombstones stay
/// in place, keep their slot occupied for admission purposes, and disappear
/// only in an explicit [`prune`](Self::prune) sweep.
pub struct Index {
    capacity: usize,
    live: usize,
    entries: BTreeMap<Name, Entry>,
}

impl std::fmt::Debug for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index")
            .field("capacity", &self.capacity)
            .field("live", &self.live)
            .field("occupied", &self.entries.len())
            .finish()
    }
}

impl Index {
    /// Create an empty index admitting at most `capacity` entries.
    ///
    /// The capacity is fixed for the index's lifetime. The index never
    /// evicts on its own; running out surfaces as
    /// [`IndexError::CapacityExceeded`] and any eviction policy belongs to
    /// the caller.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            live: 0,
            entries: BTreeMap::new(),
        }
    }

    /// The configured maximum.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live (non-deleted) entries.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if no live entries exist.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of occupied slots, tombstones included.
    pub fn occupied(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when admission would be refused: every slot, live or
    /// tombstoned, is taken.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    /// Index a content packet under its full name.
    ///
    /// Returns `Ok(true)` on a fresh insert or a resurrection, `Ok(false)`
    /// when a live entry already occupies the name (re-indexing is
    /// idempotent, not an error).
    pub fn insert(&mut self, data: &Data, id: PayloadId) -> IndexResult<bool> {
        self.admit(Entry::from_data(data, id))
    }

    /// Index a full name directly, with an optional precomputed locator
    /// hash. Same admission rules as [`insert`](Self::insert).
    pub fn insert_raw(
        &mut self,
        name: Name,
        id: PayloadId,
        key_locator_hash: Option<Digest>,
    ) -> IndexResult<bool> {
        self.admit(Entry::new(name, key_locator_hash, id))
    }

    fn admit(&mut self, mut entry: Entry) -> IndexResult<bool> {
        if self.is_full() {
            return Err(IndexError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        match self.entries.get(entry.name()).map(Entry::status) {
            None => {
                debug!(name = %entry.name(), id = %entry.id(), "entry indexed");
                self.entries.insert(entry.name().clone(), entry);
                self.live += 1;
                Ok(true)
            }
            Some(EntryStatus::Deleted) => {
                // Resurrection: the tombstone gives way to a new identity
                // (fresh id and hash) under the unchanged name.
                entry.set_status(EntryStatus::Inserted);
                debug!(name = %entry.name(), id = %entry.id(), "tombstone resurrected");
                let displaced = self.entries.insert(entry.name().clone(), entry);
                if displaced.map(|e| e.status()) != Some(EntryStatus::Deleted) {
                    return Err(IndexError::InvariantViolation(
                        "resurrection displaced a live entry".to_string(),
                    ));
                }
                self.live += 1;
                Ok(true)
            }
            Some(_) => Ok(false),
        }
    }

    /// Soft-delete the entry with exactly this full name.
    ///
    /// Returns `false` when no live entry has the name — a tombstone counts
    /// as already absent. The entry stays in its slot until [`prune`](Self::prune).
    pub fn erase(&mut self, name: &Name) -> bool {
        match self.entries.get_mut(name) {
            Some(entry) if entry.status() != EntryStatus::Deleted => {
                entry.set_status(EntryStatus::Deleted);
                self.live -= 1;
                debug!(name = %name, "entry tombstoned");
                true
            }
            _ => false,
        }
    }

    /// Physically remove every tombstone. Returns the number removed.
    ///
    /// Never runs implicitly — compaction is a caller-scheduled maintenance
    /// pass, so in-flight range scans are never invalidated by a delete.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.status() != EntryStatus::Deleted);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(removed, "tombstones pruned");
        }
        removed
    }

    // ---------------------------------------------------------------
    // Lookup
    // ---------------------------------------------------------------

    /// Resolve a query to the best-matching live entry.
    pub fn find(&self, query: &Query) -> Option<(PayloadId, Name)> {
        select::resolve(&self.entries, query)
    }

    /// The first live entry (in canonical order) whose name extends
    /// `prefix`, ignoring all selectors.
    pub fn find_name(&self, prefix: &Name) -> Option<(PayloadId, Name)> {
        for (name, entry) in self.entries.range((Bound::Included(prefix), Bound::Unbounded)) {
            if !entry.status().is_live() {
                continue;
            }
            if prefix.is_prefix_of(name) {
                return Some((entry.id(), name.clone()));
            }
            return None;
        }
        None
    }

    /// Status of the first entry whose name extends `prefix`.
    ///
    /// Reports [`EntryStatus::Deleted`] rather than hiding it, so callers
    /// can tell "soft-deleted" from "never existed"
    /// ([`EntryStatus::None`]).
    pub fn status(&self, prefix: &Name) -> EntryStatus {
        match self
            .entries
            .range((Bound::Included(prefix), Bound::Unbounded))
            .next()
        {
            Some((name, entry)) if prefix.is_prefix_of(name) => entry.status(),
            _ => EntryStatus::None,
        }
    }

    /// Returns `true` if this packet's exact full name is indexed and not
    /// deleted.
    pub fn has_data(&self, data: &Data) -> bool {
        self.entries
            .get(&data.full_name())
            .is_some_and(|entry| entry.status().is_live())
    }

    /// The entry with exactly this full name, tombstoned or live.
    pub fn get(&self, name: &Name) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Visit every entry — live or tombstoned — in ascending canonical
    /// order.
    pub fn enumerate<F>(&self, mut visitor: F)
    where
        F: FnMut(&Name, EntryStatus),
    {
        for (name, entry) in &self.entries {
            visitor(name, entry.status());
        }
    }
}
