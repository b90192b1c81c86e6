//! Index entries.

use burrow_crypto::Digest;
use burrow_name::Name;
use burrow_packet::{Data, KeyLocator};
use burrow_store::PayloadId;

use crate::status::EntryStatus;

/// A single record in the name index.
///
/// Identity — full name, payload id, key-locator hash — is fixed at
/// construction; only the lifecycle [`EntryStatus`] changes afterwards, and
/// only the [`Index`](crate::Index) controller flips it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    name: Name,
    id: PayloadId,
    key_locator_hash: Option<Digest>,
    status: EntryStatus,
}

impl Entry {
    /// Build an entry from a content packet, deriving the locator hash from
    /// its signature when one is claimed. Indexes the packet's *full* name.
    pub fn from_data(data: &Data, id: PayloadId) -> Self {
        Self::new(
            data.full_name(),
            data.signature.key_locator.as_ref().map(KeyLocator::digest),
            id,
        )
    }

    /// Build an entry from a name and a key-locator value, computing its
    /// hash.
    pub fn from_locator(name: Name, locator: &KeyLocator, id: PayloadId) -> Self {
        Self::new(name, Some(locator.digest()), id)
    }

    /// Build an entry from a name and an already-computed locator hash.
    pub fn new(name: Name, key_locator_hash: Option<Digest>, id: PayloadId) -> Self {
        Self {
            name,
            id,
            key_locator_hash,
            status: EntryStatus::Existed,
        }
    }

    /// A bare-name probe carrying no payload and no locator hash.
    pub fn probe(name: Name) -> Self {
        Self::new(name, None, PayloadId::NONE)
    }

    /// The full name this entry is keyed by.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The opaque payload reference. Never dereferenced by the index.
    pub fn id(&self) -> PayloadId {
        self.id
    }

    /// Digest of the packet's claimed key locator, if it had one.
    pub fn key_locator_hash(&self) -> Option<&Digest> {
        self.key_locator_hash.as_ref()
    }

    /// Current lifecycle status.
    pub fn status(&self) -> EntryStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: EntryStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(uri: &str) -> Name {
        uri.parse().unwrap()
    }

    #[test]
    fn from_data_uses_full_name() {
        let data = Data::new(name("/a/b"), b"payload".to_vec());
        let entry = Entry::from_data(&data, PayloadId::new(7));
        assert_eq!(entry.name(), &data.full_name());
        assert_eq!(entry.id(), PayloadId::new(7));
        assert_eq!(entry.key_locator_hash(), None);
        assert_eq!(entry.status(), EntryStatus::Existed);
    }

    #[test]
    fn from_data_derives_locator_hash() {
        let locator = KeyLocator::KeyName(name("/keys/alice"));
        let data = Data::new(name("/a"), b"x".to_vec()).with_locator(locator.clone());
        let entry = Entry::from_data(&data, PayloadId::new(1));
        assert_eq!(entry.key_locator_hash(), Some(&locator.digest()));
    }

    #[test]
    fn from_locator_computes_hash() {
        let locator = KeyLocator::KeyName(name("/keys/bob"));
        let entry = Entry::from_locator(name("/a"), &locator, PayloadId::new(1));
        assert_eq!(entry.key_locator_hash(), Some(&locator.digest()));
    }

    #[test]
    fn probe_carries_nothing() {
        let probe = Entry::probe(name("/a/b"));
        assert!(probe.id().is_none());
        assert_eq!(probe.key_locator_hash(), None);
        assert_eq!(probe.status(), EntryStatus::Existed);
    }
}
