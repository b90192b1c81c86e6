//! In-memory name index for the Burrow repository.
//!
//! Maps stored-content names to opaque payload ids and resolves queries
//! (name prefix plus selectors) to the single best-matching entry. Entries
//! are soft-deleted in place and physically removed only by an explicit
//! [`prune`](Index::prune) sweep, so range scans never race a removal.
//!
//! # Key Types
//!
//! - [`Index`] -- ordered name index with capacity admission (BTreeMap-backed)
//! - [`Entry`] -- immutable identity plus a mutable lifecycle status
//! - [`EntryStatus`] -- existed / inserted / deleted / none lifecycle states
//! - [`IndexError`] -- capacity refusal and internal invariant failures
//!
//! The index is purely in-memory and rebuildable from the payload store; it
//! is single-threaded by design (`&mut self` everywhere, no locking), and
//! callers needing concurrency serialize access externally.

pub mod entry;
pub mod error;
pub mod index;
pub mod status;

mod select;

pub use entry::Entry;
pub use error::{IndexError, IndexResult};
pub use index::Index;
pub use status::EntryStatus;
