//! Payload storage for the Burrow repository.
//!
//! The store owns packet bytes behind opaque [`PayloadId`]s. The name index
//! never dereferences an id — index and store are independent components that
//! communicate only through this handle, which keeps the index fully
//! in-memory and rebuildable from the store.
//!
//! # Key Types
//!
//! - [`PayloadId`] -- opaque `i64` reference into a store
//! - [`PayloadStore`] -- the backend trait
//! - [`InMemoryPayloadStore`] -- `HashMap`-based store for tests and embedding

pub mod error;
pub mod id;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use id::PayloadId;
pub use memory::InMemoryPayloadStore;
pub use traits::PayloadStore;
