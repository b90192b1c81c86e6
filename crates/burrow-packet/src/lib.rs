//! Packet types for the Burrow repository.
//!
//! A [`Data`] packet is a named unit of content; a [`Query`] asks the
//! repository for the best-matching stored packet under a name prefix and a
//! set of selectors.
//!
//! # Key Types
//!
//! - [`Data`] -- named, optionally attributed content packet
//! - [`Query`] -- name prefix plus selector constraints
//! - [`Exclude`] -- component filter applied right after the query prefix
//! - [`KeyLocator`] -- claimed-signer metadata, consumed as a digest token
//! - [`SignatureInfo`] -- per-packet signing metadata
//!
//! Two encodings coexist, deliberately: the *canonical* encoding (hand-rolled
//! length-prefixed bytes) feeds digest computation and is infallible; the
//! *transport* encoding (bincode) moves packets in and out of the payload
//! store and reports failures as [`PacketError`].

pub mod data;
pub mod error;
pub mod exclude;
pub mod locator;
pub mod query;

mod canonical;

pub use data::Data;
pub use error::{PacketError, PacketResult};
pub use exclude::Exclude;
pub use locator::{KeyLocator, SignatureInfo};
pub use query::{ChildSelector, Query};
