//! Digest primitives for the Burrow repository.
//!
//! Provides the fixed-size [`Digest`] equality token and a domain-separated
//! BLAKE3 [`ContentHasher`]. Digests are never decoded or interpreted — the
//! repository compares them for equality and nothing else.
//!
//! All crypto operations wrap established libraries — no custom cryptography.

pub mod digest;
pub mod hasher;

pub use digest::{Digest, DigestError};
pub use hasher::ContentHasher;
