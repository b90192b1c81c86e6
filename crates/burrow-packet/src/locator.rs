//! Key locators: claimed-signer metadata.

use burrow_crypto::{ContentHasher, Digest};
use burrow_name::Name;
use serde::{Deserialize, Serialize};

use crate::canonical::{put_bytes, put_name};

/// Identifies the claimed signer of a [`Data`](crate::Data) packet.
///
/// The repository never resolves or verifies a locator; it only compares the
/// digest of its canonical encoding against the token a query carries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyLocator {
    /// The signing key, referenced by name.
    KeyName(Name),
    /// The signing key, referenced by a digest of the key itself.
    KeyDigest(Digest),
}

impl KeyLocator {
    /// Deterministic digest over the canonical encoding.
    ///
    /// This is the equality token used to match a query's publisher
    /// constraint against indexed entries.
    pub fn digest(&self) -> Digest {
        let mut buf = Vec::new();
        match self {
            KeyLocator::KeyName(name) => {
                buf.push(0x01);
                put_name(&mut buf, name);
            }
            KeyLocator::KeyDigest(digest) => {
                buf.push(0x02);
                put_bytes(&mut buf, digest.as_bytes());
            }
        }
        ContentHasher::LOCATOR.hash(&buf)
    }
}

/// Signing metadata attached to a packet.
///
/// Signature *verification* is out of scope for the repository; only the
/// locator is consumed, and only as an equality token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureInfo {
    /// Where the claimed signing key lives, if the packet names one.
    pub key_locator: Option<KeyLocator>,
}

impl SignatureInfo {
    /// Metadata with no key locator.
    pub fn unattributed() -> Self {
        Self { key_locator: None }
    }

    /// Metadata claiming the given signing key.
    pub fn with_locator(locator: KeyLocator) -> Self {
        Self {
            key_locator: Some(locator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_name(uri: &str) -> KeyLocator {
        KeyLocator::KeyName(uri.parse().unwrap())
    }

    #[test]
    fn digest_is_deterministic() {
        let locator = key_name("/keys/alice");
        assert_eq!(locator.digest(), locator.digest());
    }

    #[test]
    fn different_locators_differ() {
        assert_ne!(key_name("/keys/alice").digest(), key_name("/keys/bob").digest());
    }

    #[test]
    fn name_and_digest_variants_never_collide() {
        // A KeyDigest of zeros vs a KeyName whose encoding happens to start
        // the same way: the variant tag keeps them apart.
        let by_digest = KeyLocator::KeyDigest(Digest::null());
        let by_name = key_name("/...");
        assert_ne!(by_digest.digest(), by_name.digest());
    }

    #[test]
    fn signature_info_constructors() {
        assert_eq!(SignatureInfo::unattributed().key_locator, None);
        let signed = SignatureInfo::with_locator(key_name("/keys/alice"));
        assert!(signed.key_locator.is_some());
    }
}
