//! Content packets.

use burrow_crypto::ContentHasher;
use burrow_name::{Component, Name};
use serde::{Deserialize, Serialize};

use crate::canonical::{put_bytes, put_name};
use crate::error::{PacketError, PacketResult};
use crate::locator::{KeyLocator, SignatureInfo};

/// A named unit of content.
///
/// The *full name* of a packet is its name plus one trailing digest component
/// computed over the packet's canonical encoding, so two packets published
/// under the same name but with different content or attribution still occupy
/// distinct index slots. The repository always indexes full names.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    /// The name the packet was published under.
    pub name: Name,
    /// The content bytes. Opaque to the repository.
    pub content: Vec<u8>,
    /// Signing metadata; only the key locator is consumed.
    pub signature: SignatureInfo,
}

impl Data {
    /// Create an unattributed packet.
    pub fn new(name: Name, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name,
            content: content.into(),
            signature: SignatureInfo::unattributed(),
        }
    }

    /// Attach a key locator, consuming and returning the packet.
    pub fn with_locator(mut self, locator: KeyLocator) -> Self {
        self.signature = SignatureInfo::with_locator(locator);
        self
    }

    /// The published name plus the implicit digest component.
    pub fn full_name(&self) -> Name {
        let digest = ContentHasher::PACKET.hash(&self.canonical_bytes());
        self.name.child(Component::new(digest.as_bytes().to_vec()))
    }

    /// Transport encoding for the payload store.
    pub fn to_bytes(&self) -> PacketResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| PacketError::Encode(e.to_string()))
    }

    /// Decode a packet from its transport encoding.
    pub fn from_bytes(bytes: &[u8]) -> PacketResult<Self> {
        bincode::deserialize(bytes).map_err(|e| PacketError::Decode(e.to_string()))
    }

    fn canonical_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        put_name(&mut buf, &self.name);
        put_bytes(&mut buf, &self.content);
        match &self.signature.key_locator {
            None => buf.push(0x00),
            Some(locator) => {
                buf.push(0x01);
                put_bytes(&mut buf, locator.digest().as_bytes());
            }
        }
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(uri: &str) -> Name {
        uri.parse().unwrap()
    }

    #[test]
    fn full_name_appends_one_component() {
        let data = Data::new(name("/a/b"), b"payload".to_vec());
        let full = data.full_name();
        assert_eq!(full.len(), 3);
        assert!(data.name.is_prefix_of(&full));
    }

    #[test]
    fn full_name_is_deterministic() {
        let a = Data::new(name("/a"), b"x".to_vec());
        let b = Data::new(name("/a"), b"x".to_vec());
        assert_eq!(a.full_name(), b.full_name());
    }

    #[test]
    fn full_name_tracks_content() {
        let a = Data::new(name("/a"), b"x".to_vec());
        let b = Data::new(name("/a"), b"y".to_vec());
        assert_ne!(a.full_name(), b.full_name());
    }

    #[test]
    fn full_name_tracks_attribution() {
        let plain = Data::new(name("/a"), b"x".to_vec());
        let signed = Data::new(name("/a"), b"x".to_vec())
            .with_locator(KeyLocator::KeyName(name("/keys/alice")));
        assert_ne!(plain.full_name(), signed.full_name());
    }

    #[test]
    fn transport_roundtrip() {
        let data = Data::new(name("/a/b"), b"payload".to_vec())
            .with_locator(KeyLocator::KeyName(name("/keys/alice")));
        let decoded = Data::from_bytes(&data.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded, data);
        assert_eq!(decoded.full_name(), data.full_name());
    }

    #[test]
    fn from_bytes_rejects_garbage() {
        assert!(matches!(
            Data::from_bytes(&[0xde, 0xad]),
            Err(PacketError::Decode(_))
        ));
    }
}
