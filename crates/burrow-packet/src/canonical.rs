//! Canonical byte encoding shared by digest computations.
//!
//! Length-prefixed and unambiguous: every field is preceded by its byte
//! length as a little-endian `u64`, names additionally by their component
//! count. Deterministic by construction and infallible, unlike the bincode
//! transport codec.

use burrow_name::Name;

pub(crate) fn put_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    buf.extend_from_slice(&(bytes.len() as u64).to_le_bytes());
    buf.extend_from_slice(bytes);
}

pub(crate) fn put_name(buf: &mut Vec<u8>, name: &Name) {
    buf.extend_from_slice(&(name.len() as u64).to_le_bytes());
    for component in name.iter() {
        put_bytes(buf, component.as_bytes());
    }
}
