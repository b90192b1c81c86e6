//! A single opaque component of a hierarchical name.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NameError, NameResult};

/// Bytes that render literally in the URI form; everything else is escaped.
const UNESCAPED: &[u8] = b"-._~";

/// One component of a [`Name`](crate::Name): an arbitrary byte string.
///
/// Components are opaque — the repository never interprets their contents.
/// Canonical ordering is shortest-first, then bytewise, which makes every
/// component's immediate successor well defined.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component(Vec<u8>);

impl Component {
    /// Create a component from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// The zero-length component, written `...` in URI form.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The raw bytes of this component.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the zero-length component.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The immediate next component in canonical order.
    ///
    /// Increments the bytes as a big-endian integer. When every byte carries
    /// (the all-`0xFF` component), the successor is one byte longer and all
    /// zeros — the first component of the next length class.
    pub fn successor(&self) -> Component {
        let mut bytes = self.0.clone();
        for b in bytes.iter_mut().rev() {
            if *b == 0xff {
                *b = 0;
            } else {
                *b += 1;
                return Self(bytes);
            }
        }
        Self(vec![0; self.0.len() + 1])
    }

    /// Parse one URI-form token: `...` is the empty component, `%XX` escapes
    /// a byte, everything else is taken literally.
    pub fn from_escaped(token: &str) -> NameResult<Self> {
        if token == "..." {
            return Ok(Self::empty());
        }
        let mut bytes = Vec::with_capacity(token.len());
        let mut chars = token.chars();
        while let Some(ch) = chars.next() {
            if ch != '%' {
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                continue;
            }
            let hi = chars.next().and_then(|c| c.to_digit(16));
            let lo = chars.next().and_then(|c| c.to_digit(16));
            match (hi, lo) {
                (Some(hi), Some(lo)) => bytes.push((hi * 16 + lo) as u8),
                _ => return Err(NameError::InvalidEscape(token.to_string())),
            }
        }
        Ok(Self(bytes))
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "...");
        }
        for &b in &self.0 {
            if b.is_ascii_alphanumeric() || UNESCAPED.contains(&b) {
                write!(f, "{}", b as char)?;
            } else {
                write!(f, "%{b:02X}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Component({self})")
    }
}

impl From<&str> for Component {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

impl From<&[u8]> for Component {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}
