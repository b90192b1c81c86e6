//! Hierarchical names: ordered sequences of components.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::error::{NameError, NameResult};

/// A hierarchical identifier: an ordered sequence of opaque [`Component`]s.
///
/// Names are totally ordered component-wise (using the canonical component
/// order), so a proper prefix sorts before every name it is a prefix of, and
/// all descendants of a name form one contiguous run in a sorted container.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Name(Vec<Component>);

impl Name {
    /// The empty (root) name, written `/`.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build a name from components.
    pub fn from_components(components: Vec<Component>) -> Self {
        Self(components)
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the root name.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The component at depth `i`, if any.
    pub fn get(&self, i: usize) -> Option<&Component> {
        self.0.get(i)
    }

    /// Iterate the components in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.0.iter()
    }

    /// Append a component in place.
    pub fn push(&mut self, component: impl Into<Component>) {
        self.0.push(component.into());
    }

    /// A copy of this name with one more component appended.
    pub fn child(&self, component: impl Into<Component>) -> Name {
        let mut child = self.clone();
        child.push(component);
        child
    }

    /// Returns `true` if `self` is a leading subsequence of `other`.
    ///
    /// Every name is a prefix of itself; the root name is a prefix of
    /// everything.
    pub fn is_prefix_of(&self, other: &Name) -> bool {
        self.0.len() <= other.0.len() && self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }

    /// The first `depth` components. Returns the whole name when `depth`
    /// exceeds its length.
    pub fn prefix(&self, depth: usize) -> Name {
        Self(self.0.iter().take(depth).cloned().collect())
    }

    /// The immediate next name that is not a descendant of this one.
    ///
    /// Produced by replacing the last component with its successor, so the
    /// half-open range `[name, name.successor())` contains exactly `name` and
    /// its descendants. The root name is a prefix of every name and therefore
    /// has no successor; callers treat its upper bound as unbounded.
    pub fn successor(&self) -> Option<Name> {
        let (last, init) = self.0.split_last()?;
        let mut components = init.to_vec();
        components.push(last.successor());
        Some(Self(components))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "/");
        }
        for component in &self.0 {
            write!(f, "/{component}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({self})")
    }
}

impl FromStr for Name {
    type Err = NameError;

    /// Parse the URI form: `/a/b/c`. The leading slash is optional; `/` and
    /// the empty string parse to the root name.
    fn from_str(s: &str) -> NameResult<Self> {
        let body = s.strip_prefix('/').unwrap_or(s);
        if body.is_empty() {
            return Ok(Self::empty());
        }
        body.split('/')
            .map(|token| {
                if token.is_empty() {
                    Err(NameError::EmptyComponent(s.to_string()))
                } else {
                    Component::from_escaped(token)
                }
            })
            .collect()
    }
}

impl FromIterator<Component> for Name {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(uri: &str) -> Name {
        uri.parse().unwrap()
    }

    #[test]
    fn parse_and_display_roundtrip() {
        for uri in ["/", "/a", "/a/b/c", "/a/.../b", "/%00%FF/x"] {
            let n = name(uri);
            assert_eq!(n.to_string(), uri);
            assert_eq!(name(&n.to_string()), n);
        }
    }

    #[test]
    fn parse_without_leading_slash() {
        assert_eq!(name("a/b"), name("/a/b"));
        assert_eq!(name(""), Name::empty());
    }

    #[test]
    fn parse_rejects_empty_token() {
        assert!(matches!(
            "/a//b".parse::<Name>(),
            Err(NameError::EmptyComponent(_))
        ));
    }

    #[test]
    fn prefix_relation() {
        let n = name("/a/b/c");
        assert!(name("/").is_prefix_of(&n));
        assert!(name("/a").is_prefix_of(&n));
        assert!(name("/a/b/c").is_prefix_of(&n));
        assert!(!name("/a/b/c/d").is_prefix_of(&n));
        assert!(!name("/a/x").is_prefix_of(&n));
    }

    #[test]
    fn prefix_truncation() {
        let n = name("/a/b/c");
        assert_eq!(n.prefix(0), Name::empty());
        assert_eq!(n.prefix(2), name("/a/b"));
        assert_eq!(n.prefix(9), n);
    }

    #[test]
    fn ordering_puts_prefix_before_descendants() {
        assert!(name("/a") < name("/a/b"));
        assert!(name("/a/b") < name("/a/b/c"));
        assert!(name("/a/z") < name("/b"));
    }

    #[test]
    fn successor_bounds_the_descendant_range() {
        let n = name("/a/b");
        let succ = n.successor().unwrap();
        assert_eq!(succ, name("/a/c"));
        for descendant in ["/a/b", "/a/b/x", "/a/b/x/y", "/a/b/..."] {
            let d = name(descendant);
            assert!(n <= d && d < succ, "{d} should fall inside [{n}, {succ})");
        }
        assert!(!(name("/a/c") < succ));
        assert!(name("/a/a") < n);
    }

    #[test]
    fn root_has_no_successor() {
        assert_eq!(Name::empty().successor(), None);
    }

    #[test]
    fn child_appends() {
        let n = name("/a").child("b");
        assert_eq!(n, name("/a/b"));
        assert_eq!(n.len(), 2);
        assert_eq!(n.get(1), Some(&Component::from("b")));
    }

    #[test]
    fn serde_roundtrip() {
        let n = name("/a/%00/c");
        let encoded = bincode::serialize(&n).unwrap();
        let decoded: Name = bincode::deserialize(&encoded).unwrap();
        assert_eq!(n, decoded);
    }
}
