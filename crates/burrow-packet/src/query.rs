//! Queries: a name prefix plus selector constraints.

use burrow_name::Name;
use serde::{Deserialize, Serialize};

use crate::exclude::Exclude;
use crate::locator::KeyLocator;

/// Disambiguates among multiple eligible descendants of the query name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChildSelector {
    /// Return the lexicographically smallest match.
    #[default]
    Leftmost,
    /// Return the lexicographically greatest match.
    Rightmost,
}

/// A lookup request against the repository.
///
/// The index consumes every field read-only: the name bounds the candidate
/// range, the remaining fields narrow it to a single stored packet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Name prefix the matched packet's full name must extend (or equal).
    pub name: Name,
    /// Minimum number of components the match may have beyond the query
    /// name. Absent means unbounded.
    pub min_suffix_components: Option<usize>,
    /// Maximum number of components the match may have beyond the query
    /// name. Absent means unbounded.
    pub max_suffix_components: Option<usize>,
    /// Components rejected immediately after the query name.
    pub exclude: Exclude,
    /// Which of several eligible matches wins.
    pub child_selector: ChildSelector,
    /// When present, the match's key-locator digest must equal this
    /// locator's digest.
    pub publisher_key_locator: Option<KeyLocator>,
}

impl Query {
    /// An unconstrained query for the given prefix: unbounded suffix range,
    /// no exclusions, leftmost selection, any publisher.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            min_suffix_components: None,
            max_suffix_components: None,
            exclude: Exclude::none(),
            child_selector: ChildSelector::Leftmost,
            publisher_key_locator: None,
        }
    }

    /// Require at least `n` suffix components.
    pub fn with_min_suffix_components(mut self, n: usize) -> Self {
        self.min_suffix_components = Some(n);
        self
    }

    /// Allow at most `n` suffix components.
    pub fn with_max_suffix_components(mut self, n: usize) -> Self {
        self.max_suffix_components = Some(n);
        self
    }

    /// Install an exclude filter.
    pub fn with_exclude(mut self, exclude: Exclude) -> Self {
        self.exclude = exclude;
        self
    }

    /// Choose leftmost or rightmost disambiguation.
    pub fn with_child_selector(mut self, selector: ChildSelector) -> Self {
        self.child_selector = selector;
        self
    }

    /// Constrain matches to packets claiming this signing key.
    pub fn with_publisher(mut self, locator: KeyLocator) -> Self {
        self.publisher_key_locator = Some(locator);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_query_is_unconstrained() {
        let q = Query::new("/a".parse().unwrap());
        assert_eq!(q.min_suffix_components, None);
        assert_eq!(q.max_suffix_components, None);
        assert!(q.exclude.is_empty());
        assert_eq!(q.child_selector, ChildSelector::Leftmost);
        assert!(q.publisher_key_locator.is_none());
    }

    #[test]
    fn builders_set_fields() {
        let q = Query::new("/a".parse().unwrap())
            .with_min_suffix_components(1)
            .with_max_suffix_components(3)
            .with_exclude(Exclude::none().with("bad"))
            .with_child_selector(ChildSelector::Rightmost);
        assert_eq!(q.min_suffix_components, Some(1));
        assert_eq!(q.max_suffix_components, Some(3));
        assert!(q.exclude.is_excluded(&"bad".into()));
        assert_eq!(q.child_selector, ChildSelector::Rightmost);
    }
}
