//! Exclude filters.

use std::collections::BTreeSet;

use burrow_name::Component;
use serde::{Deserialize, Serialize};

/// A set of components a query rejects at the position immediately following
/// its name prefix.
///
/// An empty filter excludes nothing; entries whose names are exactly the
/// query name (no next component) are never subject to exclusion.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exclude {
    components: BTreeSet<Component>,
}

impl Exclude {
    /// The filter that excludes nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Add a component, consuming and returning the filter.
    pub fn with(mut self, component: impl Into<Component>) -> Self {
        self.components.insert(component.into());
        self
    }

    /// Add a component in place.
    pub fn insert(&mut self, component: impl Into<Component>) {
        self.components.insert(component.into());
    }

    /// Returns `true` if the filter excludes nothing.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns `true` if `component` is excluded.
    pub fn is_excluded(&self, component: &Component) -> bool {
        self.components.contains(component)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_excludes_nothing() {
        let filter = Exclude::none();
        assert!(filter.is_empty());
        assert!(!filter.is_excluded(&Component::from("a")));
    }

    #[test]
    fn excludes_listed_components_only() {
        let filter = Exclude::none().with("1").with("3");
        assert!(filter.is_excluded(&Component::from("1")));
        assert!(filter.is_excluded(&Component::from("3")));
        assert!(!filter.is_excluded(&Component::from("2")));
        assert!(!filter.is_empty());
    }
}
