//! Repository configuration.

use serde::{Deserialize, Serialize};

/// Default maximum number of live packets the index admits.
pub const DEFAULT_CAPACITY: usize = 100_000;

/// Configuration for a [`Repository`](crate::Repository).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RepoConfig {
    /// Maximum number of live entries the index admits. Fixed for the
    /// repository's lifetime; capacity pressure surfaces as an insert
    /// failure, never as eviction.
    pub capacity: usize,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl RepoConfig {
    /// A configuration with the given index capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { capacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity() {
        assert_eq!(RepoConfig::default().capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn explicit_capacity() {
        assert_eq!(RepoConfig::with_capacity(3).capacity, 3);
    }
}
