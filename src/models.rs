// src/models.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Smallest password length the adapters accept.
pub const MIN_REQUESTED_LENGTH: usize = 8;

/// Largest password length the adapters accept.
pub const MAX_REQUESTED_LENGTH: usize = 50;

/// Length used when a request does not specify one.
pub const DEFAULT_REQUESTED_LENGTH: usize = 16;

/// Length policy enforced by the presentation and API layers. The composer
/// itself accepts any length and degrades gracefully outside these bounds.
pub fn length_in_policy(requested: usize) -> bool {
    (MIN_REQUESTED_LENGTH..=MAX_REQUESTED_LENGTH).contains(&requested)
}

/// Word catalog distribution, as reported by the catalog endpoint and the
/// `catalog` subcommand.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogStats {
    /// Total number of words in the catalog
    pub total_words: usize,
    /// Number of words per word length, keyed by length
    pub buckets: BTreeMap<usize, usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_policy_bounds() {
        assert!(!length_in_policy(7));
        assert!(length_in_policy(8));
        assert!(length_in_policy(16));
        assert!(length_in_policy(50));
        assert!(!length_in_policy(51));
    }

    #[test]
    fn test_default_length_is_in_policy() {
        assert!(length_in_policy(DEFAULT_REQUESTED_LENGTH));
    }
}
