// src/generators/catalog.rs

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::models::CatalogStats;

const WORDS_RAW: &str = include_str!("../../assets/words.txt");

lazy_static! {
    static ref CATALOG: WordCatalog = WordCatalog::from_lines(WORDS_RAW);
}

/// Immutable dictionary of lowercase words, bucketed by exact length.
///
/// Built once at first access and shared read-only for the life of the
/// process, so concurrent callers need no locking.
pub struct WordCatalog {
    buckets: HashMap<usize, Vec<&'static str>>,
    all: Vec<&'static str>,
}

impl WordCatalog {
    /// The process-wide catalog parsed from the embedded word list.
    pub fn global() -> &'static WordCatalog {
        &CATALOG
    }

    fn from_lines(data: &'static str) -> Self {
        let mut buckets: HashMap<usize, Vec<&'static str>> = HashMap::new();
        let mut all = Vec::new();

        for word in data
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
        {
            buckets.entry(word.len()).or_default().push(word);
            all.push(word);
        }

        WordCatalog { buckets, all }
    }

    #[cfg(test)]
    pub(crate) fn for_tests(data: &'static str) -> Self {
        Self::from_lines(data)
    }

    /// All words of exactly `len` characters. An absent bucket is a valid,
    /// queryable state and yields an empty slice.
    pub fn words_of_length(&self, len: usize) -> &[&'static str] {
        self.buckets.get(&len).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All words no longer than `max_len` characters.
    pub fn words_up_to(&self, max_len: usize) -> Vec<&'static str> {
        self.all
            .iter()
            .copied()
            .filter(|w| w.len() <= max_len)
            .collect()
    }

    /// Flat view of every word in the catalog.
    pub fn all_words(&self) -> &[&'static str] {
        &self.all
    }

    pub fn stats(&self) -> CatalogStats {
        let buckets = self
            .buckets
            .iter()
            .map(|(len, words)| (*len, words.len()))
            .collect();

        CatalogStats {
            total_words: self.all.len(),
            buckets,
        }
    }
}
