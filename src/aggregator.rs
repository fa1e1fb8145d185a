//! Result merging and URL deduplication.
//!
//! Engines are merged in the caller-supplied order; a duplicate URL keeps
//! the position where it was first seen but takes its title and snippet
//! from the last engine that reported it. Placing the most trusted engine
//! last therefore lets its content win the overwrite.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::{ResultSet, SearchResult};

/// Insertion-ordered map from URL to the winning [`SearchResult`].
///
/// Policy: first-seen position, last-seen content. Re-inserting a URL
/// overwrites the stored result in place without moving it.
#[derive(Debug, Clone, Default)]
pub struct UniqueResults {
    order: Vec<SearchResult>,
    index: HashMap<String, usize>,
}

impl UniqueResults {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a result, overwriting any prior entry with the same URL.
    pub fn insert(&mut self, result: SearchResult) {
        match self.index.entry(result.url.clone()) {
            Entry::Occupied(slot) => {
                self.order[*slot.get()] = result;
            }
            Entry::Vacant(slot) => {
                slot.insert(self.order.len());
                self.order.push(result);
            }
        }
    }

    /// Returns the number of distinct URLs.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` when no results have been inserted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the deduplicated results in first-insertion order.
    pub fn items(&self) -> &[SearchResult] {
        &self.order
    }

    /// Counts unique results whose tagged title contains `tag`.
    ///
    /// Attribution is computed from the title text, so a result counts
    /// toward the engine that won its content overwrite.
    pub fn count_for_tag(&self, tag: &str) -> usize {
        self.order.iter().filter(|r| r.title.contains(tag)).count()
    }

    /// Consumes the map, returning results in first-insertion order.
    pub fn into_results(self) -> Vec<SearchResult> {
        self.order
    }
}

/// Outcome of merging all engines' tagged result sets.
#[derive(Debug, Clone)]
pub struct MergedResults {
    /// Total results across all engines before deduplication.
    pub combined_total: usize,
    unique: UniqueResults,
}

impl MergedResults {
    /// Returns the deduplicated results.
    pub fn unique(&self) -> &UniqueResults {
        &self.unique
    }

    /// Returns the number of distinct URLs.
    pub fn unique_count(&self) -> usize {
        self.unique.len()
    }
}

/// Merges per-engine result sets into one deduplicated sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator;

impl Aggregator {
    /// Creates a new aggregator.
    pub fn new() -> Self {
        Self
    }

    /// Merges the given sets, iterated in the order supplied.
    ///
    /// Every result of every engine is inserted into a [`UniqueResults`]
    /// map in engine order then in-list order, so for a duplicated URL the
    /// last engine in the sequence supplies the surviving content. Engines
    /// with empty sets contribute nothing.
    pub fn merge(&self, engine_results: Vec<(String, ResultSet)>) -> MergedResults {
        let mut combined_total = 0;
        let mut unique = UniqueResults::new();

        for (_tag, set) in engine_results {
            combined_total += set.len();
            for result in set.into_results() {
                unique.insert(result);
            }
        }

        MergedResults {
            combined_total,
            unique,
        }
    }
}
