//! Search result types.

use serde::{Deserialize, Serialize};

/// A single search result.
///
/// Immutable once constructed; the only sanctioned mutation is title
/// tagging through [`ResultSet::tag_titles`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result URL.
    pub url: String,
    /// Result title. After tagging, prefixed with the engine tag.
    pub title: String,
    /// Result description/snippet.
    pub snippet: String,
    /// Tag of the engine that produced this result, e.g. `(DDG)`.
    #[serde(default)]
    pub source_tag: String,
}

impl SearchResult {
    /// Creates a new search result.
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            snippet: snippet.into(),
            source_tag: String::new(),
        }
    }

    /// Sets the source engine tag.
    pub fn with_source_tag(mut self, tag: impl Into<String>) -> Self {
        self.source_tag = tag.into();
        self
    }
}

/// Ordered sequence of results produced by one engine for one query.
///
/// Order reflects engine-reported rank. The `links`, `titles`, and
/// `snippets` accessors return parallel sequences of equal length.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    results: Vec<SearchResult>,
}

impl ResultSet {
    /// Creates a new empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result, preserving rank order.
    pub fn push(&mut self, result: SearchResult) {
        self.results.push(result);
    }

    /// Returns the number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` when the set holds no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the results in rank order.
    pub fn items(&self) -> &[SearchResult] {
        &self.results
    }

    /// Returns the result URLs in rank order.
    pub fn links(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.url.as_str()).collect()
    }

    /// Returns the result titles in rank order.
    pub fn titles(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.title.as_str()).collect()
    }

    /// Returns the result snippets in rank order.
    pub fn snippets(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.snippet.as_str()).collect()
    }

    /// Keeps only the first `cap` results, preserving order.
    ///
    /// A no-op when the set already holds `cap` or fewer results.
    pub fn truncate(&mut self, cap: usize) {
        self.results.truncate(cap);
    }

    /// Prefixes every title with `"{tag} "` and records the source tag.
    ///
    /// Order-preserving; the tag is later used for per-engine attribution
    /// counts over the deduplicated list.
    pub fn tag_titles(&mut self, tag: &str) {
        for result in &mut self.results {
            result.title = format!("{} {}", tag, result.title);
            result.source_tag = tag.to_string();
        }
    }

    /// Consumes the set, returning the underlying results.
    pub fn into_results(self) -> Vec<SearchResult> {
        self.results
    }
}

impl FromIterator<SearchResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = SearchResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}
