//! Search orchestration across engines.
//!
//! Engines are queried one at a time, in the order they were added. That
//! order is load-bearing: the merge overwrites duplicate URLs with the
//! content of the latest engine, so the most trusted engine goes last.

use tokio::time::{timeout, Duration};
use tracing::{debug, warn};

use crate::{Aggregator, Engine, MergedResults, Result, ResultSet, SearchError, SearchQuery};

/// Per-engine outcome of one aggregate search.
#[derive(Debug, Clone)]
pub struct EngineTally {
    /// Engine display name.
    pub name: String,
    /// Attribution tag.
    pub tag: String,
    /// Results kept after truncation.
    pub kept: usize,
}

/// Full outcome of one aggregate search.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Per-engine tallies, in query order.
    pub tallies: Vec<EngineTally>,
    /// Merged and deduplicated results.
    pub merged: MergedResults,
}

impl SearchReport {
    /// Returns the total result count before deduplication.
    pub fn combined_total(&self) -> usize {
        self.merged.combined_total
    }

    /// Returns the number of distinct URLs.
    pub fn unique_count(&self) -> usize {
        self.merged.unique_count()
    }
}

/// Aggregate search across multiple engines, queried sequentially.
pub struct Search {
    engines: Vec<Box<dyn Engine>>,
    aggregator: Aggregator,
}

impl Search {
    /// Creates a new search instance with no engines.
    pub fn new() -> Self {
        Self {
            engines: Vec::new(),
            aggregator: Aggregator::new(),
        }
    }

    /// Adds a search engine at the end of the query order.
    pub fn add_engine<E: Engine + 'static>(&mut self, engine: E) {
        self.engines.push(Box::new(engine));
    }

    /// Returns the number of configured engines.
    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    /// Returns `(name, user agent)` for each enabled engine, in query order.
    pub fn agents(&self) -> Vec<(String, String)> {
        self.engines
            .iter()
            .filter(|e| e.is_enabled())
            .map(|e| (e.name().to_string(), e.user_agent().to_string()))
            .collect()
    }

    /// Runs the query through every enabled engine, in order.
    ///
    /// Each engine runs under its configured timeout; failures and
    /// timeouts degrade to an empty set so one engine can never abort the
    /// aggregate run. Results are truncated to the engine cap, tagged,
    /// and merged.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchReport> {
        if self.engines.is_empty() {
            return Err(SearchError::NoEngines);
        }
        if query.query.trim().is_empty() {
            return Err(SearchError::InvalidQuery("Query cannot be empty".into()));
        }

        let mut tallies = Vec::new();
        let mut engine_results = Vec::new();

        for engine in &self.engines {
            let config = engine.config();
            if !config.enabled {
                debug!("Engine {} is disabled, skipping", config.name);
                continue;
            }

            let limit = Duration::from_secs(config.timeout);
            let mut set = match timeout(limit, engine.search(query)).await {
                Ok(Ok(set)) => {
                    debug!("Engine {} returned {} results", config.name, set.len());
                    set
                }
                Ok(Err(e)) => {
                    warn!("Engine {} failed: {}", config.name, e);
                    ResultSet::new()
                }
                Err(_) => {
                    warn!("Engine {} timed out after {}s", config.name, config.timeout);
                    ResultSet::new()
                }
            };

            if let Some(cap) = config.cap {
                set.truncate(cap);
            }
            set.tag_titles(&config.tag);

            tallies.push(EngineTally {
                name: config.name.clone(),
                tag: config.tag.clone(),
                kept: set.len(),
            });
            engine_results.push((config.tag.clone(), set));
        }

        let merged = self.aggregator.merge(engine_results);
        Ok(SearchReport { tallies, merged })
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}
