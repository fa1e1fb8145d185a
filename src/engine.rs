//! Search engine trait and configuration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Result, ResultSet, SearchQuery};

/// Configuration for a search engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Display name of the engine.
    pub name: String,
    /// Attribution tag prefixed to titles, e.g. `(DDG)`.
    pub tag: String,
    /// Cap on kept results, `None` for engines returning small pages.
    #[serde(default)]
    pub cap: Option<usize>,
    /// Number of result pages to request.
    #[serde(default = "default_pages")]
    pub pages: u32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Whether the engine is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_pages() -> u32 {
    1
}

fn default_timeout() -> u64 {
    10
}

fn default_enabled() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            tag: String::new(),
            cap: None,
            pages: 1,
            timeout: 10,
            enabled: true,
        }
    }
}

/// Trait for implementing search engines.
///
/// Each engine fetches its configured number of pages and returns results
/// in engine-reported rank order.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Returns the engine configuration.
    fn config(&self) -> &EngineConfig;

    /// Performs a search and returns ranked results.
    async fn search(&self, query: &SearchQuery) -> Result<ResultSet>;

    /// Returns the user agent this engine sends with its requests.
    fn user_agent(&self) -> &str;

    /// Returns the engine name.
    fn name(&self) -> &str {
        &self.config().name
    }

    /// Returns the attribution tag.
    fn tag(&self) -> &str {
        &self.config().tag
    }

    /// Returns whether the engine is enabled.
    fn is_enabled(&self) -> bool {
        self.config().enabled
    }
}
