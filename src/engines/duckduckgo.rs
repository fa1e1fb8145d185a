//! DuckDuckGo search engine implementation.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use super::{build_client, clean_text};
use crate::agent::{self, random_agent};
use crate::{Engine, EngineConfig, Result, ResultSet, SearchError, SearchQuery, SearchResult};

/// DuckDuckGo, queried through its HTML (no-JS) endpoint.
///
/// Returns roughly 20-60 results per page depending on the user agent,
/// so a cap keeps its share of the aggregate balanced.
pub struct DuckDuckGo {
    config: EngineConfig,
    client: Client,
    user_agent: &'static str,
}

impl DuckDuckGo {
    /// Creates a new DuckDuckGo engine with a randomized user agent.
    pub fn new() -> Self {
        let user_agent = random_agent(&[agent::FIREFOX, agent::CHROME, agent::EDGE, agent::SAFARI]);
        Self {
            config: EngineConfig {
                name: "DuckDuckGo".to_string(),
                tag: "(DDG)".to_string(),
                cap: Some(30),
                pages: 1,
                timeout: 10,
                enabled: true,
            },
            client: build_client(user_agent),
            user_agent,
        }
    }

    /// Creates with custom configuration.
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }
}

impl Default for DuckDuckGo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Engine for DuckDuckGo {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn search(&self, query: &SearchQuery) -> Result<ResultSet> {
        let url = format!(
            "https://html.duckduckgo.com/html/?q={}",
            urlencoding::encode(&query.query)
        );

        let response = self.client.get(&url).send().await?;
        let html = response.text().await?;

        self.parse_results(&html)
    }

    fn user_agent(&self) -> &str {
        self.user_agent
    }
}

impl DuckDuckGo {
    fn parse_results(&self, html: &str) -> Result<ResultSet> {
        let document = Html::parse_document(html);
        let result_selector = Selector::parse(".result")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;
        let title_selector = Selector::parse(".result__title a")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;
        let snippet_selector = Selector::parse(".result__snippet")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;

        let mut results = ResultSet::new();

        for element in document.select(&result_selector) {
            let Some(title_elem) = element.select(&title_selector).next() else {
                continue;
            };

            let title = clean_text(&title_elem.text().collect::<String>());
            let url = title_elem.value().attr("href").unwrap_or_default();

            let url = if url.starts_with("//duckduckgo.com/l/") {
                extract_redirect_url(url).unwrap_or_else(|| url.to_string())
            } else {
                url.to_string()
            };

            let snippet = element
                .select(&snippet_selector)
                .next()
                .map(|e| clean_text(&e.text().collect::<String>()))
                .unwrap_or_default();

            if !url.is_empty() && !title.is_empty() {
                results.push(SearchResult::new(url, title, snippet));
            }
        }

        Ok(results)
    }
}

/// Unwraps DuckDuckGo's `uddg` redirect links to the destination URL.
fn extract_redirect_url(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(&format!("https:{raw}")).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "uddg")
        .map(|(_, value)| value.into_owned())
}
