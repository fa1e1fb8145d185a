//! MetaGer search engine implementation.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use super::{build_client, clean_text};
use crate::agent::{self, random_agent};
use crate::{Engine, EngineConfig, Result, ResultSet, SearchError, SearchQuery, SearchResult};

/// MetaGer, the German non-profit meta search engine.
///
/// Returns 20-50 results per page depending on the user agent, so it is
/// capped like DuckDuckGo.
pub struct MetaGer {
    config: EngineConfig,
    client: Client,
    user_agent: &'static str,
}

impl MetaGer {
    /// Creates a new MetaGer engine with a randomized user agent.
    pub fn new() -> Self {
        let user_agent = random_agent(&[agent::FIREFOX, agent::CHROME, agent::EDGE, agent::SAFARI]);
        Self {
            config: EngineConfig {
                name: "MetaGer".to_string(),
                tag: "(MG)".to_string(),
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

impl Default for MetaGer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Engine for MetaGer {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn search(&self, query: &SearchQuery) -> Result<ResultSet> {
        let url = format!(
            "https://metager.org/meta/meta.ger3?eingabe={}",
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

impl MetaGer {
    fn parse_results(&self, html: &str) -> Result<ResultSet> {
        let document = Html::parse_document(html);
        let result_selector = Selector::parse("div.result")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;
        let title_selector = Selector::parse("h2.result-title a")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;
        let snippet_selector = Selector::parse("div.result-description")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;

        let mut results = ResultSet::new();

        for element in document.select(&result_selector) {
            let Some(title_elem) = element.select(&title_selector).next() else {
                continue;
            };

            let title = clean_text(&title_elem.text().collect::<String>());
            let url = title_elem.value().attr("href").unwrap_or_default().to_string();

            let snippet = element
                .select(&snippet_selector)
                .next()
                .map(|e| clean_text(&e.text().collect::<String>()))
                .unwrap_or_default();

            if !url.is_empty() && !title.is_empty() && url.starts_with("http") {
                results.push(SearchResult::new(url, title, snippet));
            }
        }

        Ok(results)
    }
}
