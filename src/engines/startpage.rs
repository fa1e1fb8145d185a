//! Startpage search engine implementation.

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};

use super::{build_client, clean_text};
use crate::agent::{self, random_agent};
use crate::{Engine, EngineConfig, Result, ResultSet, SearchError, SearchQuery, SearchResult};

/// Startpage, a privacy frontend over Google results.
///
/// Returns 10 results per page, so two pages are fetched and no cap is
/// applied. Bot-like user agents get blocked, so only mainstream browser
/// pools are used.
pub struct Startpage {
    config: EngineConfig,
    client: Client,
    user_agent: &'static str,
}

impl Startpage {
    /// Creates a new Startpage engine with a randomized user agent.
    pub fn new() -> Self {
        let user_agent = random_agent(&[agent::FIREFOX, agent::SAFARI]);
        Self {
            config: EngineConfig {
                name: "Startpage".to_string(),
                tag: "(SP)".to_string(),
                cap: None,
                pages: 2,
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

impl Default for Startpage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Engine for Startpage {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn search(&self, query: &SearchQuery) -> Result<ResultSet> {
        let mut results = ResultSet::new();

        for page in 1..=self.config.pages {
            let url = format!(
                "https://www.startpage.com/sp/search?query={}&page={}",
                urlencoding::encode(&query.query),
                page
            );

            let response = self.client.get(&url).send().await?;
            let html = response.text().await?;

            let page_results = self.parse_results(&html)?;
            if page_results.is_empty() {
                break;
            }
            for result in page_results.into_results() {
                results.push(result);
            }
        }

        Ok(results)
    }

    fn user_agent(&self) -> &str {
        self.user_agent
    }
}

impl Startpage {
    fn parse_results(&self, html: &str) -> Result<ResultSet> {
        let document = Html::parse_document(html);
        let result_selector = Selector::parse("div.w-gl__result")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;
        let title_selector = Selector::parse("a.w-gl__result-title")
            .map_err(|e| SearchError::Parse(format!("Failed to parse selector: {:?}", e)))?;
        let snippet_selector = Selector::parse("p.w-gl__description")
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
