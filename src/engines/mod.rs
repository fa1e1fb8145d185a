//! Search engine implementations.
//!
//! All four engines are privacy-oriented and scrape server-rendered HTML.

mod duckduckgo;
mod metager;
mod mojeek;
mod startpage;

pub use duckduckgo::DuckDuckGo;
pub use metager::MetaGer;
pub use mojeek::Mojeek;
pub use startpage::Startpage;

use std::sync::OnceLock;

use regex::Regex;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::Client;

/// Builds an HTTP client with the given user agent and browser-like headers.
pub(crate) fn build_client(user_agent: &str) -> Client {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-GB,en;q=0.5"));

    Client::builder()
        .user_agent(user_agent)
        .default_headers(headers)
        .build()
        .expect("Failed to create HTTP client")
}

/// Collapses runs of whitespace in scraped text to single spaces.
pub(crate) fn clean_text(text: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let re = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));
    re.replace_all(text.trim(), " ").into_owned()
}
