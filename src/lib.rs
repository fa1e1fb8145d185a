//! # aggregate-search
//!
//! A command-line web search aggregator for privacy-oriented search engines.
//!
//! Engines are queried sequentially in a fixed, caller-chosen order; each
//! engine's results are capped, tagged with an attribution prefix, then
//! merged into one URL-deduplicated report with per-engine counts, written
//! to the console and an append-only text file.
//!
//! ## Example
//!
//! ```rust,no_run
//! use aggregate_search::{engines::{DuckDuckGo, Mojeek}, Search, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut search = Search::new();
//!     search.add_engine(DuckDuckGo::new());
//!     // Last engine wins duplicate-URL content overwrites.
//!     search.add_engine(Mojeek::new());
//!
//!     let query = SearchQuery::new("rust programming");
//!     let report = search.search(&query).await?;
//!
//!     for result in report.merged.unique().items() {
//!         println!("{}: {}", result.title, result.url);
//!     }
//!     Ok(())
//! }
//! ```

mod aggregator;
mod engine;
mod error;
mod query;
mod report;
mod result;
mod search;

pub mod agent;
pub mod engines;

pub use aggregator::{Aggregator, MergedResults, UniqueResults};
pub use engine::{Engine, EngineConfig};
pub use error::{Result, SearchError};
pub use query::SearchQuery;
pub use report::Reporter;
pub use result::{ResultSet, SearchResult};
pub use search::{EngineTally, Search, SearchReport};
