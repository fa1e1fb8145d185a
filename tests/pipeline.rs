//! End-to-end pipeline tests with mock engines.
//!
//! Exercises the full limit -> tag -> merge -> report flow without any
//! network access.

use async_trait::async_trait;

use aggregate_search::{
    Engine, EngineConfig, Reporter, Result, ResultSet, Search, SearchQuery, SearchResult,
};

struct MockEngine {
    config: EngineConfig,
    results: Vec<SearchResult>,
}

impl MockEngine {
    fn new(name: &str, tag: &str, cap: Option<usize>, results: Vec<SearchResult>) -> Self {
        Self {
            config: EngineConfig {
                name: name.to_string(),
                tag: tag.to_string(),
                cap,
                ..Default::default()
            },
            results,
        }
    }
}

#[async_trait]
impl Engine for MockEngine {
    fn config(&self) -> &EngineConfig {
        &self.config
    }

    async fn search(&self, _query: &SearchQuery) -> Result<ResultSet> {
        Ok(self.results.iter().cloned().collect())
    }

    fn user_agent(&self) -> &str {
        "mock-agent/1.0"
    }
}

fn result(url: &str, title: &str) -> SearchResult {
    SearchResult::new(url, title, format!("About {title}"))
}

/// Four engines in the production order, with overlap between them.
fn build_search() -> Search {
    let mut search = Search::new();
    search.add_engine(MockEngine::new(
        "DuckDuckGo",
        "(DDG)",
        Some(30),
        vec![
            result("https://shared.com/a", "Shared A"),
            result("https://ddg-only.com", "DDG Only"),
        ],
    ));
    search.add_engine(MockEngine::new(
        "MetaGer",
        "(MG)",
        Some(30),
        vec![
            result("https://shared.com/a", "Shared A via MG"),
            result("https://mg-only.com", "MG Only"),
        ],
    ));
    search.add_engine(MockEngine::new(
        "Startpage",
        "(SP)",
        None,
        vec![result("https://sp-only.com", "SP Only")],
    ));
    search.add_engine(MockEngine::new(
        "Mojeek",
        "(Moj)",
        None,
        vec![result("https://shared.com/a", "Shared A via Moj")],
    ));
    search
}

#[tokio::test]
async fn pipeline_merges_with_last_engine_winning() {
    let search = build_search();
    let report = search.search(&SearchQuery::new("test")).await.unwrap();

    assert_eq!(report.combined_total(), 6);
    assert_eq!(report.unique_count(), 4);

    // shared.com/a was first seen from DuckDuckGo, so it keeps position 0,
    // but Mojeek was queried last so its content survives.
    let items = report.merged.unique().items();
    assert_eq!(items[0].url, "https://shared.com/a");
    assert_eq!(items[0].title, "(Moj) Shared A via Moj");
    assert_eq!(items[0].source_tag, "(Moj)");
}

#[tokio::test]
async fn pipeline_tag_counts_sum_to_unique_total() {
    let search = build_search();
    let report = search.search(&SearchQuery::new("test")).await.unwrap();

    let unique = report.merged.unique();
    let sum: usize = ["(DDG)", "(MG)", "(SP)", "(Moj)"]
        .iter()
        .map(|tag| unique.count_for_tag(tag))
        .sum();
    assert_eq!(sum, report.unique_count());

    // The shared URL is attributed to Mojeek, which won the overwrite.
    assert_eq!(unique.count_for_tag("(Moj)"), 1);
    assert_eq!(unique.count_for_tag("(DDG)"), 1);
    assert_eq!(unique.count_for_tag("(MG)"), 1);
    assert_eq!(unique.count_for_tag("(SP)"), 1);
}

#[tokio::test]
async fn pipeline_caps_high_volume_engines() {
    let many: Vec<SearchResult> = (0..50)
        .map(|i| result(&format!("https://flood.com/{i}"), "flood"))
        .collect();

    let mut search = Search::new();
    search.add_engine(MockEngine::new("DuckDuckGo", "(DDG)", Some(30), many));

    let report = search.search(&SearchQuery::new("test")).await.unwrap();

    assert_eq!(report.tallies[0].kept, 30);
    assert_eq!(report.unique_count(), 30);
    let items = report.merged.unique().items();
    assert_eq!(items[0].url, "https://flood.com/0");
    assert_eq!(items[29].url, "https://flood.com/29");
}

#[tokio::test]
async fn pipeline_report_written_and_appended() {
    let dir = tempfile::tempdir().unwrap();
    let search = build_search();
    let query = SearchQuery::new("rust testing");
    let sanitized = query.sanitized_term();

    for _ in 0..2 {
        let report = search.search(&query).await.unwrap();
        let mut reporter = Reporter::in_dir(&sanitized, dir.path()).unwrap();
        reporter.header(&sanitized).unwrap();
        for tally in &report.tallies {
            reporter.engine_kept(tally.kept, &tally.name, &tally.tag).unwrap();
        }
        reporter
            .totals(report.combined_total(), report.unique_count())
            .unwrap();
        for item in report.merged.unique().items() {
            reporter.result_block(item).unwrap();
        }
        reporter.banner(report.unique_count()).unwrap();
    }

    let contents =
        std::fs::read_to_string(dir.path().join("Results_rust+testing.txt")).unwrap();

    // Both runs were appended, not truncated.
    assert_eq!(contents.matches("SEARCH TERM: rust+testing").count(), 2);
    assert_eq!(contents.matches("END of 4 results").count(), 2);
    assert!(contents.contains("Keeping the first 2 results from DuckDuckGo (DDG)"));
    assert!(contents.contains("Kept 6 total results."));
    assert!(contents.contains("There are 4 unique results."));
    assert!(contents.contains("(Moj) Shared A via Moj"));
    // The overwritten titles never reach the report.
    assert!(!contents.contains("(DDG) Shared A\n"));
}
