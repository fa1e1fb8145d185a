//! Search query representation.

use serde::{Deserialize, Serialize};

/// A search query.
///
/// How many result pages to fetch is an engine-level setting, so the
/// query carries only the search terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The search terms.
    pub query: String,
}

impl SearchQuery {
    /// Creates a new search query with the given terms.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Returns the query with spaces replaced by `+`.
    ///
    /// Used for the report file name; `+` does not affect engine queries.
    pub fn sanitized_term(&self) -> String {
        self.query.trim().replace(' ', "+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_new() {
        let query = SearchQuery::new("test query");
        assert_eq!(query.query, "test query");
    }

    #[test]
    fn test_sanitized_term_replaces_spaces() {
        let query = SearchQuery::new("rust web scraping");
        assert_eq!(query.sanitized_term(), "rust+web+scraping");
    }

    #[test]
    fn test_sanitized_term_trims() {
        let query = SearchQuery::new("  rust  ");
        assert_eq!(query.sanitized_term(), "rust");
    }

    #[test]
    fn test_sanitized_term_single_word() {
        let query = SearchQuery::new("rust");
        assert_eq!(query.sanitized_term(), "rust");
    }

    #[test]
    fn test_search_query_serialization() {
        let query = SearchQuery::new("test");
        let json = serde_json::to_string(&query).unwrap();
        assert!(json.contains("\"query\":\"test\""));
    }

    #[test]
    fn test_search_query_deserialization() {
        let json = r#"{"query":"test"}"#;
        let query: SearchQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.query, "test");
    }
}
