use serde::Serialize;

use crate::domain::search::SearchResultItem;

/// Payload returned by the quick-search endpoint.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// Normalized query the results were produced for.
    pub query: String,
    pub results: Vec<SearchResultItem>,
}
