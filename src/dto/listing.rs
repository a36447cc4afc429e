use serde::Serialize;

use crate::domain::types::SortOrder;
use crate::pagination::PaginatedResult;
use crate::query::{QueryState, Resource, ResourceFilters};

/// Everything a resource table needs to render one page.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPageData<T> {
    pub resource: &'static str,
    pub result: PaginatedResult<T>,
    /// Decoded query state the page was fetched for.
    pub query: QueryState,
    pub query_string: String,
    /// Page links for the navigation bar, `null` marking a gap.
    pub pages: Vec<Option<usize>>,
    pub sort_by: &'static str,
    pub sort_order: SortOrder,
    pub sort_fields: &'static [&'static str],
    pub filter_keys: &'static [&'static str],
    /// True when nothing matches the filters, independent of the total.
    pub empty: bool,
    /// User-visible message when the page had to be degraded.
    pub notice: Option<String>,
}

impl<T> ListingPageData<T> {
    pub fn new<R: Resource<Item = T>>(
        result: PaginatedResult<T>,
        query: QueryState,
        sort_by: &'static str,
        sort_order: SortOrder,
        notice: Option<String>,
    ) -> Self {
        Self {
            resource: R::NAME,
            pages: result.page_window(),
            empty: result.is_empty(),
            query_string: query.to_query_string(),
            result,
            query,
            sort_by,
            sort_order,
            sort_fields: R::SORT_FIELDS,
            filter_keys: R::Filters::KEYS,
            notice,
        }
    }
}
