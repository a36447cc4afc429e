//! Validated listing request derived from a [`QueryState`].

use crate::domain::types::SortOrder;
use crate::query::filters::ResourceFilters;
use crate::query::resource::Resource;
use crate::query::{PAGE, QueryState, SEARCH, SORT_BY, SORT_ORDER};

/// Everything a listing endpoint needs to produce one page of `R`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingQuery<R: Resource> {
    pub search: Option<String>,
    pub sort_by: &'static str,
    pub sort_order: SortOrder,
    pub page: usize,
    pub limit: usize,
    pub filters: R::Filters,
}

impl<R: Resource> ListingQuery<R> {
    /// First page in the default order with no search or filters.
    pub fn new(limit: usize) -> Self {
        Self {
            search: None,
            sort_by: R::DEFAULT_SORT_FIELD,
            sort_order: SortOrder::default(),
            page: 1,
            limit: limit.max(1),
            filters: R::Filters::default(),
        }
    }

    /// Applies the resource schema to `state`.
    ///
    /// Unknown sort fields fall back to the resource default and invalid
    /// filter values are dropped.
    pub fn from_state(state: &QueryState, limit: usize) -> Self {
        let sort_by = match state.get(SORT_BY) {
            Some(field) => R::sort_field(field).unwrap_or_else(|| {
                log::debug!(
                    "Unknown sort field {field:?} for {}, using {}",
                    R::NAME,
                    R::DEFAULT_SORT_FIELD
                );
                R::DEFAULT_SORT_FIELD
            }),
            None => R::DEFAULT_SORT_FIELD,
        };

        Self {
            search: state.search().map(str::to_string),
            sort_by,
            sort_order: state.sort_order(),
            page: state.page(),
            limit: limit.max(1),
            filters: R::Filters::from_state(state),
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_string();
        self.search = Some(term).filter(|s| !s.is_empty());
        self
    }

    pub fn sort(mut self, field: &str, order: SortOrder) -> Self {
        if let Some(field) = R::sort_field(field) {
            self.sort_by = field;
            self.sort_order = order;
        }
        self
    }

    pub fn paginate(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn filters(mut self, filters: R::Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Query parameters sent to the backend listing endpoint.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            (PAGE.to_string(), self.page.to_string()),
            ("limit".to_string(), self.limit.to_string()),
            (SORT_BY.to_string(), self.sort_by.to_string()),
            (SORT_ORDER.to_string(), self.sort_order.to_string()),
        ];
        if let Some(search) = &self.search {
            params.push((SEARCH.to_string(), search.clone()));
        }
        params.extend(
            self.filters
                .to_params()
                .into_iter()
                .map(|(key, value)| (key.to_string(), value)),
        );
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{OrderStatus, PaymentStatus};
    use crate::query::decode;
    use crate::query::resource::{Orders, Products};

    #[test]
    fn from_state_applies_defaults() {
        let query = ListingQuery::<Products>::from_state(&decode(""), 10);

        assert_eq!(query, ListingQuery::<Products>::new(10));
        assert_eq!(query.sort_by, "createdAt");
        assert_eq!(query.page, 1);
    }

    #[test]
    fn from_state_validates_against_schema() {
        let state = decode(
            "sort_by=password&sort_order=desc&page=2&status=lost&paymentStatus=refunded&search=lamp",
        );
        let query = ListingQuery::<Orders>::from_state(&state, 25);

        assert_eq!(query.sort_by, "createdAt");
        assert_eq!(query.sort_order, SortOrder::Desc);
        assert_eq!(query.page, 2);
        assert_eq!(query.search.as_deref(), Some("lamp"));
        assert_eq!(query.filters.status, None);
        assert_eq!(query.filters.payment_status, Some(PaymentStatus::Refunded));
    }

    #[test]
    fn to_params_includes_paging_sorting_and_filters() {
        let mut query = ListingQuery::<Orders>::new(10)
            .search(" mug ")
            .sort("total", SortOrder::Desc)
            .paginate(3);
        query.filters.status = Some(OrderStatus::Pending);

        let params = query.to_params();

        let expected: Vec<(String, String)> = [
            ("page", "3"),
            ("limit", "10"),
            ("sort_by", "total"),
            ("sort_order", "desc"),
            ("search", "mug"),
            ("status", "pending"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(params, expected);
    }
}
