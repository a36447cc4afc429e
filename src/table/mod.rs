//! Resource table controller: turns sort, filter, search and paging intents
//! into new query strings.
//!
//! The controller never fetches or caches pages itself. Every intent goes
//! through [`QueryState::apply`] and hands the resulting query string to the
//! injected navigation callback, which is the only thing that triggers a new
//! fetch.

use std::marker::PhantomData;

use crate::domain::types::SortOrder;
use crate::pagination::PaginatedResult;
use crate::query::{
    ALL, QueryPatch, QueryState, Resource, ResourceFilters, SEARCH, SORT_BY, SORT_ORDER,
};

pub mod loader;

pub use loader::{ListingLoader, LoadOutcome, LoadTicket};

/// How rows are laid out. Local to the mounted view, never part of the URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Table,
    Grid,
}

/// Append-only record of query strings pushed by a controller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<String>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, query_string: String) {
        self.entries.push(query_string);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

pub struct ResourceTableController<R, F> {
    state: QueryState,
    total_pages: usize,
    filter_count: usize,
    total_count: usize,
    display_mode: DisplayMode,
    navigate: F,
    resource: PhantomData<R>,
}

impl<R, F> ResourceTableController<R, F>
where
    R: Resource,
    F: FnMut(String),
{
    /// Mounts the controller over the current query state and the page it
    /// produced. `navigate` receives every new query string.
    pub fn new<T>(state: QueryState, result: &PaginatedResult<T>, navigate: F) -> Self {
        Self {
            state,
            total_pages: result.total_pages,
            filter_count: result.filter_count,
            total_count: result.total_count,
            display_mode: DisplayMode::default(),
            navigate,
            resource: PhantomData,
        }
    }

    pub fn query_state(&self) -> &QueryState {
        &self.state
    }

    pub fn page(&self) -> usize {
        self.state.page()
    }

    pub fn sort_field(&self) -> &str {
        self.state
            .get(SORT_BY)
            .and_then(R::sort_field)
            .unwrap_or(R::DEFAULT_SORT_FIELD)
    }

    pub fn sort_order(&self) -> SortOrder {
        self.state.sort_order()
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn filter_count(&self) -> usize {
        self.filter_count
    }

    /// The "no results" view is shown iff nothing matches the filters.
    pub fn is_empty_state(&self) -> bool {
        self.filter_count == 0
    }

    /// Refreshes page metadata once the fetch for the current state resolves.
    pub fn on_result<T>(&mut self, result: &PaginatedResult<T>) {
        self.total_pages = result.total_pages;
        self.filter_count = result.filter_count;
        self.total_count = result.total_count;
    }

    pub fn set_sort_field(&mut self, field: &str) -> Option<String> {
        let Some(field) = R::sort_field(field) else {
            log::debug!("Ignoring unknown sort field {field:?} for {}", R::NAME);
            return None;
        };
        self.push(QueryPatch::new().set(SORT_BY, field))
    }

    pub fn set_sort_order(&mut self, order: &str) -> Option<String> {
        let order: SortOrder = order.parse().ok()?;
        self.push(QueryPatch::new().set(SORT_ORDER, order.as_str()))
    }

    /// Moves to page `page`, clamped to the available pages.
    ///
    /// Nothing is pushed when the clamped page is the current one.
    pub fn set_page(&mut self, page: usize) -> Option<String> {
        let last_page = self.total_pages.max(1);
        let page = page.clamp(1, last_page);
        if page == self.page() {
            return None;
        }
        self.push(QueryPatch::page(page))
    }

    /// Sets a resource filter; an empty or `"all"` value clears it.
    pub fn set_filter(&mut self, key: &str, value: &str) -> Option<String> {
        if !R::Filters::KEYS.contains(&key) {
            log::debug!("Ignoring unknown filter {key:?} for {}", R::NAME);
            return None;
        }
        let value = value.trim();
        if value.is_empty() || value == ALL {
            return self.push(QueryPatch::new().clear(key));
        }
        if !R::Filters::accepts(key, value) {
            log::debug!("Ignoring invalid {key:?} filter value {value:?}");
            return None;
        }
        self.push(QueryPatch::new().set(key, value))
    }

    pub fn set_search(&mut self, text: &str) -> Option<String> {
        self.push(QueryPatch::new().set(SEARCH, text.trim()))
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display_mode = match self.display_mode {
            DisplayMode::Table => DisplayMode::Grid,
            DisplayMode::Grid => DisplayMode::Table,
        };
        self.display_mode
    }

    fn push(&mut self, patch: QueryPatch) -> Option<String> {
        self.state = self.state.apply(&patch);
        let query_string = self.state.to_query_string();
        (self.navigate)(query_string.clone());
        Some(query_string)
    }
}
