//! Query-state codec: the URL query string is the single source of truth for
//! what a listing view fetches.
//!
//! [`decode`] turns a query string into a normalized [`QueryState`];
//! [`encode`] applies a [`QueryPatch`] and serializes the result. Values that
//! are empty or equal to [`ALL`] are never stored, and any patch touching a key
//! other than `page` drops the page number.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::types::SortOrder;

pub mod filters;
pub mod listing;
pub mod resource;

pub use filters::ResourceFilters;
pub use listing::ListingQuery;
pub use resource::Resource;

pub const SEARCH: &str = "search";
pub const STATUS: &str = "status";
pub const SORT_BY: &str = "sort_by";
pub const SORT_ORDER: &str = "sort_order";
pub const PAGE: &str = "page";

/// Sentinel filter value meaning "no filter".
pub const ALL: &str = "all";

fn is_absent(value: &str) -> bool {
    value.is_empty() || value == ALL
}

fn parse_page(value: &str) -> Option<usize> {
    value.parse::<usize>().ok().filter(|page| *page >= 1)
}

/// Decoded form of a listing URL query string.
///
/// Keys are kept sorted so serialization is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryState(BTreeMap<String, String>);

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Current page, 1 when absent.
    pub fn page(&self) -> usize {
        self.get(PAGE).and_then(parse_page).unwrap_or(1)
    }

    /// Current sort direction, ascending when absent or unrecognised.
    pub fn sort_order(&self) -> SortOrder {
        self.get(SORT_ORDER)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Current sort field, `default` when absent.
    pub fn sort_by<'a>(&'a self, default: &'a str) -> &'a str {
        self.get(SORT_BY).unwrap_or(default)
    }

    pub fn search(&self) -> Option<&str> {
        self.get(SEARCH)
    }

    /// Sets `key`, or removes it when `value` is empty or `"all"`.
    ///
    /// A `page` that is not a positive integer is removed as well.
    pub fn set(&mut self, key: &str, value: &str) {
        let value = value.trim();
        if is_absent(value) {
            self.0.remove(key);
            return;
        }
        if key == PAGE {
            match parse_page(value) {
                Some(page) => {
                    self.0.insert(PAGE.to_string(), page.to_string());
                }
                None => {
                    self.0.remove(PAGE);
                }
            }
            return;
        }
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }

    /// Returns the state obtained by applying `patch`.
    pub fn apply(&self, patch: &QueryPatch) -> QueryState {
        let mut next = self.clone();
        for (key, value) in &patch.0 {
            match value {
                Some(value) => next.set(key, value),
                None => next.remove(key),
            }
        }
        if patch.touches_filters() {
            next.remove(PAGE);
        }
        next
    }

    /// Serializes the state as a form-urlencoded query string (no leading `?`).
    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(&self.0).unwrap_or_else(|err| {
            log::error!("Failed to serialize query state: {err}");
            String::new()
        })
    }
}

impl<K, V> FromIterator<(K, V)> for QueryState
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut state = QueryState::new();
        for (key, value) in iter {
            state.set(key.as_ref(), value.as_ref());
        }
        state
    }
}

/// Set of changes applied to a [`QueryState`] by [`encode`].
///
/// `None` values remove the key, as do empty and `"all"` values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryPatch(BTreeMap<String, Option<String>>);

impl QueryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Patch that only moves to another page.
    pub fn page(page: usize) -> Self {
        Self::new().set(PAGE, page.to_string())
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), Some(value.into()));
        self
    }

    pub fn clear(mut self, key: impl Into<String>) -> Self {
        self.0.insert(key.into(), None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the patch changes anything besides the page number.
    pub fn touches_filters(&self) -> bool {
        self.0.keys().any(|key| key != PAGE)
    }
}

/// Applies `patch` to `current` and returns the new query string.
pub fn encode(current: &QueryState, patch: &QueryPatch) -> String {
    current.apply(patch).to_query_string()
}

/// Parses a query string into a normalized [`QueryState`].
///
/// Never fails: an undecodable string yields the empty state, duplicate keys
/// keep their last value and a malformed `page` is dropped.
pub fn decode(query_string: &str) -> QueryState {
    let query_string = query_string.strip_prefix('?').unwrap_or(query_string);
    if query_string.is_empty() {
        return QueryState::new();
    }

    match serde_html_form::from_str::<Vec<(String, String)>>(query_string) {
        Ok(pairs) => pairs.into_iter().collect(),
        Err(err) => {
            log::warn!("Ignoring undecodable query string {query_string:?}: {err}");
            QueryState::new()
        }
    }
}
