//! Debounced quick search: keystrokes in, at most one live lookup out.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::search::SearchResultItem;
use crate::repository::BackendApi;
use crate::repository::errors::RepositoryResult;

pub mod controller;
pub mod debounce;

pub use controller::{ResponseOutcome, SearchController, SearchRequest, SearchStatus, TimerTicket};
pub use debounce::{DEFAULT_DEBOUNCE, DebouncedSearch, SearchSnapshot};

/// Lookup function injected into [`DebouncedSearch`].
#[async_trait]
pub trait SearchSource: Send + Sync {
    async fn search(&self, text: &str) -> RepositoryResult<Vec<SearchResultItem>>;
}

/// [`SearchSource`] backed by the backend search endpoint.
pub struct BackendSearch<A: ?Sized> {
    api: Arc<A>,
}

impl<A: ?Sized> BackendSearch<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A> SearchSource for BackendSearch<A>
where
    A: BackendApi + ?Sized,
{
    async fn search(&self, text: &str) -> RepositoryResult<Vec<SearchResultItem>> {
        crate::repository::search(self.api.as_ref(), text).await
    }
}
