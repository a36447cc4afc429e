//! Tokio driver for [`SearchController`].
//!
//! Each keystroke aborts the previous unfired timer and spawns a new one.
//! When a timer fires, the lookup runs in its own task so later keystrokes
//! never cancel a request that is already in flight; the controller's
//! sequence check decides whether its response is shown.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::search::SearchResultItem;
use crate::search::SearchSource;
use crate::search::controller::{
    ResponseOutcome, SearchController, SearchRequest, SearchStatus,
};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Copy of the controller state for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub text: String,
    pub status: SearchStatus,
    pub results: Vec<SearchResultItem>,
    pub error: Option<String>,
}

fn lock(state: &Mutex<SearchController>) -> MutexGuard<'_, SearchController> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct DebouncedSearch<S> {
    state: Arc<Mutex<SearchController>>,
    source: Arc<S>,
    delay: Duration,
    timer: Option<JoinHandle<()>>,
}

impl<S> DebouncedSearch<S>
where
    S: SearchSource + 'static,
{
    pub fn new(source: Arc<S>, delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(SearchController::new())),
            source,
            delay,
            timer: None,
        }
    }

    /// Updates the text right away and restarts the debounce timer.
    ///
    /// Must be called from within a tokio runtime.
    pub fn on_text_change(&mut self, raw: &str) {
        let ticket = lock(&self.state).on_text_change(raw);
        self.cancel_timer();

        let state = Arc::clone(&self.state);
        let source = Arc::clone(&self.source);
        let delay = self.delay;

        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let request = lock(&state).on_timer_fired(ticket);
            if let Some(request) = request {
                tokio::spawn(run_lookup(state, source, request));
            }
        }));
    }

    pub fn on_select(&mut self, item: SearchResultItem) -> SearchResultItem {
        self.cancel_timer();
        lock(&self.state).on_select(item)
    }

    pub fn on_dismiss(&mut self) {
        self.cancel_timer();
        lock(&self.state).on_dismiss();
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        let state = lock(&self.state);
        SearchSnapshot {
            text: state.text().to_string(),
            status: state.status(),
            results: state.results().to_vec(),
            error: state.error().map(str::to_string),
        }
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<S> Drop for DebouncedSearch<S> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

async fn run_lookup<S>(state: Arc<Mutex<SearchController>>, source: Arc<S>, request: SearchRequest)
where
    S: SearchSource + ?Sized,
{
    let response = source.search(&request.text).await;
    if let Err(err) = &response {
        log::error!("Search for {:?} failed: {err}", request.text);
    }

    if lock(&state).on_response(request.seq, response) == ResponseOutcome::Cancelled {
        log::debug!("Search #{} for {:?} was superseded", request.seq, request.text);
    }
}
