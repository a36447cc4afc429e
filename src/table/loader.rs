//! Sequence-guarded listing fetches.
//!
//! Rapid page or sort changes can leave several listing requests in flight.
//! Each call to [`ListingLoader::load`] takes a sequence number, and only the
//! most recent one may replace the page on screen, whatever order the
//! responses arrive in.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::dto::listing::ListingPageData;
use crate::query::Resource;
use crate::repository::BackendApi;
use crate::services::ServiceError;
use crate::services::listing::load_listing;

#[derive(Debug)]
pub enum LoadOutcome {
    Applied,
    /// A newer navigation started before this one resolved.
    Superseded,
    /// The fetch failed; the previous page stays on screen.
    Failed(ServiceError),
}

/// Sequence number of one navigation, issued by [`ListingLoader::begin`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

pub struct ListingLoader<R: Resource, A: ?Sized> {
    api: Arc<A>,
    limit: usize,
    latest: AtomicU64,
    current: Mutex<Option<ListingPageData<R::Item>>>,
}

impl<R, A> ListingLoader<R, A>
where
    R: Resource,
    A: BackendApi + ?Sized,
{
    pub fn new(api: Arc<A>, limit: usize) -> Self {
        Self {
            api,
            limit,
            latest: AtomicU64::new(0),
            current: Mutex::new(None),
        }
    }

    /// Fetches the page described by `query_string` and shows it unless a
    /// newer load started in the meantime.
    pub async fn load(&self, query_string: &str) -> LoadOutcome {
        let ticket = self.begin();
        self.load_ticket(ticket, query_string).await
    }

    /// Registers a navigation. Every ticket issued earlier becomes stale.
    pub fn begin(&self) -> LoadTicket {
        LoadTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Fetches the page for a navigation registered with [`Self::begin`].
    pub async fn load_ticket(&self, ticket: LoadTicket, query_string: &str) -> LoadOutcome {
        let loaded = load_listing::<R, A>(self.api.as_ref(), query_string, self.limit).await;

        // The staleness check and the store happen under one guard, so an
        // older load can never overwrite a newer page.
        let mut current = self.lock();
        if self.latest.load(Ordering::SeqCst) != ticket.0 {
            log::debug!("Dropping stale {} listing for {query_string:?}", R::NAME);
            return LoadOutcome::Superseded;
        }

        match loaded {
            Ok(page) => {
                *current = Some(page);
                LoadOutcome::Applied
            }
            Err(err) => LoadOutcome::Failed(err),
        }
    }

    /// Page currently on screen, if any load has been applied.
    pub fn current(&self) -> Option<ListingPageData<R::Item>> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<ListingPageData<R::Item>>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
