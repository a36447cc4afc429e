//! Quick search across the catalogue.

use crate::dto::search::SearchResponse;
use crate::forms::search::{SearchForm, SearchPayload};
use crate::repository::{BackendApi, search};
use crate::services::{ServiceError, ServiceResult};

/// Validates the search form and queries the backend search endpoint.
pub async fn search_catalog<A>(api: &A, form: SearchForm) -> ServiceResult<SearchResponse>
where
    A: BackendApi + ?Sized,
{
    let payload = SearchPayload::try_from(form)?;

    let results = search(api, &payload.query).await.map_err(|err| {
        log::error!("Search for {:?} failed: {err}", payload.query);
        ServiceError::from(err)
    })?;

    Ok(SearchResponse {
        query: payload.query,
        results,
    })
}
