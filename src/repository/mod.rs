//! Access to the backend REST API.
//!
//! [`BackendApi`] is the single transport seam: it fetches a JSON document
//! for a path and query parameters. The typed helpers below decode listing,
//! detail and search responses on top of it, so services and tests only ever
//! swap the transport.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::search::SearchResultItem;
use crate::domain::types::ResourceId;
use crate::pagination::PaginatedResult;
use crate::query::{ListingQuery, Resource};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod http;
#[cfg(test)]
pub mod mock;

pub use http::HttpBackend;

/// Path of the free-text search endpoint.
pub const SEARCH_PATH: &str = "/search";

#[async_trait]
pub trait BackendApi: Send + Sync {
    /// Issues a `GET` for `path` with `params` and returns the decoded body.
    async fn get_json(&self, path: &str, params: &[(String, String)]) -> RepositoryResult<Value>;
}

/// Fetches one page of `R` from its listing endpoint.
///
/// The page is decoded but not validated; see [`PaginatedResult::validate`].
pub async fn list_resources<R, A>(
    api: &A,
    query: &ListingQuery<R>,
) -> RepositoryResult<PaginatedResult<R::Item>>
where
    R: Resource,
    A: BackendApi + ?Sized,
{
    let body = api.get_json(&R::list_path(), &query.to_params()).await?;
    Ok(serde_json::from_value(body)?)
}

/// Fetches a single record of `R` by id.
pub async fn get_resource<R, A>(api: &A, id: &ResourceId) -> RepositoryResult<R::Item>
where
    R: Resource,
    A: BackendApi + ?Sized,
{
    let body = api.get_json(&R::detail_path(id), &[]).await?;
    Ok(serde_json::from_value(body)?)
}

/// Runs a free-text search across the catalogue.
pub async fn search<A>(api: &A, text: &str) -> RepositoryResult<Vec<SearchResultItem>>
where
    A: BackendApi + ?Sized,
{
    let params = [("query".to_string(), text.to_string())];
    let body = api.get_json(SEARCH_PATH, &params).await?;
    Ok(serde_json::from_value(body)?)
}
