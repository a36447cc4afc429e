//! Services loading resource listings and detail records.

use crate::domain::types::ResourceId;
use crate::dto::listing::ListingPageData;
use crate::pagination::PaginatedResult;
use crate::query::{ListingQuery, Resource, decode};
use crate::repository::errors::RepositoryError;
use crate::repository::{BackendApi, get_resource, list_resources};
use crate::services::{ServiceError, ServiceResult};

/// Shown instead of rows when the backend page breaks its own contract.
pub const INVALID_PAGE_NOTICE: &str = "The listing could not be displayed. Please try again later.";

/// Loads the page of `R` described by a URL query string.
///
/// A page that fails validation degrades to an empty page with a notice
/// instead of an error.
pub async fn load_listing<R, A>(
    api: &A,
    query_string: &str,
    limit: usize,
) -> ServiceResult<ListingPageData<R::Item>>
where
    R: Resource,
    A: BackendApi + ?Sized,
{
    let state = decode(query_string);
    let query = ListingQuery::<R>::from_state(&state, limit);

    let result = list_resources(api, &query).await.map_err(|err| {
        log::error!("Failed to list {}: {err}", R::NAME);
        ServiceError::from(err)
    })?;

    let (result, notice) = match result.validate() {
        Ok(()) => (result, None),
        Err(err) => {
            log::error!("Backend returned an invalid {} page: {err}", R::NAME);
            (
                PaginatedResult::empty(query.limit),
                Some(INVALID_PAGE_NOTICE.to_string()),
            )
        }
    };

    Ok(ListingPageData::new::<R>(
        result,
        state,
        query.sort_by,
        query.sort_order,
        notice,
    ))
}

/// Loads a single record of `R`.
pub async fn load_detail<R, A>(api: &A, id: &str) -> ServiceResult<R::Item>
where
    R: Resource,
    A: BackendApi + ?Sized,
{
    let id = ResourceId::new(id)?;

    get_resource::<R, A>(api, &id).await.map_err(|err| {
        if !matches!(err, RepositoryError::NotFound) {
            log::error!("Failed to load {} {id}: {err}", R::NAME);
        }
        ServiceError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::types::{OrderStatus, SortOrder};
    use crate::query::resource::{Orders, Products};
    use crate::repository::mock::MockBackend;

    fn order(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "orderNumber": format!("#{id}"),
            "customerName": "Ann",
            "total": 12.5,
            "status": "pending",
            "paymentStatus": "paid"
        })
    }

    #[tokio::test]
    async fn loads_page_for_query_string() {
        let mut backend = MockBackend::new();
        backend
            .expect_get_json()
            .withf(|path, params| {
                path == "/orders"
                    && params.contains(&("status".to_string(), "pending".to_string()))
                    && params.contains(&("sort_order".to_string(), "desc".to_string()))
            })
            .times(1)
            .returning(|_, _| {
                Ok(json!({
                    "data": [order("1"), order("2")],
                    "page": 1,
                    "limit": 2,
                    "totalCount": 50,
                    "filterCount": 12,
                    "totalPages": 6,
                    "hasNextPage": true,
                    "hasPreviousPage": false
                }))
            });

        let page = load_listing::<Orders, _>(&backend, "status=pending&sort_order=desc", 2)
            .await
            .unwrap();

        assert_eq!(page.resource, "orders");
        assert_eq!(page.result.data.len(), 2);
        assert_eq!(page.result.data[0].status, OrderStatus::Pending);
        assert_eq!(page.sort_by, "createdAt");
        assert_eq!(page.sort_order, SortOrder::Desc);
        assert_eq!(page.query_string, "sort_order=desc&status=pending");
        assert!(!page.empty);
        assert!(page.notice.is_none());
    }

    #[tokio::test]
    async fn invalid_page_degrades_to_empty_state() {
        let mut backend = MockBackend::new();
        backend.expect_get_json().returning(|_, _| {
            Ok(json!({
                "data": [],
                "page": 1,
                "limit": 10,
                "totalCount": 30,
                "filterCount": 30,
                "totalPages": 7,
                "hasNextPage": true,
                "hasPreviousPage": false
            }))
        });

        let page = load_listing::<Products, _>(&backend, "", 10).await.unwrap();

        assert!(page.empty);
        assert!(page.result.data.is_empty());
        assert_eq!(page.result.total_pages, 0);
        assert_eq!(page.notice.as_deref(), Some(INVALID_PAGE_NOTICE));
    }

    #[tokio::test]
    async fn backend_failure_is_request_failed() {
        let mut backend = MockBackend::new();
        backend.expect_get_json().returning(|_, _| {
            Err(RepositoryError::Api {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let result = load_listing::<Products, _>(&backend, "", 10).await;

        assert!(matches!(result, Err(ServiceError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn detail_not_found_maps_to_not_found() {
        let mut backend = MockBackend::new();
        backend
            .expect_get_json()
            .withf(|path, _| path == "/orders/42")
            .returning(|_, _| Err(RepositoryError::NotFound));

        let result = load_detail::<Orders, _>(&backend, "42").await;

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn blank_detail_id_is_rejected_before_request() {
        let mut backend = MockBackend::new();
        backend.expect_get_json().times(0);

        let result = load_detail::<Orders, _>(&backend, " ").await;

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }
}
