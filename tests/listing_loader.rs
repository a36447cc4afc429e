use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use pushkind_shop_admin::query::resource::Products;
use pushkind_shop_admin::repository::BackendApi;
use pushkind_shop_admin::repository::errors::{RepositoryError, RepositoryResult};
use pushkind_shop_admin::services::ServiceError;
use pushkind_shop_admin::table::{ListingLoader, LoadOutcome};
use serde_json::{Value, json};
use tokio::task::JoinSet;

/// Backend serving a 45-product catalogue in pages of 10, answering each
/// page after its own delay.
struct FakeBackend {
    delays: Vec<(usize, Duration)>,
    offline: AtomicBool,
}

impl FakeBackend {
    fn new(delays: Vec<(usize, Duration)>) -> Self {
        Self {
            delays,
            offline: AtomicBool::new(false),
        }
    }
}

fn product(n: usize) -> Value {
    json!({
        "id": format!("p{n}"),
        "name": format!("Product {n}"),
        "slug": format!("product-{n}"),
        "price": 9.99,
        "stock": 3,
        "status": "active"
    })
}

#[async_trait]
impl BackendApi for FakeBackend {
    async fn get_json(&self, path: &str, params: &[(String, String)]) -> RepositoryResult<Value> {
        assert_eq!(path, "/products");

        let page = params
            .iter()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse::<usize>().ok())
            .unwrap_or(1);
        let delay = self
            .delays
            .iter()
            .find(|(p, _)| *p == page)
            .map(|(_, delay)| *delay)
            .unwrap_or(Duration::from_millis(10));
        tokio::time::sleep(delay).await;

        if self.offline.load(Ordering::SeqCst) {
            return Err(RepositoryError::RequestFailed("connection reset".to_string()));
        }

        let start = (page - 1) * 10;
        let data: Vec<Value> = (start..(start + 10).min(45)).map(product).collect();
        Ok(json!({
            "data": data,
            "page": page,
            "limit": 10,
            "totalCount": 45,
            "filterCount": 45,
            "totalPages": 5,
            "hasNextPage": page < 5,
            "hasPreviousPage": page > 1
        }))
    }
}

#[tokio::test(start_paused = true)]
async fn slow_older_page_is_superseded() {
    let backend = Arc::new(FakeBackend::new(vec![
        (1, Duration::from_millis(500)),
        (2, Duration::from_millis(50)),
    ]));
    let loader = ListingLoader::<Products, _>::new(backend, 10);

    let (older, newer) = tokio::join!(loader.load("page=1"), loader.load("page=2"));

    assert!(matches!(older, LoadOutcome::Superseded));
    assert!(matches!(newer, LoadOutcome::Applied));
    assert_eq!(loader.current().unwrap().result.page, 2);
}

#[tokio::test(start_paused = true)]
async fn fast_older_page_is_still_superseded() {
    let backend = Arc::new(FakeBackend::new(vec![
        (3, Duration::from_millis(10)),
        (4, Duration::from_millis(300)),
    ]));
    let loader = ListingLoader::<Products, _>::new(backend, 10);

    let (older, newer) = tokio::join!(loader.load("page=3"), loader.load("page=4"));

    assert!(matches!(older, LoadOutcome::Superseded));
    assert!(matches!(newer, LoadOutcome::Applied));

    let current = loader.current().unwrap();
    assert_eq!(current.result.page, 4);
    assert_eq!(current.query_string, "page=4");
    assert_eq!(current.result.data.len(), 10);
}

#[tokio::test(start_paused = true)]
async fn failed_load_keeps_previous_page() {
    let backend = Arc::new(FakeBackend::new(vec![]));
    let loader = ListingLoader::<Products, _>::new(Arc::clone(&backend), 10);

    assert!(matches!(loader.load("page=5").await, LoadOutcome::Applied));
    assert_eq!(loader.current().unwrap().result.data.len(), 5);

    backend.offline.store(true, Ordering::SeqCst);
    let outcome = loader.load("page=1").await;

    assert!(matches!(
        outcome,
        LoadOutcome::Failed(ServiceError::RequestFailed(message)) if message == "connection reset"
    ));
    assert_eq!(loader.current().unwrap().result.page, 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn last_navigation_wins_across_threads() {
    let delays = (1..=5)
        .map(|page| (page, Duration::from_millis((page as u64 * 7) % 5)))
        .collect();
    let loader = Arc::new(ListingLoader::<Products, _>::new(
        Arc::new(FakeBackend::new(delays)),
        10,
    ));

    for round in 0..20 {
        let mut loads = JoinSet::new();
        let mut last_issued = String::new();

        for i in 0..16 {
            let query_string = format!("page={}&search=r{round}n{i}", i % 5 + 1);
            let ticket = loader.begin();
            let loader = Arc::clone(&loader);
            last_issued = query_string.clone();
            loads.spawn(async move { loader.load_ticket(ticket, &query_string).await });
        }

        let mut applied = 0;
        while let Some(outcome) = loads.join_next().await {
            if matches!(outcome.unwrap(), LoadOutcome::Applied) {
                applied += 1;
            }
        }

        assert!(applied >= 1);
        assert_eq!(loader.current().unwrap().query_string, last_issued);
    }
}
