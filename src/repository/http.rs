//! `reqwest` implementation of [`BackendApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use crate::repository::BackendApi;
use crate::repository::errors::{RepositoryError, RepositoryResult};

/// HTTP client for the shop backend.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Creates a client for `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> RepositoryResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Reuses an existing [`reqwest::Client`] and its connection pool.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn parse_response(response: reqwest::Response) -> RepositoryResult<Value> {
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound);
        }
        if !status.is_success() {
            return Err(RepositoryError::from_response(status.as_u16(), &body));
        }

        let value: Value = serde_json::from_str(&body)?;
        // Some endpoints answer 200 with an error envelope.
        if value.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(RepositoryError::from_response(status.as_u16(), &body));
        }

        Ok(value)
    }
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn get_json(&self, path: &str, params: &[(String, String)]) -> RepositoryResult<Value> {
        let url = self.url(path);
        log::debug!("GET {url} {params:?}");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|err| {
                log::error!("Request to {url} failed: {err}");
                RepositoryError::from(err)
            })?;

        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let backend = HttpBackend::with_client(reqwest::Client::new(), "http://shop.local/api/");

        assert_eq!(backend.url("/orders"), "http://shop.local/api/orders");
    }

    #[tokio::test]
    async fn unreachable_backend_is_request_failed() {
        let backend = HttpBackend::new("http://127.0.0.1:9", Duration::from_millis(200)).unwrap();

        let result = backend.get_json("/products", &[]).await;

        assert!(matches!(result, Err(RepositoryError::RequestFailed(_))));
    }
}
