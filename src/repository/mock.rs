//! Mock backend for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::repository::BackendApi;
use crate::repository::errors::RepositoryResult;

mock! {
    pub Backend {}

    #[async_trait]
    impl BackendApi for Backend {
        async fn get_json(&self, path: &str, params: &[(String, String)]) -> RepositoryResult<Value>;
    }
}
