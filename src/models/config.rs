//! Configuration model loaded from external sources.

use std::time::Duration;

use serde::Deserialize;

use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

fn default_page_size() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the shop backend REST API.
    pub backend_url: String,
    /// Default listing page size.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(feature = "server")]
impl ServerConfig {
    /// Loads `{dir}/default.yaml`, the optional `{dir}/{app_env}.yaml` profile
    /// and `APP_*` environment overrides.
    pub fn load(dir: &std::path::Path, app_env: &str) -> Result<Self, ::config::ConfigError> {
        ::config::Config::builder()
            .add_source(::config::File::from(dir.join("default")))
            .add_source(::config::File::from(dir.join(app_env)).required(false))
            .add_source(::config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
