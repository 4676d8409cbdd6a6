// web_app/api/config.rs - Catalog settings from the environment

use anyhow::Context;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";
pub const DEFAULT_FETCH_DELAY_MS: u64 = 2000;

/// Settings for talking to the Product API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL; the products endpoint is `{api_base_url}/products`
    pub api_base_url: String,
    /// Artificial wait before each request, for the skeleton state
    pub fetch_delay: Duration,
    /// None means wait for the API as long as it takes
    pub request_timeout: Option<Duration>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            fetch_delay: Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
            request_timeout: None,
        }
    }
}

impl CatalogConfig {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get("PRODUCT_API_URL") {
            config.api_base_url = url.trim().trim_end_matches('/').to_string();
        }

        if let Some(ms) = get("CATALOG_FETCH_DELAY_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .with_context(|| format!("CATALOG_FETCH_DELAY_MS is not a number: {ms}"))?;
            config.fetch_delay = Duration::from_millis(ms);
        }

        if let Some(secs) = get("CATALOG_REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("CATALOG_REQUEST_TIMEOUT_SECS is not a number: {secs}"))?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
