// web_app/api/service.rs - Page loading service and its global registry
//
// The server function needs the service without an actix request in hand,
// so the binary registers one at start-up. Tests can swap in their own.

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use crate::web_app::api::client::ProductApiClient;
use crate::web_app::api::config::CatalogConfig;
use crate::web_app::error::FetchFailure;
use crate::web_app::model::{PageRequest, Product};

static SERVICE: OnceLock<CatalogService> = OnceLock::new();
static TEST_SERVICE_OVERRIDE: Mutex<Option<CatalogService>> = Mutex::new(None);

/// Waits the configured delay, then fetches the page
#[derive(Clone, Debug)]
pub struct CatalogService {
    client: ProductApiClient,
    fetch_delay: Duration,
}

impl CatalogService {
    pub fn new(client: ProductApiClient, fetch_delay: Duration) -> Self {
        Self { client, fetch_delay }
    }

    pub fn from_config(config: &CatalogConfig) -> anyhow::Result<Self> {
        Ok(Self::new(ProductApiClient::new(config)?, config.fetch_delay))
    }

    pub fn fetch_delay(&self) -> Duration {
        self.fetch_delay
    }

    pub async fn load_page(&self, request: PageRequest) -> Result<Vec<Product>, FetchFailure> {
        if !self.fetch_delay.is_zero() {
            tokio::time::sleep(self.fetch_delay).await;
        }
        self.client.fetch_page(request).await
    }
}

/// Register the process-wide service
pub fn init_service(service: CatalogService) {
    tracing::info!("Initializing catalog service");
    if SERVICE.set(service).is_err() {
        tracing::warn!("Catalog service already initialized");
    }
}

/// Set a service override for testing
pub fn set_test_service(service: Option<CatalogService>) {
    let mut guard = TEST_SERVICE_OVERRIDE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = service;
}

/// Get the registered service, preferring a test override
pub fn get_service() -> Option<CatalogService> {
    {
        let guard = TEST_SERVICE_OVERRIDE
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(ref service) = *guard {
            return Some(service.clone());
        }
    }

    let service = SERVICE.get().cloned();
    if service.is_none() {
        tracing::warn!("Catalog service is not initialized");
    }
    service
}
