// web_app/api/client.rs - HTTP client for the remote Product API

use crate::web_app::api::config::CatalogConfig;
use crate::web_app::error::FetchFailure;
use crate::web_app::model::{PageRequest, Product};

/// Thin wrapper over a shared `reqwest::Client`
#[derive(Clone, Debug)]
pub struct ProductApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProductApiClient {
    pub fn new(config: &CatalogConfig) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent("product-catalog/0.1");
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// GET one page. Non-2xx statuses and bodies that are not a product
    /// array are failures; an empty array is a normal result.
    pub async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Product>, FetchFailure> {
        let url = self.products_url();
        tracing::debug!("GET {} page={} limit={}", url, request.page, request.page_size);

        let response = self
            .http
            .get(&url)
            .query(&request.query_pairs())
            .send()
            .await?
            .error_for_status()?;

        let products = response.json::<Vec<Product>>().await?;
        tracing::debug!("Product API returned {} products for page {}", products.len(), request.page);
        Ok(products)
    }
}
