// web_app/server_fns.rs - Leptos server function declarations
//
// The #[server] macro generates the real body on the server and an HTTP stub
// on the client, so this file is compiled for both ssr and hydrate.

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
fn catalog_service() -> Result<crate::web_app::api::CatalogService, ServerFnError> {
    use crate::web_app::api::{service::get_service, CatalogService};

    if let Some(service) = use_context::<CatalogService>() {
        return Ok(service);
    }

    get_service().ok_or_else(|| ServerFnError::new("Catalog service not available"))
}

/// Fetch one page of products from the Product API
#[server(FetchProducts, "/api")]
pub async fn fetch_products(page: u32) -> Result<Vec<Product>, ServerFnError> {
    if page == 0 {
        return Err(ServerFnError::new("page numbers start at 1"));
    }

    let service = catalog_service()?;
    tracing::info!("Fetch request: page={}", page);

    match service.load_page(PageRequest::new(page)).await {
        Ok(products) => {
            tracing::info!("Fetch successful: {} products on page {}", products.len(), page);
            Ok(products)
        }
        Err(e) => {
            tracing::error!("Fetch failed for page {}: {}", page, e);
            Err(ServerFnError::new(e.to_string()))
        }
    }
}
