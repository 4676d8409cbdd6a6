// tests/server_fn_tests.rs
// Test suite for Leptos server functions
//
// The service registry is process-wide, so everything runs in one test to
// keep the override from being swapped underneath another test.

mod common;

use common::{spawn_stub_api, StubMode};
use product_catalog::fixtures::products::SampleCatalog;
use product_catalog::fixtures::CatalogFixture;
use product_catalog::web_app::api::service;
use product_catalog::web_app::server_fns::*;

#[actix_web::test]
async fn test_server_functions_comprehensive() -> anyhow::Result<()> {
    // 1. Nothing registered
    service::set_test_service(None);
    let err = fetch_products(1).await.unwrap_err();
    assert!(err.to_string().contains("Catalog service not available"));

    // 2. Healthy API
    let stub = spawn_stub_api(StubMode::Catalog).await?;
    service::set_test_service(Some(stub.service()));

    let products = fetch_products(1)
        .await
        .map_err(|e| anyhow::anyhow!("fetch_products failed: {}", e))?;
    assert_eq!(products, SampleCatalog::page(1, 10));

    let products = fetch_products(9)
        .await
        .map_err(|e| anyhow::anyhow!("fetch_products failed: {}", e))?;
    assert!(products.is_empty());

    // 3. Page zero never reaches the API
    let hits_before = stub.hits();
    assert!(fetch_products(0).await.is_err());
    assert_eq!(stub.hits(), hits_before);

    // 4. Failing API
    let failing = spawn_stub_api(StubMode::Status(500)).await?;
    service::set_test_service(Some(failing.service()));
    let err = fetch_products(1).await.unwrap_err();
    assert!(err.to_string().contains("status 500"), "got {}", err);

    service::set_test_service(None);
    Ok(())
}
