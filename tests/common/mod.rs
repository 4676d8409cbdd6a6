// common/mod.rs - Shared test utilities for the Product API client
//
// Spins up an in-process actix-web server that stands in for the remote
// Product API. It serves the `SampleCatalog` fixture page by page, or fails
// in a chosen way, and counts the requests it receives.

#![allow(dead_code)]

use actix_web::{web, App, HttpResponse, HttpServer};
use product_catalog::fixtures::products::SampleCatalog;
use product_catalog::fixtures::CatalogFixture;
use product_catalog::web_app::api::{CatalogConfig, CatalogService};
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// How the stub answers `GET /products`
#[derive(Clone, Debug)]
pub enum StubMode {
    /// Serve `SampleCatalog` pages
    Catalog,
    /// Answer every request with this status
    Status(u16),
    /// 200 with a body that is not a product list
    Garbage,
}

pub struct StubApi {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<(u32, u32)>>>,
}

impl StubApi {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// (page, limit) of every request, in arrival order
    pub fn queries(&self) -> Vec<(u32, u32)> {
        self.queries.lock().unwrap().clone()
    }

    pub fn config(&self) -> CatalogConfig {
        CatalogConfig {
            api_base_url: self.base_url.clone(),
            fetch_delay: Duration::ZERO,
            request_timeout: Some(Duration::from_secs(5)),
        }
    }

    pub fn service(&self) -> CatalogService {
        CatalogService::from_config(&self.config()).expect("client should build")
    }
}

struct StubState {
    mode: StubMode,
    hits: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<(u32, u32)>>>,
}

#[derive(Deserialize)]
struct PageQuery {
    page: u32,
    limit: u32,
}

async fn products(state: web::Data<StubState>, query: web::Query<PageQuery>) -> HttpResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    state.queries.lock().unwrap().push((query.page, query.limit));

    match &state.mode {
        StubMode::Catalog => HttpResponse::Ok().json(SampleCatalog::page(query.page, query.limit)),
        StubMode::Status(code) => {
            let status = actix_web::http::StatusCode::from_u16(*code).unwrap();
            HttpResponse::build(status).body("stub failure")
        }
        StubMode::Garbage => HttpResponse::Ok()
            .content_type("application/json")
            .body(r#"{"products": "not a list"}"#),
    }
}

/// Start the stub on a free local port. Must run inside an actix system
/// (`#[actix_web::test]`).
pub async fn spawn_stub_api(mode: StubMode) -> anyhow::Result<StubApi> {
    let hits = Arc::new(AtomicUsize::new(0));
    let queries = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(StubState {
        mode,
        hits: hits.clone(),
        queries: queries.clone(),
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/products", web::get().to(products))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("stub server did not bind"))?;
    actix_web::rt::spawn(server.run());

    Ok(StubApi {
        base_url: format!("http://{}", addr),
        hits,
        queries,
    })
}
