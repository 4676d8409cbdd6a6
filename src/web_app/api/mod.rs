// web_app/api/mod.rs - Server-side access to the remote Product API
//
// - config: settings read from the environment
// - client: reqwest wrapper for the products endpoint
// - service: delay + fetch, and the process-wide service registry

pub mod client;
pub mod config;
pub mod service;

pub use client::ProductApiClient;
pub use config::CatalogConfig;
pub use service::CatalogService;
