// lib.rs - Root module for the product_catalog library
//
// The same crate builds the server (feature `ssr`) and the WASM client
// (feature `hydrate`). Without either feature only the shared core compiles.

/// Deterministic product data for tests
pub mod fixtures;

pub mod web_app;

/// WASM entry point: hydrate the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
