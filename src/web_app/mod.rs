// web_app/mod.rs - Root module for the Leptos web application
//
// Architecture:
// - model/: Shared data types and display formatting (client and server)
// - catalog/: Fetch/pagination state machine (client and server)
// - notify.rs, error.rs: Toast queue and error types (client and server)
// - server_fns.rs: Server function declarations (client and server)
// - api/: Product API client, config and service registry (SSR only)
// - components/, pages/, app.rs: Leptos UI (SSR and hydrate)

pub mod model;
pub mod catalog;
pub mod error;
pub mod notify;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// Remote API access (SSR only)
#[cfg(feature = "ssr")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
