// Leptos web application server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering) and server functions
// - A shared Product API client
// - Static file serving

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::{App, HttpServer, web};
    use leptos_actix::{LeptosRoutes, generate_route_list, handle_server_fns};
    use product_catalog::web_app::api::{CatalogConfig, CatalogService, service};
    use product_catalog::web_app::app::{App as WebApp, shell};
    use tracing_subscriber::EnvFilter;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Catalog settings (.env is loaded here too)
    let config = CatalogConfig::from_env().expect("invalid catalog configuration");
    tracing::info!(
        "Product API: {} (fetch delay {:?}, timeout {:?})",
        config.api_base_url,
        config.fetch_delay,
        config.request_timeout
    );

    let catalog_service = CatalogService::from_config(&config).expect("failed to build Product API client");
    service::init_service(catalog_service);

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).expect("could not read configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options_inner = leptos_options.clone();
        let site_root_str = site_root.clone().to_string();

        App::new()
            // Explicitly handle server functions
            .route("/api/{tail:.*}", handle_server_fns())
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root_str}/pkg")))
            // Leptos routes for SSR with the HTML shell
            .leptos_routes(routes, {
                let leptos_options = leptos_options_inner.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options_inner.clone()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
fn main() {
    panic!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
}
