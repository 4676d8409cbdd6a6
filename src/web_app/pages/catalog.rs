// web_app/pages/catalog.rs - Catalog page component
//
// Owns the catalog state and the notification queue, loads page 1 on mount,
// and wires "Load More" to the next page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::web_app::catalog::{CatalogState, FetchOutcome};
use crate::web_app::components::*;
use crate::web_app::error::FetchFailure;
use crate::web_app::notify::{NotificationQueue, TOAST_LIFETIME};
use crate::web_app::server_fns::fetch_products;

/// Main catalog page component
///
/// Orchestrates:
/// - the initial fetch of page 1
/// - skeleton rows while a page is in flight
/// - Load More / end-of-list
/// - error toasts for failed fetches
#[component]
pub fn CatalogPage() -> impl IntoView {
    let state = RwSignal::new(CatalogState::new());
    let notifications = RwSignal::new(NotificationQueue::new());

    let load_page = Callback::new(move |page: u32| {
        let ticket = match state.try_update(|s| s.begin_fetch(page)) {
            Some(Ok(ticket)) => ticket,
            Some(Err(e)) => {
                tracing::debug!("Load of page {} skipped: {}", page, e);
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let result = fetch_products(ticket.page())
                .await
                .map_err(|e| FetchFailure::Server(e.to_string()));

            if let Some(FetchOutcome::Failed(notification)) =
                state.try_update(|s| s.complete(ticket, result))
            {
                if let Some(id) = notifications.try_update(|queue| queue.push(notification)) {
                    set_timeout(
                        move || {
                            let _ = notifications.try_update(|queue| queue.dismiss(id));
                        },
                        TOAST_LIFETIME,
                    );
                }
            }
        });
    });

    // Effects only run in the browser, so page 1 is fetched after hydration
    Effect::new(move || load_page.run(1));

    view! {
        <div class="min-h-screen bg-gray-50 font-sans text-gray-900">
            // Header
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <div class="flex items-center gap-2">
                        <span class="text-2xl">"🛍"</span>
                        <h1 class="text-xl font-bold text-gray-900">"Product Catalog"</h1>
                    </div>
                    <ShownCount state=state />
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <ProductTable state=state />
                <LoadMoreBar state=state on_load_more=load_page />
            </main>

            <footer class="bg-white border-t border-gray-200 mt-12 py-8">
                <div class="max-w-7xl mx-auto px-4 text-center text-gray-500 text-sm">
                    <p>"Built with Leptos and Actix."</p>
                </div>
            </footer>

            <ToastStack notifications=notifications />
        </div>
    }
}
