// web_app/components/catalog.rs - Catalog footer and indicators
//
// - ShownCount: "Showing N products"
// - LoadMoreBar: the Load More action or the end-of-list message

use leptos::prelude::*;
use crate::web_app::catalog::CatalogState;
use crate::web_app::model::shown_count_label;
use super::common::Button;

/// Count of products currently in the table
#[component]
pub fn ShownCount(state: RwSignal<CatalogState>) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| !s.show_skeleton())>
            <span class="text-gray-500 font-medium">
                {move || state.with(|s| shown_count_label(s.shown_count()))}
            </span>
        </Show>
    }
}

/// Load More button, hidden while loading; end-of-list message once the
/// API has run out of products
#[component]
pub fn LoadMoreBar(
    state: RwSignal<CatalogState>,
    /// Called with the page to fetch
    on_load_more: Callback<u32>,
) -> impl IntoView {
    let load_more = Callback::new(move |()| {
        let page = state.with_untracked(|s| s.next_page());
        on_load_more.run(page);
    });

    view! {
        <div class="flex justify-center mt-8 mb-4">
            <Show when=move || state.with(|s| s.can_load_more())>
                <Button on_click=load_more>"Load More"</Button>
            </Show>
            <Show when=move || state.with(|s| s.show_end_of_list())>
                <p class="text-gray-500 text-sm">"You've reached the end of the catalog."</p>
            </Show>
        </div>
    }
}
