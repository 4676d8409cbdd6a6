// web_app/components/product.rs - Product table components
//
// - ProductTable: header plus a body that switches between skeleton rows,
//   product rows, and the empty/error placeholders
// - ProductRow: one product
// - SkeletonRows: placeholder rows shown while a page is loading

use leptos::prelude::*;
use crate::web_app::catalog::CatalogState;
use crate::web_app::model::Product;
use super::common::{Badge, StarRating};

const COLUMNS: [&str; 5] = ["Image", "Product Details", "Category", "Price", "Rating"];

/// Catalog table
///
/// Reads everything it shows from the catalog state signal.
#[component]
pub fn ProductTable(
    /// Catalog state owned by the page
    state: RwSignal<CatalogState>,
) -> impl IntoView {
    let body = move || {
        state.with(|s| {
            if s.show_skeleton() {
                view! { <SkeletonRows rows=s.skeleton_rows() /> }.into_any()
            } else if s.show_load_error() {
                view! { <MessageRow text="Products could not be loaded." /> }.into_any()
            } else if s.show_empty_state() {
                view! { <MessageRow text="No products on this page." /> }.into_any()
            } else {
                s.products()
                    .iter()
                    .cloned()
                    .map(|product| view! { <ProductRow product=product /> })
                    .collect_view()
                    .into_any()
            }
        })
    };

    view! {
        <div class="overflow-x-auto bg-white rounded-2xl shadow-sm border border-gray-100">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        {COLUMNS.into_iter().map(|title| view! {
                            <th
                                scope="col"
                                class="px-6 py-3 text-left text-xs font-semibold text-gray-500 uppercase tracking-wider"
                            >
                                {title}
                            </th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-100">
                    {body}
                </tbody>
            </table>
        </div>
    }
}

/// One product row
#[component]
pub fn ProductRow(
    /// The product to display
    product: Product,
) -> impl IntoView {
    let price_display = product.price_label();
    let description = product.description_preview();
    let rating = product.rating;

    view! {
        <tr class="hover:bg-gray-50 transition-colors">
            <td class="px-6 py-4">
                <div class="h-16 w-16 rounded-lg bg-white border border-gray-100 flex items-center justify-center overflow-hidden">
                    <img
                        src=product.image.clone()
                        alt=product.title.clone()
                        loading="lazy"
                        class="max-h-full max-w-full object-contain"
                    />
                </div>
            </td>
            <td class="px-6 py-4 max-w-md">
                <div class="font-semibold text-gray-900 line-clamp-1">{product.title.clone()}</div>
                <p class="text-sm text-gray-500 mt-1 line-clamp-2">{description}</p>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <Badge>{product.category.clone()}</Badge>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-gray-900 font-medium">
                {price_display}
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="flex items-center gap-2">
                    <StarRating rating=rating.as_f64() />
                    <span class="text-sm font-bold text-gray-700">{rating.average_label()}</span>
                </div>
                <span class="text-xs text-gray-500">{rating.reviews_label()}</span>
            </td>
        </tr>
    }
}

/// Placeholder rows with pulsing blocks in each column
#[component]
pub fn SkeletonRows(
    /// How many rows to render
    rows: usize,
) -> impl IntoView {
    (0..rows)
        .map(|_| view! {
            <tr class="animate-pulse" aria-hidden="true">
                <td class="px-6 py-4"><div class="h-16 w-16 rounded-lg bg-gray-200"></div></td>
                <td class="px-6 py-4">
                    <div class="h-4 w-48 rounded bg-gray-200 mb-2"></div>
                    <div class="h-3 w-72 rounded bg-gray-100"></div>
                </td>
                <td class="px-6 py-4"><div class="h-5 w-20 rounded-full bg-gray-200"></div></td>
                <td class="px-6 py-4"><div class="h-4 w-14 rounded bg-gray-200"></div></td>
                <td class="px-6 py-4"><div class="h-4 w-24 rounded bg-gray-200"></div></td>
            </tr>
        })
        .collect_view()
}

#[component]
fn MessageRow(text: &'static str) -> impl IntoView {
    view! {
        <tr>
            <td colspan=COLUMNS.len().to_string() class="px-6 py-12 text-center text-gray-500">
                {text}
            </td>
        </tr>
    }
}
