// fixtures/mod.rs - Reusable product data for tests
//
// Tests need predictable catalogs: a known number of products, stable ids,
// and pages that can be sliced the same way the remote API slices them.
// Each fixture implements `CatalogFixture` and the default methods do the
// paging.

pub mod products;

use crate::web_app::model::Product;

/// A fixed catalog that can be served page by page
pub trait CatalogFixture {
    /// Every product in the catalog, in API order
    fn all() -> Vec<Product>;

    /// Products on `page` (1-based) with `page_size` items per page.
    /// Pages past the end are empty, like the remote API.
    fn page(page: u32, page_size: u32) -> Vec<Product> {
        if page == 0 {
            return Vec::new();
        }
        let skip = (page as usize - 1) * page_size as usize;
        Self::all()
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect()
    }
}
