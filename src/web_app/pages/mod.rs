// web_app/pages/mod.rs - Page components module
//
// - CatalogPage: product table with Load More paging

pub mod catalog;

// Re-export page components
pub use catalog::CatalogPage;
