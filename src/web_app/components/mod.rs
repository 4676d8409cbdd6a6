// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, Badge, StarRating, toasts)
// - product.rs: Product table, rows and skeleton rows
// - catalog.rs: Load More bar and shown-count indicator

pub mod common;
pub mod product;
pub mod catalog;

// Re-export commonly used components for convenience
pub use common::*;
pub use product::*;
pub use catalog::*;
