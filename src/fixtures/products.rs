// fixtures/products.rs - Sample products shaped like the remote API's data

use crate::fixtures::CatalogFixture;
use crate::web_app::model::{Product, Rating};
use rust_decimal::Decimal;

const CATEGORIES: [&str; 4] = ["electronics", "jewelery", "men's clothing", "women's clothing"];

/// 25 products: two full pages of 10 and a short third page of 5
pub struct SampleCatalog;

impl CatalogFixture for SampleCatalog {
    fn all() -> Vec<Product> {
        (1..=25).map(sample_product).collect()
    }
}

/// Deterministic product for `id`
pub fn sample_product(id: i64) -> Product {
    Product {
        id,
        title: format!("Sample Product {}", id),
        // 9.50, 19.50, 29.50, ...
        price: Decimal::new(950 + (id - 1) * 1000, 2),
        description: format!("Description for sample product {}", id),
        category: CATEGORIES[(id as usize) % CATEGORIES.len()].to_string(),
        image: format!("https://cdn.example.test/products/{}.jpg", id),
        rating: Rating {
            rate: Decimal::new(30 + id % 20, 1),
            count: (id as u32) * 10,
        },
    }
}

/// `size` products with ids unique to `page`, independent of any catalog
pub fn sample_page(page: u32, size: usize) -> Vec<Product> {
    let first = (page as i64 - 1) * 100 + 1;
    (first..first + size as i64).map(sample_product).collect()
}
