// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel from the remote Product API, through the server
// function, into the browser. Formatting helpers used by the table live
// here too so they can be tested without a Leptos runtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of products requested per page
pub const PAGE_SIZE: u32 = 10;

/// Placeholder rows rendered while a page is loading
pub const SKELETON_ROWS: usize = 10;

/// Descriptions longer than this are cut in the table
pub const DESCRIPTION_PREVIEW_CHARS: usize = 120;

/// Product as returned by the Product API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

/// Average score and number of reviews
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    pub count: u32,
}

impl Rating {
    /// Average as shown in the table, e.g. `4.3`
    pub fn average_label(&self) -> String {
        self.rate.normalize().to_string()
    }

    /// Review count in parentheses, e.g. `(120 reviews)`
    pub fn reviews_label(&self) -> String {
        if self.count == 1 {
            "(1 review)".to_string()
        } else {
            format!("({} reviews)", self.count)
        }
    }

    /// Average as f64 for the star widget
    pub fn as_f64(&self) -> f64 {
        self.rate.try_into().unwrap_or(0.0)
    }
}

impl Product {
    /// Price formatted as currency with two decimals
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }

    /// Description cut to the preview length, on a char boundary
    pub fn description_preview(&self) -> String {
        truncate_chars(&self.description, DESCRIPTION_PREVIEW_CHARS)
    }
}

/// One page request against the Product API (pages start at 1)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn new(page: u32) -> Self {
        Self {
            page,
            page_size: PAGE_SIZE,
        }
    }

    /// Query pairs appended to the products endpoint
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("limit", self.page_size.to_string()),
        ]
    }
}

/// Format a price as `$19.50`
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price.round_dp(2))
}

/// "Showing N products" indicator text
pub fn shown_count_label(count: usize) -> String {
    if count == 1 {
        "Showing 1 product".to_string()
    } else {
        format!("Showing {} products", count)
    }
}

/// Full stars, half star, empty stars for a 0-5 rating
pub fn star_counts(rating: f64) -> (usize, bool, usize) {
    let rating = rating.clamp(0.0, 5.0);
    let full_stars = rating.floor() as usize;
    let has_half = (rating - rating.floor()) >= 0.5;
    let empty_stars = 5 - full_stars - usize::from(has_half);
    (full_stars, has_half, empty_stars)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
