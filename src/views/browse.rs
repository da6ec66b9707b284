use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{self, FilterSpec};
use crate::models::{CategoryCount, Listing, ViewerContext};
use crate::views::ListingCard;

pub const NO_RESULTS: &str = "No products found matching your criteria.";

#[derive(Debug, Clone, Serialize)]
pub struct BrowsePage {
    pub result_count: usize,
    pub summary: String,
    pub active_filters: Vec<String>,
    pub categories: Vec<CategoryCount>,
    pub cards: Vec<ListingCard>,
    pub empty_message: Option<&'static str>,
}

pub fn page(listings: &[Listing], spec: &FilterSpec, viewer: &ViewerContext, now: DateTime<Utc>) -> BrowsePage {
    let cards: Vec<ListingCard> = catalog::filter_priced(listings, spec, viewer)
        .iter()
        .map(|p| ListingCard::new(p.listing, &p.price, now))
        .collect();

    BrowsePage {
        result_count: cards.len(),
        summary: format!("Showing {} results", cards.len()),
        active_filters: spec.active_filters(),
        categories: catalog::category_counts(listings),
        empty_message: cards.is_empty().then_some(NO_RESULTS),
        cards,
    }
}
