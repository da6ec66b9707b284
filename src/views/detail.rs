use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{find_listing, related_listings};
use crate::models::{format_price, Listing, ViewerContext};
use crate::views::ListingCard;

const RELATED_LIMIT: usize = 4;

#[derive(Debug, Clone, Serialize)]
pub struct DetailPage {
    pub card: ListingCard,
    pub description: String,
    pub seller_campus: String,
    pub seller_rating: Option<f32>,
    /// "19% OFF - Save $190.00", only when discounted.
    pub savings_label: Option<String>,
    pub quantity: u32,
    pub buy_now_label: String,
    pub related: Vec<ListingCard>,
}

/// Product detail for listing `id`, or `None` when it is not in the catalog.
/// A quantity of zero is shown as one.
pub fn page(
    listings: &[Listing],
    id: &str,
    viewer: &ViewerContext,
    quantity: u32,
    now: DateTime<Utc>,
) -> Option<DetailPage> {
    let listing = find_listing(listings, id)?;
    let price = listing.price_for(viewer);
    let quantity = quantity.max(1);

    let related = related_listings(listings, listing, RELATED_LIMIT)
        .into_iter()
        .map(|other| ListingCard::new(other, &other.price_for(viewer), now))
        .collect();

    Some(DetailPage {
        card: ListingCard::new(listing, &price, now),
        description: listing.description.clone(),
        seller_campus: listing.seller.campus.clone(),
        seller_rating: listing.seller.rating,
        savings_label: price
            .has_discount()
            .then(|| format!("{}% OFF - Save {}", price.discount_percent, format_price(price.savings))),
        quantity,
        buy_now_label: format!("Buy Now - {}", format_price(price.final_price * quantity as f64)),
        related,
    })
}
