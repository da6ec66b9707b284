//! View models for the storefront screens. Each page is a plain serializable
//! struct the presentation layer renders as it likes.

pub mod browse;
pub mod cart;
pub mod detail;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{format_price, time_ago, Listing};
use crate::pricing::{clamp_percent, PriceResult};

#[derive(Debug, Clone, Serialize)]
pub struct ListingCard {
    pub id: String,
    pub title: String,
    pub category: &'static str,
    pub condition: &'static str,
    pub location: String,
    pub image_url: String,
    pub seller_name: String,
    pub seller_verified: bool,
    pub price: String,
    /// Struck-through base price, only when a discount applies.
    pub original_price: Option<String>,
    pub discount_badge: Option<String>,
    pub student_badge: Option<String>,
    pub campus_badge: Option<String>,
    pub listed: Option<String>,
}

impl ListingCard {
    pub fn new(listing: &Listing, price: &PriceResult, now: DateTime<Utc>) -> Self {
        let discounted = price.has_discount();
        let discounts = listing.discounts.unwrap_or_default();
        let student_badge = discounts
            .student_percent
            .map(clamp_percent)
            .filter(|p| *p > 0.0)
            .map(|p| format!("{}% student discount", p));
        let campus_badge = discounts
            .campus_percent
            .map(clamp_percent)
            .filter(|_| price.campus_applied())
            .map(|p| format!("+{}% same campus bonus", p));

        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            category: listing.category.label(),
            condition: listing.condition.label(),
            location: listing.location.clone(),
            image_url: listing.image_url.clone(),
            seller_name: listing.seller.name.clone(),
            seller_verified: listing.seller.verified,
            price: format_price(price.final_price),
            original_price: discounted.then(|| format_price(price.original_price)),
            discount_badge: discounted.then(|| format!("{}% OFF", price.discount_percent)),
            student_badge,
            campus_badge,
            listed: listing.listed_at.map(|at| time_ago(at, now)),
        }
    }
}
