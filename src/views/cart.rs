use serde::Serialize;

use crate::cart::Cart;
use crate::models::{format_price, Listing, ViewerContext};

pub const EMPTY_CART: &str = "Your cart is empty.";

#[derive(Debug, Clone, Serialize)]
pub struct CartLineView {
    pub listing_id: String,
    pub title: String,
    pub seller: String,
    pub condition: &'static str,
    pub quantity: u32,
    pub unit_price: String,
    pub original_price: String,
    pub line_total: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CartPage {
    pub item_count: u32,
    pub lines: Vec<CartLineView>,
    pub subtotal: String,
    pub student_discount: String,
    pub campus_discount: String,
    pub total: String,
    /// "You saved $x!" when anything was saved.
    pub savings_message: Option<String>,
    pub empty_message: Option<&'static str>,
}

pub fn page(cart: &Cart, listings: &[Listing], viewer: &ViewerContext) -> CartPage {
    let summary = cart.summary(listings, viewer);
    let lines = summary
        .lines
        .iter()
        .map(|line| CartLineView {
            listing_id: line.listing.id.clone(),
            title: line.listing.title.clone(),
            seller: line.listing.seller.name.clone(),
            condition: line.listing.condition.label(),
            quantity: line.quantity,
            unit_price: format_price(line.price.final_price),
            original_price: format_price(line.price.original_price),
            line_total: format_price(line.line_total()),
        })
        .collect::<Vec<_>>();

    CartPage {
        item_count: summary.item_count,
        subtotal: format_price(summary.subtotal),
        student_discount: format!("-{}", format_price(summary.student_savings)),
        campus_discount: format!("-{}", format_price(summary.campus_savings)),
        total: format_price(summary.total),
        savings_message: (summary.total_savings > 0.0)
            .then(|| format!("You saved {}!", format_price(summary.total_savings))),
        empty_message: lines.is_empty().then_some(EMPTY_CART),
        lines,
    }
}
