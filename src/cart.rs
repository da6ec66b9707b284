use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::find_listing;
use crate::models::{Listing, ViewerContext};
use crate::pricing::PriceResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub listing_id: String,
    pub quantity: u32,
}

/// Shopping cart owned by the caller. Holds listing ids and quantities only;
/// prices are resolved against a catalog when a summary is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds `qty` of a listing, merging with an existing line.
    pub fn add(&mut self, listing_id: &str, qty: i32) {
        if qty <= 0 {
            return;
        }
        let qty = qty as u32;
        match self.lines.iter_mut().find(|l| l.listing_id == listing_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(qty),
            None => self.lines.push(CartLine { listing_id: listing_id.to_string(), quantity: qty }),
        }
    }

    /// Sets the quantity of a line. Zero or less removes it.
    pub fn update_quantity(&mut self, listing_id: &str, qty: i32) {
        if qty <= 0 {
            self.remove(listing_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.listing_id == listing_id) {
            line.quantity = qty as u32;
        }
    }

    pub fn remove(&mut self, listing_id: &str) {
        self.lines.retain(|l| l.listing_id != listing_id);
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Prices every line for `viewer`. Lines whose listing is not in
    /// `listings` are left out of the summary.
    pub fn summary<'a>(&self, listings: &'a [Listing], viewer: &ViewerContext) -> CartSummary<'a> {
        let mut priced = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            match find_listing(listings, &line.listing_id) {
                Some(listing) => priced.push(PricedLine {
                    listing,
                    quantity: line.quantity,
                    price: listing.price_for(viewer),
                }),
                None => warn!(listing_id = %line.listing_id, "cart line references unknown listing, skipping"),
            }
        }
        CartSummary::from_lines(priced)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricedLine<'a> {
    pub listing: &'a Listing,
    pub quantity: u32,
    pub price: PriceResult,
}

impl PricedLine<'_> {
    pub fn line_total(&self) -> f64 {
        self.price.final_price * self.quantity as f64
    }

    pub fn line_subtotal(&self) -> f64 {
        self.price.original_price * self.quantity as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary<'a> {
    pub lines: Vec<PricedLine<'a>>,
    pub item_count: u32,
    /// Undiscounted prices times quantities.
    pub subtotal: f64,
    pub student_savings: f64,
    pub campus_savings: f64,
    pub total_savings: f64,
    pub total: f64,
}

impl<'a> CartSummary<'a> {
    fn from_lines(lines: Vec<PricedLine<'a>>) -> Self {
        let item_count: u32 = lines.iter().map(|l| l.quantity).sum();
        let subtotal = sum_lines(&lines, |l| l.line_subtotal());
        let student_savings = sum_lines(&lines, |l| l.price.student_savings * l.quantity as f64);
        let campus_savings = sum_lines(&lines, |l| l.price.campus_savings * l.quantity as f64);
        let total = sum_lines(&lines, |l| l.line_total());
        Self {
            lines,
            item_count,
            subtotal,
            student_savings,
            campus_savings,
            total_savings: student_savings + campus_savings,
            total,
        }
    }
}

// Folds from +0.0; `Sum` for f64 starts at -0.0, which prints as "$-0.00".
fn sum_lines(lines: &[PricedLine<'_>], amount: impl Fn(&PricedLine<'_>) -> f64) -> f64 {
    lines.iter().map(amount).fold(0.0, |acc, x| acc + x)
}
