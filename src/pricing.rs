//! Discounted price calculation.
//!
//! Every screen that shows a price goes through [`compute_price`]: listing
//! cards, the detail page, the sell preview, the cart and the catalog filter.

use serde::{Deserialize, Serialize};

use crate::models::DiscountConfig;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceResult {
    pub original_price: f64,
    pub final_price: f64,
    /// `original_price - final_price`, never negative.
    pub savings: f64,
    /// Rounded percent off, 0..=100.
    pub discount_percent: u8,
    /// Part of `savings` produced by the student discount.
    pub student_savings: f64,
    /// Part of `savings` produced by the same-campus bonus.
    pub campus_savings: f64,
}

impl PriceResult {
    pub fn has_discount(&self) -> bool {
        self.final_price < self.original_price
    }

    pub fn campus_applied(&self) -> bool {
        self.campus_savings > 0.0
    }

    pub fn student_applied(&self) -> bool {
        self.student_savings > 0.0
    }
}

/// Clamps a percentage into `[0, 100]`. NaN counts as no discount.
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

fn sanitize_base(base_price: f64) -> f64 {
    if base_price.is_finite() && base_price > 0.0 {
        base_price
    } else {
        0.0
    }
}

fn offered(percent: Option<f64>) -> Option<f64> {
    percent.map(clamp_percent).filter(|p| *p > 0.0)
}

/// Applies the student discount and then, for a viewer on the seller's
/// campus, the same-campus bonus. The two are multiplied, never summed.
pub fn compute_price(
    base_price: f64,
    discounts: Option<&DiscountConfig>,
    viewer_campus: Option<&str>,
    seller_campus: &str,
) -> PriceResult {
    let base = sanitize_base(base_price);
    let discounts = discounts.copied().unwrap_or_default();

    let mut price = base;
    if let Some(student) = offered(discounts.student_percent) {
        price *= 1.0 - student / 100.0;
    }
    let after_student = price;

    let same_campus = viewer_campus.is_some_and(|campus| campus == seller_campus);
    if same_campus {
        if let Some(campus) = offered(discounts.campus_percent) {
            price *= 1.0 - campus / 100.0;
        }
    }

    let savings = base - price;
    let discount_percent = if base > 0.0 {
        (savings / base * 100.0).round().clamp(0.0, 100.0) as u8
    } else {
        0
    };

    PriceResult {
        original_price: base,
        final_price: price,
        savings,
        discount_percent,
        student_savings: base - after_student,
        campus_savings: after_student - price,
    }
}
