use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{MarketError, Result};
use crate::models::{Category, Condition, DiscountConfig, Listing, SellForm, Seller};
use crate::pricing::{self, clamp_percent};

/// What the seller sees next to the price field while filling in the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SellPreview {
    pub base_price: f64,
    /// Price for any verified student.
    pub student_price: f64,
    /// Price for a student on the seller's own campus.
    pub campus_price: f64,
    /// Deepest rounded percent off a buyer can get.
    pub best_discount_percent: u8,
}

pub fn preview_pricing(base_price: f64, student_percent: Option<f64>, campus_percent: Option<f64>) -> SellPreview {
    const OWN_CAMPUS: &str = "";
    let student_only = DiscountConfig { student_percent, campus_percent: None };
    let both = DiscountConfig { student_percent, campus_percent };

    let student = pricing::compute_price(base_price, Some(&student_only), None, OWN_CAMPUS);
    let campus = pricing::compute_price(base_price, Some(&both), Some(OWN_CAMPUS), OWN_CAMPUS);

    SellPreview {
        base_price: campus.original_price,
        student_price: student.final_price,
        campus_price: campus.final_price,
        best_discount_percent: campus.discount_percent,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingDraft {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub condition: Condition,
    pub location: String,
    pub discounts: DiscountConfig,
}

impl SellForm {
    /// Validates the form. Title and price are required; an empty category
    /// falls back to `Other` and an empty condition to `Good`.
    pub fn parse(&self) -> Result<ListingDraft> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(MarketError::MissingField("title"));
        }
        let raw_price = self.price.trim();
        if raw_price.is_empty() {
            return Err(MarketError::MissingField("price"));
        }
        let price = match raw_price.trim_start_matches('$').parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => p,
            _ => return Err(MarketError::InvalidPrice(self.price.clone())),
        };
        let category = match self.category.trim() {
            "" => Category::Other,
            c => c.parse()?,
        };
        let condition = match self.condition.trim() {
            "" => Condition::Good,
            c => c.parse()?,
        };

        Ok(ListingDraft {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            price,
            category,
            condition,
            location: self.location.trim().to_string(),
            discounts: DiscountConfig {
                student_percent: self
                    .allow_student_discount
                    .then(|| clamp_percent(self.student_discount_percent)),
                campus_percent: self
                    .allow_campus_discount
                    .then(|| clamp_percent(self.campus_discount_percent)),
            },
        })
    }
}

impl ListingDraft {
    pub fn preview(&self) -> SellPreview {
        preview_pricing(self.price, self.discounts.student_percent, self.discounts.campus_percent)
    }

    /// Publishes the draft under a fresh id. The listing inherits the
    /// seller's location when the form left it empty.
    pub fn into_listing(self, seller: Seller, fallback_location: &str, listed_at: DateTime<Utc>) -> Listing {
        let location = if self.location.is_empty() {
            fallback_location.to_string()
        } else {
            self.location
        };
        Listing {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            description: self.description,
            price: self.price,
            category: self.category,
            condition: self.condition,
            discounts: Some(self.discounts),
            seller,
            location,
            image_url: String::new(),
            listed_at: Some(listed_at),
        }
    }
}
