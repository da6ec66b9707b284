use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MarketError;
use crate::pricing::{self, PriceResult};

// === Domain Models ===

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Textbooks,
    Electronics,
    #[serde(rename = "Dorm Essentials")]
    DormEssentials,
    #[serde(rename = "School Supplies")]
    SchoolSupplies,
    Furniture,
    Clothing,
    #[serde(rename = "Sports & Recreation")]
    SportsRecreation,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Textbooks,
        Category::Electronics,
        Category::DormEssentials,
        Category::SchoolSupplies,
        Category::Furniture,
        Category::Clothing,
        Category::SportsRecreation,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Textbooks => "Textbooks",
            Category::Electronics => "Electronics",
            Category::DormEssentials => "Dorm Essentials",
            Category::SchoolSupplies => "School Supplies",
            Category::Furniture => "Furniture",
            Category::Clothing => "Clothing",
            Category::SportsRecreation => "Sports & Recreation",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MarketError::UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    Fair,
}

impl Condition {
    pub const ALL: [Condition; 4] = [Condition::New, Condition::LikeNew, Condition::Good, Condition::Fair];

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Condition::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MarketError::UnknownCondition(s.to_string()))
    }
}

/// Percentages a seller offers off the base price. `None` means the discount
/// is not offered at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountConfig {
    #[serde(default, alias = "student")]
    pub student_percent: Option<f64>,
    #[serde(default, alias = "sameCampus")]
    pub campus_percent: Option<f64>,
}

impl DiscountConfig {
    pub fn new(student_percent: f64, campus_percent: f64) -> Self {
        Self {
            student_percent: Some(student_percent),
            campus_percent: Some(campus_percent),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub name: String,
    pub campus: String,
    pub verified: bool,
    #[serde(default)]
    pub rating: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub condition: Condition,
    #[serde(default)]
    pub discounts: Option<DiscountConfig>,
    pub seller: Seller,
    pub location: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub listed_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Price of this listing as seen by `viewer`.
    pub fn price_for(&self, viewer: &ViewerContext) -> PriceResult {
        pricing::compute_price(
            self.price,
            self.discounts.as_ref(),
            viewer.campus.as_deref(),
            &self.seller.campus,
        )
    }
}

/// Who is looking at the catalog. An anonymous viewer has no campus and never
/// gets the same-campus bonus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerContext {
    pub campus: Option<String>,
}

impl ViewerContext {
    pub fn on_campus(campus: impl Into<String>) -> Self {
        Self { campus: Some(campus.into()) }
    }

    pub fn anonymous() -> Self {
        Self { campus: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

// === Form structs ===

/// Browse screen state as it appears in the address bar.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub condition: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub verified: Option<String>,
    pub sort: Option<String>,
}

/// Sell form fields exactly as typed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SellForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub condition: String,
    pub location: String,
    pub allow_student_discount: bool,
    pub student_discount_percent: f64,
    pub allow_campus_discount: bool,
    pub campus_discount_percent: f64,
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn time_ago(listed_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now - listed_at;
    let mins = diff.num_minutes();
    if mins < 1 { return "just now".to_string(); }
    if mins < 60 { return format!("{}m ago", mins); }
    let hours = diff.num_hours();
    if hours < 24 { return format!("{}h ago", hours); }
    let days = diff.num_days();
    if days < 7 { return format!("{}d ago", days); }
    if days < 30 { return format!("{}w ago", days / 7); }
    format!("{}mo ago", days / 30)
}
