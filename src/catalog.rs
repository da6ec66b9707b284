//! Search, filter and sort over an in-memory list of listings.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MarketError, Result};
use crate::models::{Category, CategoryCount, Condition, Listing, SearchQuery, ViewerContext};
use crate::pricing::PriceResult;

pub const DEFAULT_PRICE_MIN: f64 = 0.0;
pub const DEFAULT_PRICE_MAX: f64 = 1000.0;

const ANY_CATEGORY_LABEL: &str = "All Categories";
const ANY_CONDITION_LABEL: &str = "All Conditions";

/// Half a cent. Price bounds closer than this to the defaults count as unchanged.
const PRICE_TOLERANCE: f64 = 0.005;

/// Either "any value" or one exact value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selector<T> {
    Any,
    Is(T),
}

impl<T: PartialEq> Selector<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selector::Any => true,
            Selector::Is(wanted) => wanted == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Selector::Any)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    /// Most recently listed first. Listings without `listed_at` keep their
    /// input order behind the dated ones.
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    BestDiscount,
}

impl FromStr for SortKey {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "newest" => Ok(SortKey::Newest),
            "price-low" | "price_asc" | "price-ascending" => Ok(SortKey::PriceAsc),
            "price-high" | "price_desc" | "price-descending" => Ok(SortKey::PriceDesc),
            "discount" | "best-discount" | "best_discount" => Ok(SortKey::BestDiscount),
            _ => Err(MarketError::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub search_text: String,
    pub category: Selector<Category>,
    pub condition: Selector<Condition>,
    pub price_min: f64,
    pub price_max: f64,
    pub verified_only: bool,
    pub sort: SortKey,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: Selector::Any,
            condition: Selector::Any,
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
            verified_only: true,
            sort: SortKey::Newest,
        }
    }
}

impl FilterSpec {
    /// A filter that keeps every listing and leaves the order alone.
    pub fn unrestricted() -> Self {
        Self {
            price_max: f64::INFINITY,
            verified_only: false,
            ..Self::default()
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Labels for the criteria that differ from the default browse state.
    pub fn active_filters(&self) -> Vec<String> {
        let mut active = Vec::new();
        if !self.search_text.is_empty() {
            active.push(format!("\"{}\"", self.search_text));
        }
        if let Selector::Is(category) = self.category {
            active.push(category.label().to_string());
        }
        if let Selector::Is(condition) = self.condition {
            active.push(condition.label().to_string());
        }
        if !near(self.price_min, DEFAULT_PRICE_MIN) || !near(self.price_max, DEFAULT_PRICE_MAX) {
            active.push(format!("${:.0} - ${:.0}", self.price_min, self.price_max));
        }
        if self.verified_only {
            active.push("Verified Students Only".to_string());
        }
        active
    }

    fn matches_text(&self, listing: &Listing) -> bool {
        let needle = self.search_text.to_lowercase();
        needle.is_empty()
            || listing.title.to_lowercase().contains(&needle)
            || listing.category.label().to_lowercase().contains(&needle)
    }

    fn matches_attributes(&self, listing: &Listing) -> bool {
        self.matches_text(listing)
            && self.category.matches(&listing.category)
            && self.condition.matches(&listing.condition)
            && (!self.verified_only || listing.seller.verified)
    }

    fn matches_price(&self, price: &PriceResult) -> bool {
        price.final_price >= self.price_min && price.final_price <= self.price_max
    }
}

impl SearchQuery {
    /// Turns the browse screen's query state into a [`FilterSpec`]. Missing or
    /// blank fields keep their default.
    pub fn to_filter_spec(&self) -> Result<FilterSpec> {
        let mut spec = FilterSpec::default();

        // Search text is matched as typed, surrounding spaces included.
        if let Some(q) = self.q.as_deref().filter(|q| !q.is_empty()) {
            spec.search_text = q.to_string();
        }
        if let Some(cat) = non_blank(&self.category) {
            if !cat.eq_ignore_ascii_case(ANY_CATEGORY_LABEL) && !cat.eq_ignore_ascii_case("any") {
                spec.category = Selector::Is(cat.parse()?);
            }
        }
        if let Some(cond) = non_blank(&self.condition) {
            if !cond.eq_ignore_ascii_case(ANY_CONDITION_LABEL) && !cond.eq_ignore_ascii_case("any") {
                spec.condition = Selector::Is(cond.parse()?);
            }
        }
        if let Some(min) = non_blank(&self.min_price) {
            spec.price_min = parse_bound(min)?;
        }
        if let Some(max) = non_blank(&self.max_price) {
            spec.price_max = parse_bound(max)?;
        }
        if let Some(verified) = non_blank(&self.verified) {
            spec.verified_only = matches!(verified.to_ascii_lowercase().as_str(), "1" | "true" | "on" | "yes");
        }
        if let Some(sort) = non_blank(&self.sort) {
            spec.sort = sort.parse()?;
        }
        Ok(spec)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < PRICE_TOLERANCE
}

fn parse_bound(raw: &str) -> Result<f64> {
    let cleaned = raw.trim_start_matches('$');
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(MarketError::InvalidPrice(raw.to_string())),
    }
}

/// A listing paired with its price for the current viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricedListing<'a> {
    pub listing: &'a Listing,
    pub price: PriceResult,
}

/// Like [`filter`], keeping the computed price next to each listing.
pub fn filter_priced<'a>(
    listings: &'a [Listing],
    spec: &FilterSpec,
    viewer: &ViewerContext,
) -> Vec<PricedListing<'a>> {
    let mut matched: Vec<PricedListing<'a>> = listings
        .iter()
        .filter(|listing| spec.matches_attributes(listing))
        .map(|listing| PricedListing { listing, price: listing.price_for(viewer) })
        .filter(|priced| spec.matches_price(&priced.price))
        .collect();

    // `sort_by` is stable, ties keep catalog order.
    match spec.sort {
        SortKey::Newest => matched.sort_by(|a, b| newest_first(a.listing, b.listing)),
        SortKey::PriceAsc => matched.sort_by(|a, b| a.price.final_price.total_cmp(&b.price.final_price)),
        SortKey::PriceDesc => matched.sort_by(|a, b| b.price.final_price.total_cmp(&a.price.final_price)),
        SortKey::BestDiscount => matched.sort_by(|a, b| b.price.discount_percent.cmp(&a.price.discount_percent)),
    }

    debug!(
        total = listings.len(),
        matched = matched.len(),
        sort = ?spec.sort,
        "filtered catalog"
    );
    matched
}

/// Listings matching `spec`, ordered by `spec.sort`.
pub fn filter<'a>(listings: &'a [Listing], spec: &FilterSpec, viewer: &ViewerContext) -> Vec<&'a Listing> {
    filter_priced(listings, spec, viewer)
        .into_iter()
        .map(|priced| priced.listing)
        .collect()
}

fn newest_first(a: &Listing, b: &Listing) -> Ordering {
    match (a.listed_at, b.listed_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Listing count per category, in the fixed category order, skipping empty
/// categories.
pub fn category_counts(listings: &[Listing]) -> Vec<CategoryCount> {
    let mut counts: HashMap<Category, usize> = HashMap::new();
    for listing in listings {
        *counts.entry(listing.category).or_default() += 1;
    }
    Category::ALL
        .iter()
        .filter_map(|category| {
            counts.get(category).map(|count| CategoryCount { category: *category, count: *count })
        })
        .collect()
}

/// Other listings in the same category, at most `limit` of them.
pub fn related_listings<'a>(listings: &'a [Listing], listing: &Listing, limit: usize) -> Vec<&'a Listing> {
    listings
        .iter()
        .filter(|other| other.category == listing.category && other.id != listing.id)
        .take(limit)
        .collect()
}

pub fn find_listing<'a>(listings: &'a [Listing], id: &str) -> Option<&'a Listing> {
    listings.iter().find(|l| l.id == id)
}
