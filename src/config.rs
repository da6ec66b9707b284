use std::path::PathBuf;

use serde::Serialize;

use crate::catalog::{FilterSpec, DEFAULT_PRICE_MAX};
use crate::fixtures::DEMO_CAMPUS;
use crate::models::ViewerContext;

pub const ENV_VIEWER_CAMPUS: &str = "CAMPUS_MARKET_VIEWER_CAMPUS";
pub const ENV_CATALOG_PATH: &str = "CAMPUS_MARKET_CATALOG";
pub const ENV_PRICE_CEILING: &str = "CAMPUS_MARKET_PRICE_CEILING";
pub const ENV_VERIFIED_ONLY: &str = "CAMPUS_MARKET_VERIFIED_ONLY";

#[derive(Debug, Clone, Serialize)]
pub struct MarketConfig {
    /// Campus of the signed-in student. `None` browses anonymously.
    pub viewer_campus: Option<String>,
    /// JSON catalog to load instead of the built-in mock listings.
    pub catalog_path: Option<PathBuf>,
    pub price_ceiling: f64,
    pub verified_only: bool,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            viewer_campus: Some(DEMO_CAMPUS.to_string()),
            catalog_path: None,
            price_ceiling: DEFAULT_PRICE_MAX,
            verified_only: true,
        }
    }
}

impl MarketConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparseable values keep the
    /// default; an empty viewer campus means anonymous.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let viewer_campus = match lookup(ENV_VIEWER_CAMPUS) {
            Some(campus) if campus.trim().is_empty() => None,
            Some(campus) => Some(campus.trim().to_string()),
            None => defaults.viewer_campus,
        };
        let catalog_path = lookup(ENV_CATALOG_PATH)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let price_ceiling = lookup(ENV_PRICE_CEILING)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v >= 0.0)
            .unwrap_or(defaults.price_ceiling);
        let verified_only = lookup(ENV_VERIFIED_ONLY)
            .and_then(|v| match v.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Some(true),
                "0" | "false" | "no" | "off" => Some(false),
                _ => None,
            })
            .unwrap_or(defaults.verified_only);

        Self { viewer_campus, catalog_path, price_ceiling, verified_only }
    }

    pub fn viewer(&self) -> ViewerContext {
        ViewerContext { campus: self.viewer_campus.clone() }
    }

    /// Initial browse state for this deployment.
    pub fn initial_filter(&self) -> FilterSpec {
        FilterSpec {
            price_max: self.price_ceiling,
            verified_only: self.verified_only,
            ..FilterSpec::default()
        }
    }
}
