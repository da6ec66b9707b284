pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod pricing;
pub mod sell;
pub mod views;

pub use catalog::{filter, filter_priced, FilterSpec, Selector, SortKey};
pub use error::MarketError;
pub use models::{Category, Condition, DiscountConfig, Listing, Seller, ViewerContext};
pub use pricing::{compute_price, PriceResult};
