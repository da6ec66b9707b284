//! Mock catalog the storefront screens render until a real listing source
//! exists, plus loading catalogs from JSON.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::error::{MarketError, Result};
use crate::models::{Category, Condition, DiscountConfig, Listing, Seller};

pub const DEMO_CAMPUS: &str = "Stanford University";

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    price: f64,
    category: Category,
    condition: Condition,
    discounts: (f64, f64),
    seller: (&str, &str, f32),
    location: &str,
    image_url: &str,
) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        price,
        category,
        condition,
        discounts: Some(DiscountConfig::new(discounts.0, discounts.1)),
        seller: Seller {
            name: seller.0.to_string(),
            campus: seller.1.to_string(),
            verified: true,
            rating: Some(seller.2),
        },
        location: location.to_string(),
        image_url: image_url.to_string(),
        listed_at: None,
    }
}

/// Listings shown on the browse, detail and cart screens. None of them carry
/// a listing date, so the `newest` sort leaves them in this order.
pub fn mock_catalog() -> Vec<Listing> {
    let mut macbook = listing(
        "1",
        "MacBook Air M2 - Perfect for CS Students",
        999.0,
        Category::Electronics,
        Condition::LikeNew,
        (15.0, 5.0),
        ("Sarah Chen", DEMO_CAMPUS, 4.9),
        "Palo Alto, CA",
        "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?w=400",
    );
    macbook.description = "M2 chip, 8GB RAM, 256GB storage. Original charger and box, used for six months.".to_string();

    vec![
        macbook,
        listing(
            "2",
            "Calculus Textbook - 12th Edition",
            45.0,
            Category::Textbooks,
            Condition::Good,
            (20.0, 10.0),
            ("Mike Rodriguez", "MIT", 4.7),
            "Cambridge, MA",
            "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=400",
        ),
        listing(
            "3",
            "Dorm Mini Fridge - Compact & Clean",
            120.0,
            Category::DormEssentials,
            Condition::New,
            (10.0, 5.0),
            ("Emma Thompson", "UCLA", 4.8),
            "Los Angeles, CA",
            "https://images.unsplash.com/photo-1571175443880-49e1d25b2bc5?w=400",
        ),
        listing(
            "4",
            "Chemistry Lab Goggles & Notebook Set",
            25.0,
            Category::SchoolSupplies,
            Condition::New,
            (15.0, 5.0),
            ("Alex Johnson", DEMO_CAMPUS, 4.6),
            "Palo Alto, CA",
            "https://images.unsplash.com/photo-1532094349884-543bc11b234d?w=400",
        ),
        listing(
            "5",
            "iPhone 13 - Excellent Condition",
            599.0,
            Category::Electronics,
            Condition::LikeNew,
            (10.0, 5.0),
            ("Alex Johnson", DEMO_CAMPUS, 4.6),
            "Palo Alto, CA",
            "https://images.unsplash.com/photo-1592750475338-74b7b21085ab?w=300",
        ),
        listing(
            "6",
            "Data Structures & Algorithms Textbook",
            35.0,
            Category::Textbooks,
            Condition::Good,
            (15.0, 10.0),
            ("Sarah Chen", DEMO_CAMPUS, 4.9),
            "Palo Alto, CA",
            "https://images.unsplash.com/photo-1544716278-ca5e3f4abd8c?w=300",
        ),
    ]
}

/// Parses a JSON array of listings. Ids must be unique.
pub fn load_catalog(json: &str) -> Result<Vec<Listing>> {
    let listings: Vec<Listing> = serde_json::from_str(json)?;
    let mut seen: HashSet<&str> = HashSet::with_capacity(listings.len());
    for l in &listings {
        if !seen.insert(l.id.as_str()) {
            return Err(MarketError::DuplicateListing(l.id.clone()));
        }
    }
    Ok(listings)
}

pub fn load_catalog_file(path: &Path) -> Result<Vec<Listing>> {
    let raw = std::fs::read_to_string(path)?;
    let listings = load_catalog(&raw)?;
    info!(path = %path.display(), count = listings.len(), "loaded catalog");
    Ok(listings)
}
