use thiserror::Error;

/// Errors raised by the glue around the pricing and filtering engine.
///
/// `compute_price` and `filter` themselves never fail; only parsing user
/// input and loading catalogs can.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    #[error("unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("invalid price: {0:?}")]
    InvalidPrice(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("duplicate listing id: {0}")]
    DuplicateListing(String),

    #[error("catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MarketError>;
