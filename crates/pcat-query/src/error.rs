use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("product not found: {id}")]
    NotFound { id: String },

    #[error("product {id} has no size '{label}'")]
    UnknownSize { id: u32, label: String },

    #[error("invalid price range: min {min} is greater than max {max}")]
    InvalidPriceRange { min: Decimal, max: Decimal },

    #[error("unknown sort order '{0}'; expected featured, price-low, price-high, name-asc or name-desc")]
    UnknownSortOrder(String),

    #[error("unknown price preset '{0}'; expected under-10, 10-to-20, 20-to-30 or premium")]
    UnknownPreset(String),

    #[error("invalid query settings: {0}")]
    InvalidSettings(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(#[from] pcat_core::ConfigError),
}
