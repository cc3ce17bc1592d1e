//! Catalog query engine: facets, filtering, sorting and pagination over an
//! immutable product list, plus the read models the presenters render.

mod collation;
pub mod engine;
pub mod error;
pub mod facets;
pub mod filters;
pub mod pagination;
pub mod view;

pub use engine::{Catalog, CatalogPage, QuerySettings};
pub use error::QueryError;
pub use facets::{Facets, PricePreset, PricePresetKind};
pub use filters::{FilterChip, FilterState, PriceRange, SortBy};
pub use view::{DeliveryNotice, ProductCard, ProductDetail, ORDER_NOTICE};
