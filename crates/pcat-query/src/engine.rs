//! The catalog query engine.
//!
//! [`Catalog`] owns the immutable product list and the [`Facets`] derived
//! from it at construction. [`Catalog::query`] is a pure function of the
//! catalog and a [`FilterState`]: filter, stable sort, then slice one page.

use std::cmp::Ordering;

use pcat_core::{validate_products, Product};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::collation::{compare_names, NameKey};
use crate::error::QueryError;
use crate::facets::Facets;
use crate::filters::{FilterState, SortBy};
use crate::pagination;
use crate::view::{ProductCard, ProductDetail};

/// Tunables of the engine; the defaults are 12 products per page and free
/// delivery from 20 (ml) upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuerySettings {
    pub page_size: usize,
    pub free_delivery_min_size: u32,
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            page_size: 12,
            free_delivery_min_size: 20,
        }
    }
}

impl QuerySettings {
    #[must_use]
    pub fn from_app_config(config: &pcat_core::AppConfig) -> Self {
        Self {
            page_size: config.page_size,
            free_delivery_min_size: config.free_delivery_min_size,
        }
    }
}

/// Per-product values precomputed once so queries stay a single pass.
#[derive(Debug, Clone)]
struct ProductKeys {
    starting_price: Decimal,
    name_folded: String,
    brand_folded: String,
    name_key: NameKey,
}

impl ProductKeys {
    fn new(product: &Product) -> Self {
        Self {
            // validate_products guarantees at least one size
            starting_price: product.starting_price().unwrap_or(Decimal::ZERO),
            name_folded: product.name.to_lowercase(),
            brand_folded: product.brand.to_lowercase(),
            name_key: NameKey::new(&product.name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    keys: Vec<ProductKeys>,
    facets: Facets,
    settings: QuerySettings,
}

/// One page of query results.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage<'a> {
    pub items: Vec<&'a Product>,
    /// Matching products across all pages.
    pub total_count: usize,
    pub total_pages: usize,
    /// The page actually shown, after clamping to `1..=total_pages`.
    pub page: usize,
    pub page_size: usize,
}

impl CatalogPage<'_> {
    /// `true` when no product matched; the presenter shows the empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based positions of the first and last item shown, e.g. `(13, 14)`.
    #[must_use]
    pub fn showing(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }
}

impl Catalog {
    /// Builds a catalog with default [`QuerySettings`].
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidCatalog`] if the products fail validation.
    pub fn new(products: Vec<Product>) -> Result<Self, QueryError> {
        Self::with_settings(products, QuerySettings::default())
    }

    /// # Errors
    ///
    /// Returns [`QueryError::InvalidCatalog`] if the products fail validation,
    /// or [`QueryError::InvalidSettings`] for a zero page size.
    pub fn with_settings(products: Vec<Product>, settings: QuerySettings) -> Result<Self, QueryError> {
        if settings.page_size == 0 {
            return Err(QueryError::InvalidSettings(
                "page size must be at least 1".to_string(),
            ));
        }
        validate_products(&products)?;

        let keys = products.iter().map(ProductKeys::new).collect();
        let facets = Facets::from_products(&products);

        tracing::debug!(
            products = products.len(),
            brands = facets.all_brands.len(),
            sizes = facets.all_size_labels.len(),
            "catalog indexed"
        );

        Ok(Self {
            products,
            keys,
            facets,
            settings,
        })
    }

    /// Products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    #[must_use]
    pub fn settings(&self) -> &QuerySettings {
        &self.settings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Looks up a product for the detail view.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotFound`] if no product has `id`.
    pub fn find(&self, id: u32) -> Result<&Product, QueryError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| QueryError::NotFound { id: id.to_string() })
    }

    /// Looks up a product by the textual id carried in a route, e.g. `"7"`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotFound`] if `raw` is not a known product id.
    pub fn find_by_route_param(&self, raw: &str) -> Result<&Product, QueryError> {
        raw.trim()
            .parse::<u32>()
            .ok()
            .and_then(|id| self.find(id).ok())
            .ok_or_else(|| QueryError::NotFound { id: raw.to_string() })
    }

    /// Card read model for `product` under this catalog's delivery rule.
    #[must_use]
    pub fn card<'a>(&self, product: &'a Product) -> ProductCard<'a> {
        ProductCard::new(product, self.settings.free_delivery_min_size)
    }

    /// Detail read model for product `id`, with `size` preselected when given.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NotFound`] for an unknown id, or
    /// [`QueryError::UnknownSize`] if the product has no such size.
    pub fn detail(&self, id: u32, size: Option<&str>) -> Result<ProductDetail<'_>, QueryError> {
        let product = self.find(id)?;
        let mut detail = ProductDetail::new(product, self.settings.free_delivery_min_size)?;
        if let Some(label) = size {
            detail.select_size(label)?;
        }
        Ok(detail)
    }

    /// `true` if the product at `index` satisfies every active predicate.
    fn matches(&self, index: usize, filters: &FilterState, search: Option<&str>) -> bool {
        let product = &self.products[index];
        let keys = &self.keys[index];

        if let Some(query) = search {
            if !keys.name_folded.contains(query) && !keys.brand_folded.contains(query) {
                return false;
            }
        }

        let brands = filters.selected_brands();
        if !brands.is_empty() && !brands.contains(&product.brand) {
            return false;
        }

        let sizes = filters.selected_sizes();
        if !sizes.is_empty() && !product.sizes.iter().any(|s| sizes.contains(&s.label)) {
            return false;
        }

        if let Some(range) = filters.price_range() {
            if !range.contains(keys.starting_price) {
                return false;
            }
        }

        if filters.free_delivery_only()
            && !product.has_size_at_least(self.settings.free_delivery_min_size)
        {
            return false;
        }

        true
    }

    /// Indices of matching products, in catalog order.
    fn filtered_indices(&self, filters: &FilterState) -> Vec<usize> {
        let search = filters.trimmed_search().map(str::to_lowercase);
        (0..self.products.len())
            .filter(|&i| self.matches(i, filters, search.as_deref()))
            .collect()
    }

    fn compare(&self, a: usize, b: usize, sort_by: SortBy) -> Ordering {
        let (pa, pb) = (&self.products[a], &self.products[b]);
        let (ka, kb) = (&self.keys[a], &self.keys[b]);
        match sort_by {
            SortBy::Featured => pa.id.cmp(&pb.id),
            SortBy::PriceLow => ka.starting_price.cmp(&kb.starting_price),
            SortBy::PriceHigh => kb.starting_price.cmp(&ka.starting_price),
            SortBy::NameAsc => compare_names(&ka.name_key, &pa.name, &kb.name_key, &pb.name),
            SortBy::NameDesc => compare_names(&kb.name_key, &pb.name, &ka.name_key, &pa.name),
        }
    }

    /// Every matching product, filtered and sorted, without pagination.
    #[must_use]
    pub fn filter_and_sort(&self, filters: &FilterState) -> Vec<&Product> {
        let mut indices = self.filtered_indices(filters);
        // sort_by is stable: equal keys keep catalog order
        indices.sort_by(|&a, &b| self.compare(a, b, filters.sort_by()));
        indices.into_iter().map(|i| &self.products[i]).collect()
    }

    /// Evaluates `filters` against the catalog and returns the visible page.
    ///
    /// A page beyond the last is clamped to the last page; callers holding
    /// the session state should mirror it with [`FilterState::clamp_page`].
    #[must_use]
    pub fn query(&self, filters: &FilterState) -> CatalogPage<'_> {
        let sorted = self.filter_and_sort(filters);
        let total_count = sorted.len();
        let page_size = self.settings.page_size;
        let total_pages = pagination::total_pages(total_count, page_size);
        let page = pagination::clamp_page(filters.current_page(), total_pages);
        let bounds = pagination::page_bounds(page, page_size, total_count);

        tracing::debug!(
            total_count,
            total_pages,
            page,
            requested_page = filters.current_page(),
            sort = %filters.sort_by(),
            "catalog query evaluated"
        );

        CatalogPage {
            items: sorted[bounds].to_vec(),
            total_count,
            total_pages,
            page,
            page_size,
        }
    }

    /// Runs the query and writes any page clamp back into `filters`.
    pub fn query_and_clamp(&self, filters: &mut FilterState) -> CatalogPage<'_> {
        let page = self.query(filters);
        filters.clamp_page(page.total_pages);
        page
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod tests;
