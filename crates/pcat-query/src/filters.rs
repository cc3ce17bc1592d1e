//! Session filter state and the summaries derived from it.
//!
//! [`FilterState`] is owned by one browsing session and mutated through its
//! methods only: every change to a filter or the sort order sends the session
//! back to page 1, which the fields being private guarantees.

use std::collections::BTreeSet;
use std::str::FromStr;

use pcat_core::compare_size_labels;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::QueryError;
use crate::facets::Facets;

/// Display order of the result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Catalog order, ascending by product id.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    NameAsc,
    NameDesc,
}

impl SortBy {
    pub const ALL: [SortBy; 5] = [
        SortBy::Featured,
        SortBy::PriceLow,
        SortBy::PriceHigh,
        SortBy::NameAsc,
        SortBy::NameDesc,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::Featured => "featured",
            SortBy::PriceLow => "price-low",
            SortBy::PriceHigh => "price-high",
            SortBy::NameAsc => "name-asc",
            SortBy::NameDesc => "name-desc",
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortBy {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortBy::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| QueryError::UnknownSortOrder(s.to_string()))
    }
}

/// Price bounds applied to a product's cheapest size.
///
/// The lower bound is always inclusive. The upper bound is inclusive unless
/// the range was built with [`PriceRange::half_open`], as the lower price
/// bands are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: Decimal,
    max: Decimal,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    max_exclusive: bool,
}

impl PriceRange {
    /// Inclusive range `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidPriceRange`] when `min > max`.
    pub fn new(min: Decimal, max: Decimal) -> Result<Self, QueryError> {
        if min > max {
            return Err(QueryError::InvalidPriceRange { min, max });
        }
        Ok(Self {
            min,
            max,
            max_exclusive: false,
        })
    }

    /// Inclusive range covering both endpoints, whichever order they come in.
    #[must_use]
    pub fn spanning(a: Decimal, b: Decimal) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
            max_exclusive: false,
        }
    }

    /// Range `[a, b)` with the endpoints ordered; `a == b` matches nothing.
    #[must_use]
    pub fn half_open(a: Decimal, b: Decimal) -> Self {
        Self {
            max_exclusive: true,
            ..Self::spanning(a, b)
        }
    }

    #[must_use]
    pub fn min(&self) -> Decimal {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Decimal {
        self.max
    }

    #[must_use]
    pub fn is_max_exclusive(&self) -> bool {
        self.max_exclusive
    }

    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        if self.max_exclusive {
            self.min <= price && price < self.max
        } else {
            self.min <= price && price <= self.max
        }
    }

    /// `true` when this range excludes part of the inclusive span `[lo, hi]`.
    #[must_use]
    pub fn narrows(&self, lo: Decimal, hi: Decimal) -> bool {
        self.min > lo || self.max < hi || (self.max_exclusive && self.max <= hi)
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (min, max) = (self.min.normalize(), self.max.normalize());
        if self.max_exclusive {
            write!(f, "${min} - under ${max}")
        } else {
            write!(f, "${min} - ${max}")
        }
    }
}

/// One removable summary of an active predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum FilterChip {
    Brand(String),
    Size(String),
    FreeDelivery,
    PriceRange(PriceRange),
}

impl std::fmt::Display for FilterChip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterChip::Brand(brand) => f.write_str(brand),
            FilterChip::Size(label) => f.write_str(label),
            FilterChip::FreeDelivery => f.write_str("Free delivery"),
            FilterChip::PriceRange(range) => range.fmt(f),
        }
    }
}

/// Filter, sort and page selection of a browsing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    search_query: String,
    selected_brands: BTreeSet<String>,
    selected_sizes: BTreeSet<String>,
    /// `None` means the full catalog price span.
    price_range: Option<PriceRange>,
    free_delivery_only: bool,
    sort_by: SortBy,
    current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_brands: BTreeSet::new(),
            selected_sizes: BTreeSet::new(),
            price_range: None,
            free_delivery_only: false,
            sort_by: SortBy::Featured,
            current_page: 1,
        }
    }
}

impl FilterState {
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub fn selected_brands(&self) -> &BTreeSet<String> {
        &self.selected_brands
    }

    #[must_use]
    pub fn selected_sizes(&self) -> &BTreeSet<String> {
        &self.selected_sizes
    }

    #[must_use]
    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    #[must_use]
    pub fn free_delivery_only(&self) -> bool {
        self.free_delivery_only
    }

    #[must_use]
    pub fn sort_by(&self) -> SortBy {
        self.sort_by
    }

    /// 1-based page number as last requested; see [`FilterState::clamp_page`].
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// The search text with surrounding whitespace removed, if any remains.
    #[must_use]
    pub fn trimmed_search(&self) -> Option<&str> {
        let trimmed = self.search_query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        let changed = self.search_query != query;
        self.search_query = query;
        self.touch(changed);
    }

    pub fn select_brand(&mut self, brand: impl Into<String>) {
        let changed = self.selected_brands.insert(brand.into());
        self.touch(changed);
    }

    pub fn deselect_brand(&mut self, brand: &str) {
        let changed = self.selected_brands.remove(brand);
        self.touch(changed);
    }

    /// Flips membership of `brand`, as a checkbox does.
    pub fn toggle_brand(&mut self, brand: &str) {
        if self.selected_brands.contains(brand) {
            self.deselect_brand(brand);
        } else {
            self.select_brand(brand);
        }
    }

    pub fn clear_brands(&mut self) {
        let changed = !self.selected_brands.is_empty();
        self.selected_brands.clear();
        self.touch(changed);
    }

    pub fn select_size(&mut self, label: impl Into<String>) {
        let changed = self.selected_sizes.insert(label.into());
        self.touch(changed);
    }

    pub fn deselect_size(&mut self, label: &str) {
        let changed = self.selected_sizes.remove(label);
        self.touch(changed);
    }

    pub fn toggle_size(&mut self, label: &str) {
        if self.selected_sizes.contains(label) {
            self.deselect_size(label);
        } else {
            self.select_size(label);
        }
    }

    pub fn clear_sizes(&mut self) {
        let changed = !self.selected_sizes.is_empty();
        self.selected_sizes.clear();
        self.touch(changed);
    }

    /// Sets the price bounds; `None` restores the full catalog span.
    pub fn set_price_range(&mut self, range: Option<PriceRange>) {
        let changed = self.price_range != range;
        self.price_range = range;
        self.touch(changed);
    }

    pub fn set_free_delivery_only(&mut self, enabled: bool) {
        let changed = self.free_delivery_only != enabled;
        self.free_delivery_only = enabled;
        self.touch(changed);
    }

    pub fn set_sort_by(&mut self, sort_by: SortBy) {
        let changed = self.sort_by != sort_by;
        self.sort_by = sort_by;
        self.touch(changed);
    }

    /// Requests a page. Page 0 is treated as page 1; the upper bound is only
    /// known once a query runs, see [`FilterState::clamp_page`].
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// Pulls the current page back into `1..=total_pages`.
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.current_page = crate::pagination::clamp_page(self.current_page, total_pages);
    }

    /// Clears exactly the predicate behind `chip`, leaving all others untouched.
    pub fn remove_chip(&mut self, chip: &FilterChip) {
        match chip {
            FilterChip::Brand(brand) => self.deselect_brand(brand),
            FilterChip::Size(label) => self.deselect_size(label),
            FilterChip::FreeDelivery => self.set_free_delivery_only(false),
            FilterChip::PriceRange(_) => self.set_price_range(None),
        }
    }

    /// Restores every field to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `true` when the price range excludes part of the catalog span.
    #[must_use]
    pub fn price_range_narrowed(&self, facets: &Facets) -> bool {
        self.price_range
            .is_some_and(|r| r.narrows(facets.min_price, facets.max_price))
    }

    /// Number of independently active predicate categories: search, brand,
    /// size, free delivery, narrowed price range and a non-default sort.
    #[must_use]
    pub fn active_filter_count(&self, facets: &Facets) -> usize {
        [
            self.trimmed_search().is_some(),
            !self.selected_brands.is_empty(),
            !self.selected_sizes.is_empty(),
            self.free_delivery_only,
            self.price_range_narrowed(facets),
            self.sort_by != SortBy::Featured,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Removable chips: one per brand, one per size, then free delivery and
    /// a narrowed price range when active.
    #[must_use]
    pub fn chips(&self, facets: &Facets) -> Vec<FilterChip> {
        let mut chips: Vec<FilterChip> = self
            .selected_brands
            .iter()
            .cloned()
            .map(FilterChip::Brand)
            .collect();
        let mut sizes: Vec<&String> = self.selected_sizes.iter().collect();
        sizes.sort_by(|a, b| compare_size_labels(a, b));
        chips.extend(sizes.into_iter().cloned().map(FilterChip::Size));
        if self.free_delivery_only {
            chips.push(FilterChip::FreeDelivery);
        }
        if let Some(range) = self.price_range.filter(|_| self.price_range_narrowed(facets)) {
            chips.push(FilterChip::PriceRange(range));
        }
        chips
    }

    fn touch(&mut self, changed: bool) {
        if changed {
            self.current_page = 1;
        }
    }
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
