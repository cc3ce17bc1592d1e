//! Reference values derived once from the full catalog: the brand and size
//! lists offered as filters, the global price span and the price presets.

use std::collections::BTreeSet;
use std::str::FromStr;

use pcat_core::{compare_size_labels, Product};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::QueryError;
use crate::filters::PriceRange;

/// The four fixed price bands offered as one-click filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricePresetKind {
    UnderTen,
    TenToTwenty,
    TwentyToThirty,
    Premium,
}

impl PricePresetKind {
    pub const ALL: [PricePresetKind; 4] = [
        PricePresetKind::UnderTen,
        PricePresetKind::TenToTwenty,
        PricePresetKind::TwentyToThirty,
        PricePresetKind::Premium,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PricePresetKind::UnderTen => "under-10",
            PricePresetKind::TenToTwenty => "10-to-20",
            PricePresetKind::TwentyToThirty => "20-to-30",
            PricePresetKind::Premium => "premium",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PricePresetKind::UnderTen => "Under $10",
            PricePresetKind::TenToTwenty => "$10 to $20",
            PricePresetKind::TwentyToThirty => "$20 to $30",
            PricePresetKind::Premium => "Premium",
        }
    }
}

impl std::fmt::Display for PricePresetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricePresetKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PricePresetKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| QueryError::UnknownPreset(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricePreset {
    pub kind: PricePresetKind,
    pub label: &'static str,
    pub range: PriceRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facets {
    /// Distinct brands, sorted.
    pub all_brands: Vec<String>,
    /// Distinct size labels by magnitude ascending; malformed labels last.
    pub all_size_labels: Vec<String>,
    /// Lowest price of any size of any product.
    pub min_price: Decimal,
    /// Highest price of any size of any product.
    pub max_price: Decimal,
    pub price_presets: Vec<PricePreset>,
}

impl Facets {
    /// Derives the reference values from the full product list.
    ///
    /// An empty list yields empty filter lists and a zero price span.
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        let all_brands: Vec<String> = products
            .iter()
            .map(|p| p.brand.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut all_size_labels: Vec<String> = products
            .iter()
            .flat_map(|p| p.sizes.iter().map(|s| s.label.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        all_size_labels.sort_by(|a, b| compare_size_labels(a, b));

        let mut prices = products.iter().flat_map(|p| p.sizes.iter().map(|s| s.price));
        let (min_price, max_price) = match prices.next() {
            Some(first) => prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))),
            None => (Decimal::ZERO, Decimal::ZERO),
        };

        let price_presets = build_presets(min_price, max_price);

        Self {
            all_brands,
            all_size_labels,
            min_price,
            max_price,
            price_presets,
        }
    }

    /// The whole catalog price span, `[min_price, max_price]`.
    #[must_use]
    pub fn full_price_range(&self) -> PriceRange {
        PriceRange::spanning(self.min_price, self.max_price)
    }

    #[must_use]
    pub fn preset(&self, kind: PricePresetKind) -> Option<&PricePreset> {
        self.price_presets.iter().find(|p| p.kind == kind)
    }

    /// The preset whose range equals `range`, for highlighting the active band.
    #[must_use]
    pub fn preset_matching(&self, range: &PriceRange) -> Option<PricePresetKind> {
        self.price_presets
            .iter()
            .find(|p| p.range == *range)
            .map(|p| p.kind)
    }
}

/// Bands `[min, 10)`, `[10, 20)`, `[20, 30)` and `[30, max]`, so a price on a
/// breakpoint belongs to the higher band only. The outer ends follow the
/// catalog span but never cross the fixed breakpoints.
fn build_presets(min_price: Decimal, max_price: Decimal) -> Vec<PricePreset> {
    let ten = Decimal::from(10);
    let twenty = Decimal::from(20);
    let thirty = Decimal::from(30);

    PricePresetKind::ALL
        .into_iter()
        .map(|kind| {
            let range = match kind {
                PricePresetKind::UnderTen => PriceRange::half_open(min_price.min(ten), ten),
                PricePresetKind::TenToTwenty => PriceRange::half_open(ten, twenty),
                PricePresetKind::TwentyToThirty => PriceRange::half_open(twenty, thirty),
                PricePresetKind::Premium => PriceRange::spanning(thirty, max_price.max(thirty)),
            };
            PricePreset {
                kind,
                label: kind.label(),
                range,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "facets_test.rs"]
mod tests;
