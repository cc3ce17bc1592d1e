use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::size::{compare_size_labels, parse_size_magnitude};

/// A perfume in the bundled catalog.
///
/// Products are loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog identifier; also the `featured` sort key.
    pub id: u32,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub description: String,
    /// Static asset reference, e.g. `"/images/rose-noir.jpg"`.
    #[serde(default)]
    pub image: String,
    /// Purchasable sizes in catalog order. Non-empty for every valid product.
    pub sizes: Vec<SizeOption>,
}

impl Product {
    /// Returns the cheapest size, i.e. the "starting at" offer.
    ///
    /// When several sizes share the lowest price the first listed wins.
    #[must_use]
    pub fn cheapest_size(&self) -> Option<&SizeOption> {
        self.sizes.iter().reduce(|best, s| if s.price < best.price { s } else { best })
    }

    /// Returns the price of the cheapest size.
    #[must_use]
    pub fn starting_price(&self) -> Option<Decimal> {
        self.cheapest_size().map(|s| s.price)
    }

    /// Returns `true` if at least one size has a magnitude of `threshold` or more.
    ///
    /// Sizes with malformed labels never count.
    #[must_use]
    pub fn has_size_at_least(&self, threshold: u32) -> bool {
        self.sizes.iter().any(|s| s.qualifies_for(threshold))
    }

    /// Returns `true` if any size carries exactly `label`.
    #[must_use]
    pub fn has_size_label(&self, label: &str) -> bool {
        self.sizes.iter().any(|s| s.label == label)
    }

    /// Looks up a size by its label.
    #[must_use]
    pub fn size(&self, label: &str) -> Option<&SizeOption> {
        self.sizes.iter().find(|s| s.label == label)
    }

    /// Returns the sizes ordered by magnitude ascending, malformed labels last.
    #[must_use]
    pub fn sizes_by_magnitude(&self) -> Vec<&SizeOption> {
        let mut sizes: Vec<&SizeOption> = self.sizes.iter().collect();
        sizes.sort_by(|a, b| compare_size_labels(&a.label, &b.label));
        sizes
    }
}

/// One bottle size of a [`Product`] with its price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    /// Display label with a leading magnitude, e.g. `"20ml"`.
    pub label: String,
    pub price: Decimal,
}

impl SizeOption {
    /// Leading integer of the label (`"20ml"` → `20`), if it parses.
    #[must_use]
    pub fn magnitude(&self) -> Option<u32> {
        parse_size_magnitude(&self.label)
    }

    /// Returns `true` when the magnitude is known and at least `threshold`.
    #[must_use]
    pub fn qualifies_for(&self, threshold: u32) -> bool {
        self.magnitude().is_some_and(|m| m >= threshold)
    }
}
