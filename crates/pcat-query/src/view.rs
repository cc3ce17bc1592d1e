//! Read models for the product card and the product detail view.

use pcat_core::{Product, SizeOption};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::QueryError;

/// Fixed notice shown on every detail view; ordering happens off-line.
pub const ORDER_NOTICE: &str = "This page is for catalog browsing. Contact us to place an order.";

/// What a grid tile shows for one product.
#[derive(Debug, Clone, Serialize)]
pub struct ProductCard<'a> {
    pub id: u32,
    pub name: &'a str,
    pub brand: &'a str,
    pub image: &'a str,
    /// Price of the cheapest size.
    pub starting_price: Decimal,
    /// Whether any size ships for free.
    pub has_free_delivery_size: bool,
    /// Size labels by magnitude ascending.
    pub size_labels: Vec<&'a str>,
}

impl<'a> ProductCard<'a> {
    #[must_use]
    pub fn new(product: &'a Product, free_delivery_min_size: u32) -> Self {
        Self {
            id: product.id,
            name: &product.name,
            brand: &product.brand,
            image: &product.image,
            starting_price: product.starting_price().unwrap_or(Decimal::ZERO),
            has_free_delivery_size: product.has_size_at_least(free_delivery_min_size),
            size_labels: product
                .sizes_by_magnitude()
                .into_iter()
                .map(|s| s.label.as_str())
                .collect(),
        }
    }
}

/// Delivery line under the selected price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DeliveryNotice {
    Free,
    FeeApplies { label: String },
}

impl std::fmt::Display for DeliveryNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryNotice::Free => f.write_str("Free delivery included for this size"),
            DeliveryNotice::FeeApplies { label } => write!(f, "Delivery fee applies for {label}"),
        }
    }
}

/// A product opened in the detail view with one size selected.
///
/// The first listed size is selected on open, as the storefront does.
#[derive(Debug, Clone)]
pub struct ProductDetail<'a> {
    product: &'a Product,
    selected: &'a SizeOption,
    free_delivery_min_size: u32,
}

impl<'a> ProductDetail<'a> {
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownSize`] when the product lists no sizes.
    pub fn new(product: &'a Product, free_delivery_min_size: u32) -> Result<Self, QueryError> {
        let selected = product.sizes.first().ok_or_else(|| QueryError::UnknownSize {
            id: product.id,
            label: String::new(),
        })?;
        Ok(Self {
            product,
            selected,
            free_delivery_min_size,
        })
    }

    #[must_use]
    pub fn product(&self) -> &'a Product {
        self.product
    }

    #[must_use]
    pub fn selected_size(&self) -> &'a SizeOption {
        self.selected
    }

    #[must_use]
    pub fn selected_price(&self) -> Decimal {
        self.selected.price
    }

    /// # Errors
    ///
    /// Returns [`QueryError::UnknownSize`] if the product has no size `label`;
    /// the previous selection is kept.
    pub fn select_size(&mut self, label: &str) -> Result<(), QueryError> {
        self.selected = self.product.size(label).ok_or_else(|| QueryError::UnknownSize {
            id: self.product.id,
            label: label.to_string(),
        })?;
        Ok(())
    }

    #[must_use]
    pub fn has_free_delivery(&self) -> bool {
        self.selected.qualifies_for(self.free_delivery_min_size)
    }

    #[must_use]
    pub fn delivery_notice(&self) -> DeliveryNotice {
        if self.has_free_delivery() {
            DeliveryNotice::Free
        } else {
            DeliveryNotice::FeeApplies {
                label: self.selected.label.clone(),
            }
        }
    }

    #[must_use]
    pub fn order_notice(&self) -> &'static str {
        ORDER_NOTICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(label: &str, price: i64) -> SizeOption {
        SizeOption {
            label: label.to_string(),
            price: Decimal::from(price),
        }
    }

    fn rose_noir() -> Product {
        Product {
            id: 1,
            name: "Rose Noir".to_string(),
            brand: "Maison Lumiere".to_string(),
            description: "Dark rose.".to_string(),
            image: "/images/rose-noir.jpg".to_string(),
            sizes: vec![size("50ml", 52), size("10ml", 14), size("20ml", 24)],
        }
    }

    #[test]
    fn card_shows_starting_price_and_sorted_sizes() {
        let product = rose_noir();
        let card = ProductCard::new(&product, 20);
        assert_eq!(card.starting_price, Decimal::from(14));
        assert_eq!(card.size_labels, vec!["10ml", "20ml", "50ml"]);
        assert!(card.has_free_delivery_size);
    }

    #[test]
    fn card_without_large_size_has_no_free_delivery_badge() {
        let product = Product {
            sizes: vec![size("10ml", 8)],
            ..rose_noir()
        };
        let card = ProductCard::new(&product, 20);
        assert!(!card.has_free_delivery_size);
    }

    #[test]
    fn detail_selects_first_listed_size() {
        let product = rose_noir();
        let detail = ProductDetail::new(&product, 20).unwrap();
        assert_eq!(detail.selected_size().label, "50ml");
        assert_eq!(detail.selected_price(), Decimal::from(52));
        assert_eq!(detail.delivery_notice(), DeliveryNotice::Free);
    }

    #[test]
    fn detail_small_size_pays_delivery() {
        let product = rose_noir();
        let mut detail = ProductDetail::new(&product, 20).unwrap();
        detail.select_size("10ml").unwrap();
        assert!(!detail.has_free_delivery());
        assert_eq!(
            detail.delivery_notice().to_string(),
            "Delivery fee applies for 10ml"
        );
    }

    #[test]
    fn detail_unknown_size_keeps_selection() {
        let product = rose_noir();
        let mut detail = ProductDetail::new(&product, 20).unwrap();
        detail.select_size("20ml").unwrap();
        let err = detail.select_size("75ml").unwrap_err();
        assert!(matches!(err, QueryError::UnknownSize { id: 1, ref label } if label == "75ml"));
        assert_eq!(detail.selected_size().label, "20ml");
    }

    #[test]
    fn detail_without_sizes_is_an_error() {
        let product = Product {
            sizes: vec![],
            ..rose_noir()
        };
        assert!(ProductDetail::new(&product, 20).is_err());
    }

    #[test]
    fn detail_carries_order_notice() {
        let product = rose_noir();
        let detail = ProductDetail::new(&product, 20).unwrap();
        assert!(detail.order_notice().contains("Contact us to place an order"));
    }

    #[test]
    fn free_delivery_notice_text() {
        assert_eq!(
            DeliveryNotice::Free.to_string(),
            "Free delivery included for this size"
        );
    }
}
