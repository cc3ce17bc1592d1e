//! Loading and validation of the bundled product catalog.
//!
//! The catalog ships as a JSON array of [`Product`] records. YAML is accepted
//! as well so hand-maintained catalogs can live next to other config files.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;

use crate::products::Product;
use crate::ConfigError;

/// On-disk encoding of a catalog file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Yaml,
}

impl CatalogFormat {
    /// Picks the format from a path's extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedCatalogFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(ConfigError::UnsupportedCatalogFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Load and validate the product catalog from a JSON or YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>, ConfigError> {
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let products = parse_catalog(&content, format)?;
    tracing::debug!(path = %path.display(), count = products.len(), "catalog file parsed");
    Ok(products)
}

/// Parse and validate catalog content already held in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the content cannot be parsed or fails validation.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<Vec<Product>, ConfigError> {
    let products: Vec<Product> = match format {
        CatalogFormat::Json => serde_json::from_str(content).map_err(ConfigError::CatalogJsonParse)?,
        CatalogFormat::Yaml => serde_yaml::from_str(content).map_err(ConfigError::CatalogYamlParse)?,
    };

    validate_products(&products)?;

    Ok(products)
}

/// Check the structural invariants every catalog must satisfy.
///
/// Size labels without a leading magnitude are allowed but logged; they
/// degrade to "no free delivery" and sort last in size filters.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] describing the first violation found.
pub fn validate_products(products: &[Product]) -> Result<(), ConfigError> {
    if products.is_empty() {
        return Err(ConfigError::Validation(
            "catalog must contain at least one product".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();

    for product in products {
        if !seen_ids.insert(product.id) {
            return Err(ConfigError::Validation(format!(
                "duplicate product id: {}",
                product.id
            )));
        }

        if product.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product {} has an empty name",
                product.id
            )));
        }

        if product.brand.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' has an empty brand",
                product.name
            )));
        }

        if product.sizes.is_empty() {
            return Err(ConfigError::Validation(format!(
                "product '{}' must have at least one size",
                product.name
            )));
        }

        let mut seen_labels = HashSet::new();
        for size in &product.sizes {
            if size.price < Decimal::ZERO {
                return Err(ConfigError::Validation(format!(
                    "product '{}' size '{}' has negative price {}",
                    product.name, size.label, size.price
                )));
            }

            if !seen_labels.insert(size.label.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "product '{}' lists size '{}' more than once",
                    product.name, size.label
                )));
            }

            if size.magnitude().is_none() {
                tracing::warn!(
                    product_id = product.id,
                    label = %size.label,
                    "size label has no leading magnitude; excluded from free delivery"
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
