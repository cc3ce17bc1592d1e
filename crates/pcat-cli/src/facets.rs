//! `facets` and `validate`: catalog-wide reference data.

use std::path::Path;

use pcat_core::parse_size_magnitude;
use pcat_query::Catalog;

use crate::format::fmt_price;

/// Print the brands, sizes, price span and price bands offered as filters.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
pub(crate) fn run_facets(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    let facets = catalog.facets();

    if json {
        println!("{}", serde_json::to_string_pretty(facets)?);
        return Ok(());
    }

    println!("brands ({}):", facets.all_brands.len());
    for brand in &facets.all_brands {
        println!("  {brand}");
    }
    println!("sizes: {}", facets.all_size_labels.join(", "));
    println!(
        "prices: {} - {}",
        fmt_price(facets.min_price),
        fmt_price(facets.max_price)
    );
    println!("price bands:");
    for preset in &facets.price_presets {
        println!(
            "  {:<10}{:<12}{}",
            preset.kind.as_str(),
            preset.label,
            preset.range
        );
    }

    Ok(())
}

/// Sizes across the catalog whose label carries no leading number.
fn malformed_size_labels(catalog: &Catalog) -> Vec<String> {
    catalog
        .facets()
        .all_size_labels
        .iter()
        .filter(|label| parse_size_magnitude(label).is_none())
        .cloned()
        .collect()
}

/// Print a summary of a catalog that already passed validation on load.
pub(crate) fn run_validate(catalog: &Catalog, path: &Path) {
    let facets = catalog.facets();
    let malformed = malformed_size_labels(catalog);

    println!("catalog OK: {}", path.display());
    println!("  products: {}", catalog.len());
    println!("  brands:   {}", facets.all_brands.len());
    println!("  sizes:    {}", facets.all_size_labels.len());
    if malformed.is_empty() {
        return;
    }
    println!(
        "  warning: {} size label(s) without a volume sort last and never ship free: {}",
        malformed.len(),
        malformed.join(", ")
    );
}
