//! `browse`: the storefront grid with filters, sort order and paging.

use clap::Args;
use pcat_query::{
    Catalog, CatalogPage, Facets, FilterChip, FilterState, PricePresetKind, PriceRange,
    ProductCard, SortBy,
};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::{fmt_price, truncate};

#[derive(Debug, Default, Args)]
pub struct BrowseArgs {
    /// Case-insensitive text matched against name and brand
    #[arg(long)]
    pub search: Option<String>,

    /// Restrict to a brand; repeat for several
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Restrict to perfumes offered in a size, e.g. 20ml; repeat for several
    #[arg(long = "size")]
    pub sizes: Vec<String>,

    /// Lowest starting price to include
    #[arg(long, conflicts_with = "preset")]
    pub min_price: Option<Decimal>,

    /// Highest starting price to include
    #[arg(long, conflicts_with = "preset")]
    pub max_price: Option<Decimal>,

    /// Price band: under-10, 10-to-20, 20-to-30 or premium
    #[arg(long)]
    pub preset: Option<PricePresetKind>,

    /// Only perfumes with a size that ships free (see PCAT_FREE_DELIVERY_MIN_SIZE)
    #[arg(long)]
    pub free_delivery: bool,

    /// featured, price-low, price-high, name-asc or name-desc
    #[arg(long, default_value = "featured")]
    pub sort: SortBy,

    /// Page to show, starting at 1
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct BrowseOutput<'a> {
    items: Vec<ProductCard<'a>>,
    total_count: usize,
    total_pages: usize,
    page: usize,
    sort: SortBy,
    active_filter_count: usize,
    chips: Vec<FilterChip>,
}

/// Translate command line flags into a session [`FilterState`].
///
/// The page is applied last since every filter change resets it to 1.
///
/// # Errors
///
/// Returns an error if the price bounds are inverted.
pub(crate) fn build_filters(args: &BrowseArgs, facets: &Facets) -> anyhow::Result<FilterState> {
    let mut filters = FilterState::default();

    if let Some(search) = &args.search {
        filters.set_search_query(search.as_str());
    }

    for brand in &args.brands {
        if !facets.all_brands.contains(brand) {
            tracing::warn!(brand = %brand, "brand not in catalog; filter will match nothing");
        }
        filters.select_brand(brand.as_str());
    }

    for label in &args.sizes {
        if !facets.all_size_labels.contains(label) {
            tracing::warn!(size = %label, "size not in catalog; filter will match nothing");
        }
        filters.select_size(label.as_str());
    }

    if let Some(kind) = args.preset {
        filters.set_price_range(facets.preset(kind).map(|p| p.range));
    } else if args.min_price.is_some() || args.max_price.is_some() {
        let range = PriceRange::new(
            args.min_price.unwrap_or(facets.min_price),
            args.max_price.unwrap_or(facets.max_price),
        )?;
        filters.set_price_range(Some(range));
    }

    filters.set_free_delivery_only(args.free_delivery);
    filters.set_sort_by(args.sort);
    filters.set_page(args.page);

    Ok(filters)
}

/// Print one page of the catalog.
///
/// # Errors
///
/// Returns an error if the flags are inconsistent or JSON encoding fails.
pub(crate) fn run_browse(catalog: &Catalog, args: &BrowseArgs) -> anyhow::Result<()> {
    let facets = catalog.facets();
    let mut filters = build_filters(args, facets)?;
    let page = catalog.query_and_clamp(&mut filters);

    if page.page != args.page.max(1) {
        tracing::info!(requested = args.page, shown = page.page, "page out of range; clamped");
    }

    if args.json {
        let output = BrowseOutput {
            items: page.items.iter().map(|p| catalog.card(p)).collect(),
            total_count: page.total_count,
            total_pages: page.total_pages,
            page: page.page,
            sort: filters.sort_by(),
            active_filter_count: filters.active_filter_count(facets),
            chips: filters.chips(facets),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_page(catalog, &page, &filters);
    Ok(())
}

fn print_page(catalog: &Catalog, page: &CatalogPage<'_>, filters: &FilterState) {
    let facets = catalog.facets();
    let active = filters.active_filter_count(facets);
    if active > 0 {
        let chips: Vec<String> = filters
            .chips(facets)
            .iter()
            .map(|c| format!("[{c}]"))
            .collect();
        println!("active filters: {active} {}", chips.join(" "));
    }

    if page.is_empty() {
        println!("no perfumes match the current filters");
        println!("run `pcat browse` without flags to reset all filters");
        return;
    }

    if let Some((first, last)) = page.showing() {
        println!(
            "showing {first}-{last} of {} perfumes (page {} of {}, sorted {})",
            page.total_count,
            page.page,
            page.total_pages,
            filters.sort_by()
        );
    }
    println!();

    println!(
        "{:<5}{:<24}{:<18}{:<9}{:<22}DELIVERY",
        "ID", "NAME", "BRAND", "FROM", "SIZES"
    );
    for product in &page.items {
        let card = catalog.card(product);
        let delivery = delivery_badge(
            card.has_free_delivery_size,
            catalog.settings().free_delivery_min_size,
        );
        println!(
            "{:<5}{:<24}{:<18}{:<9}{:<22}{}",
            card.id,
            truncate(card.name, 20),
            truncate(card.brand, 15),
            fmt_price(card.starting_price),
            card.size_labels.join(", "),
            delivery
        );
    }

    if page.has_next() {
        println!();
        println!("next page: pcat browse --page {}", page.page + 1);
    }
}

/// Delivery column text; the threshold comes from the catalog settings.
fn delivery_badge(has_free_delivery_size: bool, free_delivery_min_size: u32) -> String {
    if has_free_delivery_size {
        format!("free {free_delivery_min_size}ml+")
    } else {
        "-".to_string()
    }
}
