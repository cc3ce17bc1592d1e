use pcat_core::{Product, SizeOption};

use super::*;

fn facets() -> Facets {
    let size = |label: &str, price: i64| SizeOption {
        label: label.to_string(),
        price: Decimal::from(price),
    };
    Facets::from_products(&[
        Product {
            id: 1,
            name: "Rose Noir".to_string(),
            brand: "Maison Lumiere".to_string(),
            description: String::new(),
            image: String::new(),
            sizes: vec![size("10ml", 5), size("50ml", 60)],
        },
        Product {
            id: 2,
            name: "Lemon Grove".to_string(),
            brand: "Atelier Sol".to_string(),
            description: String::new(),
            image: String::new(),
            sizes: vec![size("20ml", 13)],
        },
    ])
}

fn range(min: i64, max: i64) -> PriceRange {
    PriceRange::new(Decimal::from(min), Decimal::from(max)).unwrap()
}

fn on_page_three() -> FilterState {
    let mut state = FilterState::default();
    state.set_page(3);
    state
}

// -----------------------------------------------------------------------
// SortBy
// -----------------------------------------------------------------------

#[test]
fn sort_by_round_trips_through_str() {
    for sort in SortBy::ALL {
        assert_eq!(sort.as_str().parse::<SortBy>().unwrap(), sort);
    }
}

#[test]
fn sort_by_rejects_unknown() {
    let err = "cheapest".parse::<SortBy>().unwrap_err();
    assert!(matches!(err, QueryError::UnknownSortOrder(ref s) if s == "cheapest"));
}

#[test]
fn sort_by_serializes_kebab_case() {
    let json = serde_json::to_string(&SortBy::PriceHigh).unwrap();
    assert_eq!(json, "\"price-high\"");
}

// -----------------------------------------------------------------------
// PriceRange
// -----------------------------------------------------------------------

#[test]
fn price_range_rejects_inverted_bounds() {
    let err = PriceRange::new(Decimal::from(30), Decimal::from(20)).unwrap_err();
    assert!(matches!(err, QueryError::InvalidPriceRange { .. }));
}

#[test]
fn price_range_contains_is_inclusive() {
    let r = range(20, 30);
    assert!(r.contains(Decimal::from(20)));
    assert!(r.contains(Decimal::from(30)));
    assert!(!r.contains(Decimal::new(3001, 2)));
}

#[test]
fn price_range_spanning_orders_endpoints() {
    let r = PriceRange::spanning(Decimal::from(9), Decimal::from(2));
    assert_eq!((r.min(), r.max()), (Decimal::from(2), Decimal::from(9)));
}

#[test]
fn price_range_display() {
    assert_eq!(range(10, 20).to_string(), "$10 - $20");
    let half_open = PriceRange::half_open(Decimal::from(10), Decimal::from(20));
    assert_eq!(half_open.to_string(), "$10 - under $20");
}

#[test]
fn half_open_range_excludes_upper_bound() {
    let r = PriceRange::half_open(Decimal::from(20), Decimal::from(10));
    assert_eq!((r.min(), r.max()), (Decimal::from(10), Decimal::from(20)));
    assert!(r.contains(Decimal::from(10)));
    assert!(r.contains(Decimal::new(1999, 2)));
    assert!(!r.contains(Decimal::from(20)));
    assert_ne!(r, range(10, 20));
}

#[test]
fn half_open_range_narrows_span_sharing_its_upper_bound() {
    let r = PriceRange::half_open(Decimal::from(10), Decimal::from(20));
    assert!(r.narrows(Decimal::from(10), Decimal::from(20)));
    assert!(!range(10, 20).narrows(Decimal::from(10), Decimal::from(20)));
    assert!(!r.narrows(Decimal::from(10), Decimal::from(15)));
}

// -----------------------------------------------------------------------
// page reset on change
// -----------------------------------------------------------------------

#[test]
fn default_state_is_unfiltered_featured_page_one() {
    let state = FilterState::default();
    assert_eq!(state.search_query(), "");
    assert!(state.selected_brands().is_empty());
    assert!(state.selected_sizes().is_empty());
    assert!(state.price_range().is_none());
    assert!(!state.free_delivery_only());
    assert_eq!(state.sort_by(), SortBy::Featured);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn search_change_resets_page() {
    let mut state = on_page_three();
    state.set_search_query("rose");
    assert_eq!(state.current_page(), 1);
}

#[test]
fn unchanged_search_keeps_page() {
    let mut state = on_page_three();
    state.set_search_query("");
    assert_eq!(state.current_page(), 3);
}

#[test]
fn brand_toggle_resets_page() {
    let mut state = on_page_three();
    state.toggle_brand("Atelier Sol");
    assert!(state.selected_brands().contains("Atelier Sol"));
    assert_eq!(state.current_page(), 1);

    state.set_page(2);
    state.toggle_brand("Atelier Sol");
    assert!(state.selected_brands().is_empty());
    assert_eq!(state.current_page(), 1);
}

#[test]
fn size_toggle_resets_page() {
    let mut state = on_page_three();
    state.toggle_size("20ml");
    assert!(state.selected_sizes().contains("20ml"));
    assert_eq!(state.current_page(), 1);
}

#[test]
fn price_free_delivery_and_sort_changes_reset_page() {
    let mut state = on_page_three();
    state.set_price_range(Some(range(10, 20)));
    assert_eq!(state.current_page(), 1);

    state.set_page(3);
    state.set_free_delivery_only(true);
    assert_eq!(state.current_page(), 1);

    state.set_page(3);
    state.set_sort_by(SortBy::NameDesc);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn set_page_zero_becomes_one() {
    let mut state = FilterState::default();
    state.set_page(0);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn clamp_page_pulls_back_to_last() {
    let mut state = FilterState::default();
    state.set_page(7);
    state.clamp_page(2);
    assert_eq!(state.current_page(), 2);
}

#[test]
fn trimmed_search_ignores_whitespace_only() {
    let mut state = FilterState::default();
    state.set_search_query("   ");
    assert!(state.trimmed_search().is_none());
    state.set_search_query("  rose ");
    assert_eq!(state.trimmed_search(), Some("rose"));
}

// -----------------------------------------------------------------------
// summaries
// -----------------------------------------------------------------------

#[test]
fn active_count_zero_for_default() {
    assert_eq!(FilterState::default().active_filter_count(&facets()), 0);
}

#[test]
fn active_count_counts_categories_not_selections() {
    let facets = facets();
    let mut state = FilterState::default();
    state.set_search_query("rose");
    state.select_brand("Atelier Sol");
    state.select_brand("Maison Lumiere");
    state.select_size("10ml");
    state.set_free_delivery_only(true);
    state.set_price_range(Some(range(10, 20)));
    state.set_sort_by(SortBy::PriceLow);
    assert_eq!(state.active_filter_count(&facets), 6);
}

#[test]
fn full_span_price_range_is_not_narrowed() {
    let facets = facets();
    let mut state = FilterState::default();
    state.set_price_range(Some(facets.full_price_range()));
    assert!(!state.price_range_narrowed(&facets));
    assert_eq!(state.active_filter_count(&facets), 0);
    assert!(state.chips(&facets).is_empty());
}

#[test]
fn chips_one_per_brand_and_size_then_flags() {
    let facets = facets();
    let mut state = FilterState::default();
    state.select_brand("Maison Lumiere");
    state.select_brand("Atelier Sol");
    state.select_size("50ml");
    state.select_size("10ml");
    state.set_free_delivery_only(true);
    state.set_price_range(Some(range(10, 20)));
    state.set_search_query("rose");
    state.set_sort_by(SortBy::NameAsc);

    assert_eq!(
        state.chips(&facets),
        vec![
            FilterChip::Brand("Atelier Sol".to_string()),
            FilterChip::Brand("Maison Lumiere".to_string()),
            FilterChip::Size("10ml".to_string()),
            FilterChip::Size("50ml".to_string()),
            FilterChip::FreeDelivery,
            FilterChip::PriceRange(range(10, 20)),
        ]
    );
}

#[test]
fn removing_each_chip_clears_only_its_predicate() {
    let facets = facets();
    let mut state = FilterState::default();
    state.select_brand("Atelier Sol");
    state.select_size("20ml");
    state.set_free_delivery_only(true);
    state.set_price_range(Some(range(10, 20)));
    state.set_search_query("grove");

    let before = state.clone();
    for chip in before.chips(&facets) {
        let mut after = before.clone();
        after.remove_chip(&chip);
        assert!(!after.chips(&facets).contains(&chip), "chip {chip} still present");
        assert_eq!(
            after.chips(&facets).len(),
            before.chips(&facets).len() - 1,
            "removing {chip} touched another predicate"
        );
        assert_eq!(after.search_query(), "grove");
        assert_eq!(after.sort_by(), before.sort_by());
    }
}

#[test]
fn chip_labels() {
    assert_eq!(FilterChip::Brand("Atelier Sol".to_string()).to_string(), "Atelier Sol");
    assert_eq!(FilterChip::Size("20ml".to_string()).to_string(), "20ml");
    assert_eq!(FilterChip::FreeDelivery.to_string(), "Free delivery");
    assert_eq!(FilterChip::PriceRange(range(20, 30)).to_string(), "$20 - $30");
}

#[test]
fn reset_restores_default() {
    let mut state = FilterState::default();
    state.set_search_query("oud");
    state.select_brand("Velvet Oud");
    state.select_size("50ml");
    state.set_free_delivery_only(true);
    state.set_price_range(Some(range(30, 90)));
    state.set_sort_by(SortBy::PriceHigh);
    state.set_page(4);

    state.reset();
    assert_eq!(state, FilterState::default());
    state.reset();
    assert_eq!(state, FilterState::default());
}
