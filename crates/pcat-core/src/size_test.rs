use std::cmp::Ordering;

use super::*;

// -----------------------------------------------------------------------
// parse_size_magnitude
// -----------------------------------------------------------------------

#[test]
fn magnitude_plain_ml_label() {
    assert_eq!(parse_size_magnitude("10ml"), Some(10));
}

#[test]
fn magnitude_with_space_before_unit() {
    assert_eq!(parse_size_magnitude("100 ml"), Some(100));
}

#[test]
fn magnitude_skips_leading_whitespace() {
    assert_eq!(parse_size_magnitude("  20ml"), Some(20));
}

#[test]
fn magnitude_accepts_plus_sign() {
    assert_eq!(parse_size_magnitude("+50ml"), Some(50));
}

#[test]
fn magnitude_stops_at_decimal_point() {
    assert_eq!(parse_size_magnitude("7.5ml"), Some(7));
}

#[test]
fn magnitude_none_for_text_label() {
    assert!(parse_size_magnitude("travel size").is_none());
}

#[test]
fn magnitude_none_for_empty_label() {
    assert!(parse_size_magnitude("").is_none());
}

#[test]
fn magnitude_none_for_negative_label() {
    assert!(parse_size_magnitude("-10ml").is_none());
}

#[test]
fn magnitude_none_on_overflow() {
    assert!(parse_size_magnitude("99999999999ml").is_none());
}

#[test]
fn magnitude_non_ascii_suffix_no_panic() {
    assert_eq!(parse_size_magnitude("30мл"), Some(30));
}

// -----------------------------------------------------------------------
// compare_size_labels
// -----------------------------------------------------------------------

#[test]
fn compare_orders_by_magnitude_not_text() {
    assert_eq!(compare_size_labels("100ml", "20ml"), Ordering::Greater);
    assert_eq!(compare_size_labels("10ml", "20ml"), Ordering::Less);
}

#[test]
fn compare_malformed_sorts_last() {
    assert_eq!(compare_size_labels("sample", "100ml"), Ordering::Greater);
    assert_eq!(compare_size_labels("10ml", "sample"), Ordering::Less);
}

#[test]
fn compare_equal_magnitude_falls_back_to_text() {
    assert_eq!(compare_size_labels("20 ml", "20ml"), Ordering::Less);
    assert_eq!(compare_size_labels("20ml", "20ml"), Ordering::Equal);
}

#[test]
fn compare_two_malformed_uses_text() {
    assert_eq!(compare_size_labels("mini", "sample"), Ordering::Less);
}
