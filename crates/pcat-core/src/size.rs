//! Size-label parsing.
//!
//! Catalog size labels are free text with a leading integer magnitude, e.g.
//! `"10ml"`, `"20ml"`, `"100 ml"`. The magnitude drives free-delivery
//! eligibility and the ordering of size filters. Labels without a leading
//! integer are tolerated: they have no magnitude, never qualify for free
//! delivery, and order after every well-formed label.

use std::cmp::Ordering;

/// Parses the leading integer magnitude of a size label.
///
/// Leading whitespace and a single `+` sign are skipped; parsing stops at the
/// first non-digit. Returns `None` when no digits lead the label or the value
/// does not fit in a `u32`.
#[must_use]
pub fn parse_size_magnitude(label: &str) -> Option<u32> {
    let trimmed = label.trim_start();
    let digits_start = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = digits_start
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits_start.len());
    if end == 0 {
        return None;
    }
    digits_start[..end].parse::<u32>().ok()
}

/// Orders two size labels by magnitude ascending.
///
/// Labels without a magnitude sort last; ties (equal magnitude, or both
/// malformed) fall back to the label text so the order is total.
#[must_use]
pub fn compare_size_labels(a: &str, b: &str) -> Ordering {
    match (parse_size_magnitude(a), parse_size_magnitude(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
#[path = "size_test.rs"]
mod tests;
