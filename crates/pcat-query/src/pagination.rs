//! Fixed-size page arithmetic over an already filtered and sorted sequence.
//!
//! Pages are 1-based. An empty result still has one (empty) page so the
//! presenter always has a page to render.

use std::ops::Range;

/// Number of pages needed for `total_count` items: `max(1, ceil(total / size))`.
///
/// A `page_size` of 0 is treated as 1.
#[must_use]
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    total_count.div_ceil(page_size.max(1)).max(1)
}

/// Pulls `page` into `1..=total_pages`.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Index range of `page` within a sequence of `total_count` items.
///
/// `page` must already be clamped; the range is truncated at `total_count`.
#[must_use]
pub fn page_bounds(page: usize, page_size: usize, total_count: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);
    start..end
}
