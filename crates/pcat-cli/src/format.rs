//! Terminal formatting helpers shared by the command handlers.

use rust_decimal::Decimal;

/// Formats a price for display: whole amounts without cents (`$14`),
/// fractional amounts with two decimals (`$21.50`).
pub(crate) fn fmt_price(price: Decimal) -> String {
    if price.fract().is_zero() {
        format!("${}", price.trunc())
    } else {
        format!("${:.2}", price)
    }
}

/// Shortens `text` to `max` characters, marking the cut with `...`.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_price_has_no_cents() {
        assert_eq!(fmt_price(Decimal::from(14)), "$14");
        assert_eq!(fmt_price(Decimal::new(1400, 2)), "$14");
    }

    #[test]
    fn fractional_price_has_two_decimals() {
        assert_eq!(fmt_price(Decimal::new(215, 1)), "$21.50");
        assert_eq!(fmt_price(Decimal::new(999, 2)), "$9.99");
    }

    #[test]
    fn truncate_long_text() {
        assert_eq!(truncate("Night-blooming jasmine", 5), "Night...");
    }

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("Fig", 5), "Fig");
    }
}
