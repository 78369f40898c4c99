//! Property-based tests for currency text parsing and formatting.
//!
//! - Parsing never yields a non-finite value
//! - Formatting and re-parsing recovers the amount within rounding tolerance
//! - Formatting is idempotent through the parser
//! - Ceil/floor bracket the exact magnitude

use nominal_shared::{FormatOptions, NegativeStyle, RoundingMode};
use proptest::prelude::*;

use super::classifier::{SeparatorRule, classify_separators};
use super::formatter::format_currency;
use super::parser::parse_currency_string;

/// Strategy for amounts with at most two fractional digits (-1e12 to 1e12).
fn cent_amount() -> impl Strategy<Value = f64> {
    (-100_000_000_000_000i64..100_000_000_000_000i64).prop_map(|cents| cents as f64 / 100.0)
}

/// Strategy for arbitrary finite amounts (-1e12 to 1e12).
fn any_amount() -> impl Strategy<Value = f64> {
    -1e12f64..1e12f64
}

/// Strategy for currency-like text: digits, separators, signs, symbols.
fn currency_text() -> impl Strategy<Value = String> {
    "[0-9.,' ()$€Rp\u{00A0}\u{202F}-]{0,40}"
}

fn tolerance(places: u32, value: f64) -> f64 {
    0.5 * 10f64.powi(-(places as i32)) + value.abs() * f64::EPSILON * 8.0
}

fn negative_style() -> impl Strategy<Value = NegativeStyle> {
    prop_oneof![Just(NegativeStyle::Dash), Just(NegativeStyle::Brackets)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// *For any* text, parsing SHALL return a finite number.
    #[test]
    fn prop_parse_is_always_finite(text in any::<String>()) {
        prop_assert!(parse_currency_string(text.as_str()).is_finite());
    }

    /// *For any* currency-like text, parsing SHALL return a finite number.
    #[test]
    fn prop_parse_currency_text_is_finite(text in currency_text()) {
        prop_assert!(parse_currency_string(text.as_str()).is_finite());
    }

    /// *For any* text, the classifier SHALL emit digits and at most one dot.
    #[test]
    fn prop_classifier_output_is_canonical(text in currency_text()) {
        let canonical = classify_separators(&text).canonical;
        prop_assert!(canonical.chars().all(|c| c.is_ascii_digit() || c == '.'));
        prop_assert!(canonical.matches('.').count() <= 1);
    }

    /// *For any* amount, formatting with a fraction and re-parsing SHALL
    /// recover it within half a unit of the last rendered digit.
    #[test]
    fn prop_round_trip_default_format(value in any_amount()) {
        let formatted = format_currency(value, &FormatOptions::new().with_decimal(true));
        let parsed = parse_currency_string(formatted.as_str());
        prop_assert!(
            (parsed - value).abs() <= tolerance(2, value),
            "{} -> {} -> {}", value, formatted, parsed
        );
    }

    /// *For any* amount, the Indian layout SHALL round-trip as well.
    #[test]
    fn prop_round_trip_indian_format(value in any_amount(), style in negative_style()) {
        let options = FormatOptions::new()
            .with_decimal(true)
            .with_indian_format(true)
            .with_negative_format(style);
        let formatted = format_currency(value, &options);
        let parsed = parse_currency_string(formatted.as_str());
        prop_assert!(
            (parsed - value).abs() <= tolerance(2, value),
            "{} -> {} -> {}", value, formatted, parsed
        );
    }

    /// *For any* amount already at cent precision, the round trip SHALL be
    /// exact.
    #[test]
    fn prop_round_trip_cent_amounts(value in cent_amount()) {
        let formatted = format_currency(value, &FormatOptions::new().with_decimal(true));
        prop_assert_eq!(parse_currency_string(formatted.as_str()), value);
    }

    /// *For any* amount, formatting SHALL be idempotent through the parser.
    #[test]
    fn prop_format_idempotent_through_parser(value in any_amount(), indian in any::<bool>()) {
        let options = FormatOptions::new().with_decimal(true).with_indian_format(indian);
        let once = format_currency(value, &options);
        let twice = format_currency(once.as_str(), &options);
        prop_assert_eq!(once, twice);
    }

    /// *For any* amount, ceil SHALL NOT render a smaller magnitude than floor.
    #[test]
    fn prop_ceil_not_below_floor(value in any_amount()) {
        let options = FormatOptions::new().with_decimal(true);
        let ceil = format_currency(value, &options.clone().with_rounding(RoundingMode::Ceil));
        let floor = format_currency(value, &options.with_rounding(RoundingMode::Floor));
        let ceil = parse_currency_string(ceil.as_str()).abs();
        let floor = parse_currency_string(floor.as_str()).abs();
        prop_assert!(ceil >= floor);
        prop_assert!(ceil - floor <= 0.01 + tolerance(2, value));
    }

    /// *For any* non-negative amount, output SHALL carry no sign marker.
    #[test]
    fn prop_non_negative_has_no_sign(value in 0.0f64..1e12, style in negative_style()) {
        let options = FormatOptions::new().with_decimal(true).with_negative_format(style);
        let formatted = format_currency(value, &options);
        prop_assert!(!formatted.contains('-'));
        prop_assert!(!formatted.contains('('));
    }

    /// *For any* zero total decimal, output SHALL carry no decimal separator.
    #[test]
    fn prop_zero_total_decimal_has_no_fraction(value in any_amount()) {
        let options = FormatOptions::new()
            .with_decimal(true)
            .with_total_decimal(0)
            .with_separator("'");
        let formatted = format_currency(value, &options);
        prop_assert!(!formatted.contains(','));
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Indian output re-parses through comma-group detection, not the
    /// repeated-comma rule.
    #[test]
    fn test_indian_output_reparses() {
        let options = FormatOptions::new().with_decimal(true).with_indian_format(true);
        let formatted = format_currency(12_345_678.9, &options);
        assert_eq!(formatted, "1,23,45,678.90");
        assert_eq!(
            classify_separators(&formatted).rule,
            SeparatorRule::IndianGrouping
        );
        assert!((parse_currency_string(formatted.as_str()) - 12_345_678.9).abs() < 1e-6);
    }

    /// Integer-only Indian output of three groups re-parses as repeated commas.
    #[test]
    fn test_indian_integer_output_reparses() {
        let formatted = format_currency(1_234_567, &FormatOptions::new().with_indian_format(true));
        assert_eq!(formatted, "12,34,567");
        assert_eq!(parse_currency_string(formatted.as_str()), 1_234_567.0);
    }

    /// A formatted amount below one thousand without a fraction contains a
    /// lone grouping-free integer, which re-parses unchanged.
    #[test]
    fn test_small_integer_output_reparses() {
        let formatted = format_currency(999, &FormatOptions::default());
        assert_eq!(formatted, "999");
        assert_eq!(parse_currency_string(formatted.as_str()), 999.0);
    }
}
