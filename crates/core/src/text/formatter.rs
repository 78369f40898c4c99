//! Currency formatting.
//!
//! Pipeline: input -> number (text goes through the parser) -> sign split ->
//! rounding at `total_decimal` -> integer grouping -> fraction -> prefix ->
//! negative presentation.

use nominal_shared::{CurrencyInput, FormatOptions, Grouping, NegativeStyle, ResolvedFormat};
use tracing::debug;

use super::parser::parse_currency_string;
use super::rounding::round_magnitude;

/// Formats a number or currency text into a display string.
///
/// Text input is parsed first, so differently formatted amounts are accepted.
/// Uninterpretable input renders as zero. Never panics.
///
/// # Example
///
/// ```
/// use nominal_core::format_currency;
/// use nominal_shared::{FormatOptions, RoundingMode};
///
/// let options = FormatOptions::new().with_decimal(true);
/// assert_eq!(format_currency(1_234_567.89, &options), "1.234.567,89");
///
/// let options = FormatOptions::new()
///     .with_decimal(true)
///     .with_total_decimal(0)
///     .with_suffix_currency("Rp ")
///     .with_rounding(RoundingMode::Ceil);
/// assert_eq!(format_currency("1.121.234,00", &options), "Rp 1.121.234");
/// ```
#[must_use]
pub fn format_currency<'a>(value: impl Into<CurrencyInput<'a>>, options: &FormatOptions) -> String {
    CurrencyFormatter::new(options).format(value)
}

/// A formatter holding resolved options, for formatting many values alike.
#[derive(Debug, Clone, Default)]
pub struct CurrencyFormatter {
    format: ResolvedFormat,
}

impl CurrencyFormatter {
    /// Creates a formatter by resolving `options`.
    #[must_use]
    pub fn new(options: &FormatOptions) -> Self {
        Self::from_resolved(options.resolve())
    }

    /// Creates a formatter from already-resolved options.
    #[must_use]
    pub const fn from_resolved(format: ResolvedFormat) -> Self {
        Self { format }
    }

    /// Returns the resolved options in use.
    #[must_use]
    pub const fn resolved(&self) -> &ResolvedFormat {
        &self.format
    }

    /// Formats one value.
    #[must_use]
    pub fn format<'a>(&self, value: impl Into<CurrencyInput<'a>>) -> String {
        let amount = match value.into() {
            CurrencyInput::Number(number) if number.is_finite() => number,
            CurrencyInput::Number(number) => {
                debug!(value = number, "Non-finite amount formatted as zero");
                0.0
            }
            CurrencyInput::Text(text) => parse_currency_string(&*text),
        };

        let format = &self.format;
        let digits = round_magnitude(amount.abs(), format.total_decimal, format.rounding);
        let negative = amount < 0.0 && !digits.is_zero();

        let mut body = format.prefix.clone();
        body.push_str(&group_digits(&digits.integer, &format.separator, format.grouping));
        if format.renders_fraction() {
            body.push_str(&format.separator_decimals);
            body.push_str(&digits.fraction);
        }

        match (negative, format.negative) {
            (false, _) => body,
            (true, NegativeStyle::Dash) => format!("-{body}"),
            (true, NegativeStyle::Brackets) => format!("({body})"),
        }
    }
}

/// Inserts `separator` between digit groups counted from the right.
fn group_digits(digits: &str, separator: &str, grouping: Grouping) -> String {
    let mut groups = Vec::new();
    let mut end = digits.len();
    let mut index = 0;

    while end > 0 {
        let start = end.saturating_sub(grouping.group_len(index));
        groups.push(&digits[start..end]);
        end = start;
        index += 1;
    }

    groups.reverse();
    groups.join(separator)
}
