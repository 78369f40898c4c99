//! Currency text parsing.
//!
//! Turns unstructured, locale-ambiguous currency text (`"Rp 1.121.234,00"`,
//! `"(1,234.56)"`, `"CHF 1'234.50"`) into a finite `f64`. Anything that cannot
//! be interpreted collapses to `0`; the parser never fails.

use tracing::debug;

use super::classifier::classify_separators;

/// Space variants used as grouping marks that `trim` alone would keep inside
/// the amount.
const NON_BREAKING_SPACES: [char; 2] = ['\u{00A0}', '\u{202F}'];

/// Parses currency text into a finite number.
///
/// - `None`, empty, whitespace-only and digit-free input yield `0`.
/// - Outer brackets (`(1.234,56)`) and a `-` before the first digit both mark
///   the amount negative; they never cancel each other out.
/// - Currency symbols, codes and other letters are discarded.
/// - The decimal separator is resolved by [`classify_separators`].
///
/// # Example
///
/// ```
/// use nominal_core::parse_currency_string;
///
/// assert_eq!(parse_currency_string("Rp 1.121.234,50"), 1_121_234.5);
/// assert_eq!(parse_currency_string("(1,234.56)"), -1234.56);
/// assert_eq!(parse_currency_string(None), 0.0);
/// ```
#[must_use]
pub fn parse_currency_string<'a>(input: impl Into<Option<&'a str>>) -> f64 {
    let Some(raw) = input.into() else {
        return 0.0;
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        debug!("Blank currency text parsed as zero");
        return 0.0;
    }

    let text: String = trimmed
        .chars()
        .filter(|c| !NON_BREAKING_SPACES.contains(c))
        .collect();

    let (body, bracketed) = strip_accounting_brackets(text.trim());
    let negative = bracketed || has_leading_minus(body);

    let body = strip_noise(body);
    let numeric = retain_numeric(body);
    let digits = strip_groupings(trim_stray_separators(&numeric));
    let canonical = classify_separators(&digits).canonical;

    let magnitude = match canonical.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        Ok(_) | Err(_) => {
            debug!(input = raw, "Currency text has no finite amount, using zero");
            return 0.0;
        }
    };

    if negative && magnitude != 0.0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Removes `( … )` wrapping the whole text and reports whether it was present.
fn strip_accounting_brackets(text: &str) -> (&str, bool) {
    match text.strip_prefix('(').and_then(|rest| rest.strip_suffix(')')) {
        Some(inner) => (inner, true),
        None => (text, false),
    }
}

/// True if a minus sign appears before the first digit.
fn has_leading_minus(text: &str) -> bool {
    text.chars()
        .take_while(|c| !c.is_ascii_digit())
        .any(|c| matches!(c, '-' | '\u{2212}'))
}

/// Drops leading `-`/whitespace and trailing punctuation/whitespace.
fn strip_noise(text: &str) -> &str {
    text.trim_start_matches(|c: char| c == '-' || c.is_whitespace())
        .trim_end_matches(|c: char| c.is_whitespace() || c.is_ascii_punctuation())
}

/// Keeps digits, `.`, `,`, `'` and plain spaces.
fn retain_numeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '\'' | ' '))
        .collect()
}

/// Drops leading separators that no digit follows, such as the dot left
/// over from `"Rs. 1.234"`. `".5"` keeps its dot.
fn trim_stray_separators(text: &str) -> &str {
    let mut rest = text;
    while let Some(first) = rest.chars().next() {
        let next_is_digit = rest[1..].starts_with(|c: char| c.is_ascii_digit());
        if first.is_ascii_digit() || (matches!(first, '.' | ',') && next_is_digit) {
            break;
        }
        rest = &rest[1..];
    }
    rest
}

/// Removes apostrophe and space groupings (`1'234`, `1 234`).
fn strip_groupings(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '\'' | ' ')).collect()
}
