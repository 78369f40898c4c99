//! Decimal vs. grouping separator classification.
//!
//! Given a digit string that may contain `.`, `,`, `'` and spaces, decides
//! which punctuation (if any) is the decimal separator and which occurrences
//! are thousands groupings. Rules are tried in a fixed order and the first
//! match wins:
//!
//! 1. Indian grouping: two or more `,dd` groups (exactly two digits). All
//!    commas are groupings; the comma-free remainder goes through rules 2, 4, 5.
//! 2. Several dots and no comma: all dots are groupings (`1.121.234`).
//! 3. Several commas and no dot: all commas are groupings (`1,121,234`).
//! 4. Otherwise the later of the last dot and the last comma is the decimal
//!    separator; every separator before it is a grouping. A lone separator
//!    is always decimal, even when followed by three digits (`1,234` -> `1.234`).
//! 5. No separator: plain integer.

use tracing::trace;

/// The heuristic that decided a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeparatorRule {
    /// No digits at all.
    Empty,
    /// Indian 3-2 comma grouping.
    IndianGrouping,
    /// Several dots, no comma.
    RepeatedDots,
    /// Several commas, no dot.
    RepeatedCommas,
    /// The last separator is the decimal separator.
    LastSeparatorDecimal,
    /// Digits only.
    PlainInteger,
}

/// Canonical digit string plus the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// `integer` or `integer.fraction`, digits only apart from one `.`.
    /// Empty when the input had no digits.
    pub canonical: String,
    /// The rule that fired.
    pub rule: SeparatorRule,
}

impl Classification {
    fn new(canonical: String, rule: SeparatorRule) -> Self {
        Self { canonical, rule }
    }

    /// Returns true if a decimal separator was identified.
    #[must_use]
    pub fn has_fraction(&self) -> bool {
        self.canonical.contains('.')
    }
}

/// Classifies the separators of a cleaned digit string.
///
/// Characters other than digits, `.` and `,` are ignored, so apostrophe and
/// space groupings (`1'234`, `1 234`) need no prior stripping. Never fails.
///
/// # Example
///
/// ```
/// use nominal_core::text::{SeparatorRule, classify_separators};
///
/// let classified = classify_separators("1.234,56");
/// assert_eq!(classified.canonical, "1234.56");
/// assert_eq!(classified.rule, SeparatorRule::LastSeparatorDecimal);
/// ```
#[must_use]
pub fn classify_separators(input: &str) -> Classification {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
        .collect();

    let classification = classify_cleaned(&cleaned);
    trace!(
        input,
        rule = ?classification.rule,
        canonical = %classification.canonical,
        "Classified separators"
    );
    classification
}

fn classify_cleaned(cleaned: &str) -> Classification {
    if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
        return Classification::new(String::new(), SeparatorRule::Empty);
    }

    if indian_group_count(cleaned) >= 2 {
        let remainder = strip(cleaned, ',');
        return Classification::new(classify_dots(&remainder), SeparatorRule::IndianGrouping);
    }

    let dots = count(cleaned, '.');
    let commas = count(cleaned, ',');

    if dots > 1 && commas == 0 {
        return Classification::new(strip(cleaned, '.'), SeparatorRule::RepeatedDots);
    }

    if commas > 1 && dots == 0 {
        return Classification::new(strip(cleaned, ','), SeparatorRule::RepeatedCommas);
    }

    match cleaned.rfind(['.', ',']) {
        Some(position) => Classification::new(
            split_at_decimal(cleaned, position),
            SeparatorRule::LastSeparatorDecimal,
        ),
        None => Classification::new(cleaned.to_string(), SeparatorRule::PlainInteger),
    }
}

/// Rules 2, 4 and 5 for a string that contains no commas.
fn classify_dots(remainder: &str) -> String {
    match count(remainder, '.') {
        0 => remainder.to_string(),
        1 => remainder
            .rfind('.')
            .map_or_else(|| remainder.to_string(), |pos| split_at_decimal(remainder, pos)),
        _ => strip(remainder, '.'),
    }
}

/// Counts non-overlapping `,dd` groups where `dd` is exactly two digits.
fn indian_group_count(cleaned: &str) -> usize {
    let bytes = cleaned.as_bytes();
    let mut groups = 0;
    let mut i = 0;

    while i < bytes.len() {
        let is_group = bytes[i] == b','
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
            && bytes.get(i + 2).is_some_and(u8::is_ascii_digit)
            && !bytes.get(i + 3).is_some_and(u8::is_ascii_digit);
        if is_group {
            groups += 1;
            i += 3;
        } else {
            i += 1;
        }
    }

    groups
}

/// Joins the digits before `position` and after it with a single `.`.
fn split_at_decimal(cleaned: &str, position: usize) -> String {
    let integer: String = cleaned[..position]
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    let fraction: String = cleaned[position + 1..]
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    let integer = if integer.is_empty() { "0".to_string() } else { integer };
    if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    }
}

fn count(s: &str, separator: char) -> usize {
    s.chars().filter(|&c| c == separator).count()
}

fn strip(s: &str, separator: char) -> String {
    s.chars().filter(|&c| c != separator).collect()
}
