//! Raw currency input accepted by the formatter.

use std::borrow::Cow;

/// A value to format: either a number or unstructured currency text.
///
/// Text is parsed before formatting, so already-formatted amounts such as
/// `"Rp 1.121.234,00"` are accepted as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum CurrencyInput<'a> {
    /// A numeric amount.
    Number(f64),
    /// Currency text in any supported shape.
    Text(Cow<'a, str>),
}

impl CurrencyInput<'_> {
    /// Returns true if this input is text that still needs parsing.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<f64> for CurrencyInput<'_> {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for CurrencyInput<'_> {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for CurrencyInput<'_> {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i64> for CurrencyInput<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl<'a> From<&'a str> for CurrencyInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for CurrencyInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for CurrencyInput<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_convert() {
        assert_eq!(CurrencyInput::from(12.5_f64), CurrencyInput::Number(12.5));
        assert_eq!(CurrencyInput::from(7_i32), CurrencyInput::Number(7.0));
        assert_eq!(CurrencyInput::from(7_u32), CurrencyInput::Number(7.0));
        assert_eq!(CurrencyInput::from(-3_i64), CurrencyInput::Number(-3.0));
    }

    #[test]
    fn test_text_converts() {
        let owned = String::from("Rp 1.000");
        assert!(CurrencyInput::from(&owned).is_text());
        assert!(CurrencyInput::from("1,5").is_text());
        assert_eq!(
            CurrencyInput::from(owned.clone()),
            CurrencyInput::Text(Cow::Owned(owned))
        );
        assert!(!CurrencyInput::from(1.0_f64).is_text());
    }
}
