//! Format options for the currency formatter.
//!
//! Options are resolved in two stages:
//! 1. Locale defaults are chosen from `indian_format` (separators flip).
//! 2. Explicitly set fields override those defaults.
//!
//! Rendering code only ever sees the resulting [`ResolvedFormat`].

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Default number of fractional digits.
pub const DEFAULT_TOTAL_DECIMAL: u32 = 2;

/// Largest `total_decimal` accepted from configuration or the command line.
pub const MAX_TOTAL_DECIMAL: u32 = 100;

/// Rounding mode applied at the configured fractional precision.
///
/// Modes operate on the magnitude; the sign is re-applied afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Nearest, halves away from zero.
    #[default]
    Round,
    /// Toward the larger magnitude.
    Ceil,
    /// Toward the smaller magnitude.
    Floor,
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Round => write!(f, "round"),
            Self::Ceil => write!(f, "ceil"),
            Self::Floor => write!(f, "floor"),
        }
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "round" => Ok(Self::Round),
            "ceil" => Ok(Self::Ceil),
            "floor" => Ok(Self::Floor),
            _ => Err(OptionsError::UnknownRoundingMode(s.to_string())),
        }
    }
}

/// How negative amounts are presented.
///
/// Deserializes from either a bare string (`"brackets"`) or a record
/// (`{ "style": "brackets" }`); both collapse to this enum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "NegativeFormat")]
pub enum NegativeStyle {
    /// Leading minus sign: `-1.234,56`.
    #[default]
    Dash,
    /// Accounting brackets: `(1.234,56)`.
    Brackets,
}

impl std::fmt::Display for NegativeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dash => write!(f, "dash"),
            Self::Brackets => write!(f, "brackets"),
        }
    }
}

impl std::str::FromStr for NegativeStyle {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dash" => Ok(Self::Dash),
            "brackets" => Ok(Self::Brackets),
            _ => Err(OptionsError::UnknownNegativeStyle(s.to_string())),
        }
    }
}

/// Wire shape of the negative format: a string or a `{ style }` record.
#[derive(Deserialize)]
#[serde(untagged)]
enum NegativeFormat {
    Style(StyleName),
    Record { style: StyleName },
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum StyleName {
    Dash,
    Brackets,
}

impl From<NegativeFormat> for NegativeStyle {
    fn from(format: NegativeFormat) -> Self {
        let (NegativeFormat::Style(name) | NegativeFormat::Record { style: name }) = format;
        match name {
            StyleName::Dash => Self::Dash,
            StyleName::Brackets => Self::Brackets,
        }
    }
}

/// Integer-part grouping scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Grouping {
    /// Every 3 digits: `1.234.567`.
    #[default]
    Standard,
    /// First 3 digits from the right, then every 2: `12,34,567`.
    Indian,
}

/// Per-call formatter configuration.
///
/// Every field is optional; unset fields fall back to the defaults applied by
/// [`FormatOptions::resolve`]. Field names deserialize from camelCase or
/// snake_case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatOptions {
    /// Render a fractional part at all (default `false`).
    pub decimal: Option<bool>,
    /// Number of fractional digits (default 2). `0` suppresses the fraction.
    #[serde(alias = "total_decimal")]
    pub total_decimal: Option<u32>,
    /// Rounding mode at `total_decimal` precision (default `round`).
    #[serde(alias = "rounded_decimal")]
    pub rounded_decimal: Option<RoundingMode>,
    /// Grouping separator (default `"."`, `","` for Indian format).
    pub separator: Option<String>,
    /// Decimal separator (default `","`, `"."` for Indian format).
    #[serde(alias = "separator_decimals")]
    pub separator_decimals: Option<String>,
    /// Use 3-2 digit grouping (default `false`).
    #[serde(alias = "indian_format")]
    pub indian_format: Option<bool>,
    /// Negative presentation (default dash).
    #[serde(alias = "negative_format")]
    pub negative_format: Option<NegativeStyle>,
    /// Literal text prepended to the number, inside the sign wrapper.
    #[serde(alias = "suffix_currency")]
    pub suffix_currency: Option<String>,
}

impl FormatOptions {
    /// Creates an empty option set (all defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether a fractional part is rendered.
    #[must_use]
    pub fn with_decimal(mut self, decimal: bool) -> Self {
        self.decimal = Some(decimal);
        self
    }

    /// Sets the number of fractional digits.
    #[must_use]
    pub fn with_total_decimal(mut self, total_decimal: u32) -> Self {
        self.total_decimal = Some(total_decimal);
        self
    }

    /// Sets the rounding mode.
    #[must_use]
    pub fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounded_decimal = Some(mode);
        self
    }

    /// Sets the grouping separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Sets the decimal separator.
    #[must_use]
    pub fn with_separator_decimals(mut self, separator: impl Into<String>) -> Self {
        self.separator_decimals = Some(separator.into());
        self
    }

    /// Enables or disables Indian 3-2 grouping.
    #[must_use]
    pub fn with_indian_format(mut self, indian: bool) -> Self {
        self.indian_format = Some(indian);
        self
    }

    /// Sets the negative presentation.
    #[must_use]
    pub fn with_negative_format(mut self, style: NegativeStyle) -> Self {
        self.negative_format = Some(style);
        self
    }

    /// Sets the literal prefix (for example `"Rp "`).
    #[must_use]
    pub fn with_suffix_currency(mut self, prefix: impl Into<String>) -> Self {
        self.suffix_currency = Some(prefix.into());
        self
    }

    /// Overlays every field set in `other` onto `self`.
    #[must_use]
    pub fn merged_with(mut self, other: &Self) -> Self {
        macro_rules! overlay {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field.clone_from(&other.$field);
                })*
            };
        }
        overlay!(
            decimal,
            total_decimal,
            rounded_decimal,
            separator,
            separator_decimals,
            indian_format,
            negative_format,
            suffix_currency
        );
        self
    }

    /// Resolves locale defaults, then applies explicit overrides.
    #[must_use]
    pub fn resolve(&self) -> ResolvedFormat {
        let grouping = if self.indian_format.unwrap_or(false) {
            Grouping::Indian
        } else {
            Grouping::Standard
        };
        let (default_separator, default_decimals) = grouping.default_separators();

        ResolvedFormat {
            decimal: self.decimal.unwrap_or(false),
            total_decimal: self.total_decimal.unwrap_or(DEFAULT_TOTAL_DECIMAL),
            rounding: self.rounded_decimal.unwrap_or_default(),
            separator: self
                .separator
                .clone()
                .unwrap_or_else(|| default_separator.to_string()),
            separator_decimals: self
                .separator_decimals
                .clone()
                .unwrap_or_else(|| default_decimals.to_string()),
            grouping,
            negative: self.negative_format.unwrap_or_default(),
            prefix: self.suffix_currency.clone().unwrap_or_default(),
        }
    }

    /// Validates the resolved options.
    ///
    /// Formatting itself never rejects options; this check is for option
    /// sets that come from text (configuration, command line).
    pub fn validate(&self) -> Result<(), OptionsError> {
        self.resolve().validate()
    }
}

impl Grouping {
    /// Locale default `(grouping, decimal)` separators for this scheme.
    #[must_use]
    pub const fn default_separators(self) -> (&'static str, &'static str) {
        match self {
            Self::Standard => (".", ","),
            Self::Indian => (",", "."),
        }
    }

    /// Size of the group at `index` counted from the right (0-based).
    #[must_use]
    pub const fn group_len(self, index: usize) -> usize {
        match (self, index) {
            (Self::Indian, 1..) => 2,
            _ => 3,
        }
    }
}

/// Fully resolved formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFormat {
    /// Whether a fractional part was requested.
    pub decimal: bool,
    /// Fractional precision used for rounding and rendering.
    pub total_decimal: u32,
    /// Rounding mode.
    pub rounding: RoundingMode,
    /// Grouping separator.
    pub separator: String,
    /// Decimal separator.
    pub separator_decimals: String,
    /// Grouping scheme.
    pub grouping: Grouping,
    /// Negative presentation.
    pub negative: NegativeStyle,
    /// Literal prefix.
    pub prefix: String,
}

impl Default for ResolvedFormat {
    fn default() -> Self {
        FormatOptions::default().resolve()
    }
}

impl ResolvedFormat {
    /// Returns true if output carries a fractional part.
    ///
    /// `total_decimal == 0` wins over `decimal`.
    #[must_use]
    pub const fn renders_fraction(&self) -> bool {
        self.decimal && self.total_decimal > 0
    }

    /// Checks that the precision is bounded and the separators produce
    /// unambiguous output.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.total_decimal > MAX_TOTAL_DECIMAL {
            return Err(OptionsError::TotalDecimalTooLarge(self.total_decimal));
        }
        for separator in [&self.separator, &self.separator_decimals] {
            if separator.chars().any(|c| c.is_ascii_digit()) {
                return Err(OptionsError::DigitInSeparator(separator.clone()));
            }
        }
        if self.renders_fraction()
            && !self.separator.is_empty()
            && self.separator == self.separator_decimals
        {
            return Err(OptionsError::SeparatorCollision(self.separator.clone()));
        }
        Ok(())
    }
}
