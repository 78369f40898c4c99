//! Rounding at a fixed fractional precision.
//!
//! Magnitudes are rounded through `rust_decimal` using their shortest
//! round-trip decimal text, so `1.005` rounds to `1.01` rather than the
//! `1.00` that binary scaling produces. Magnitudes `Decimal` cannot hold
//! exactly (beyond its range, or with more than 28 fractional digits) fall
//! back to `f64` scaling.

use nominal_shared::RoundingMode;
use rust_decimal::{Decimal, RoundingStrategy};

/// Integer and fraction digits of a rounded, non-negative amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundedDigits {
    /// Integer digits, at least `"0"`.
    pub integer: String,
    /// Fraction digits, exactly the requested precision long.
    pub fraction: String,
}

impl RoundedDigits {
    /// Splits plain decimal text, truncating or zero-padding the fraction to
    /// `places` digits.
    fn from_text(text: &str, places: usize) -> Self {
        let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
        let mut fraction: String = fraction.chars().take(places).collect();
        while fraction.len() < places {
            fraction.push('0');
        }
        Self {
            integer: integer.to_string(),
            fraction,
        }
    }

    /// Returns true if every digit is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.integer
            .chars()
            .chain(self.fraction.chars())
            .all(|c| c == '0')
    }
}

/// Maps a rounding mode onto a `rust_decimal` strategy for a non-negative
/// magnitude.
#[must_use]
pub const fn strategy(mode: RoundingMode) -> RoundingStrategy {
    match mode {
        RoundingMode::Round => RoundingStrategy::MidpointAwayFromZero,
        RoundingMode::Ceil => RoundingStrategy::AwayFromZero,
        RoundingMode::Floor => RoundingStrategy::ToZero,
    }
}

/// Rounds a non-negative magnitude to `places` fractional digits.
///
/// Negative or non-finite input is treated as its absolute value or zero
/// respectively.
///
/// # Example
///
/// ```
/// use nominal_core::text::round_magnitude;
/// use nominal_shared::RoundingMode;
///
/// let digits = round_magnitude(1234.5, 2, RoundingMode::Round);
/// assert_eq!(digits.integer, "1234");
/// assert_eq!(digits.fraction, "50");
/// ```
#[must_use]
pub fn round_magnitude(magnitude: f64, places: u32, mode: RoundingMode) -> RoundedDigits {
    let magnitude = if magnitude.is_finite() {
        magnitude.abs()
    } else {
        0.0
    };
    let precision = places as usize;

    // `f64` Display is the shortest round-trip text and never uses an exponent.
    // `from_str_exact` rejects text that would lose digits, so tiny amounts
    // keep their ceiling instead of collapsing to zero first.
    let text = match Decimal::from_str_exact(&magnitude.to_string()) {
        Ok(exact) => exact
            .round_dp_with_strategy(places, strategy(mode))
            .to_string(),
        Err(_) => round_scaled(magnitude, places, mode).to_string(),
    };

    RoundedDigits::from_text(&text, precision)
}

fn round_scaled(magnitude: f64, places: u32, mode: RoundingMode) -> f64 {
    if magnitude.fract() == 0.0 {
        return magnitude;
    }

    let factor = 10f64.powi(i32::try_from(places).unwrap_or(i32::MAX));
    let scaled = magnitude * factor;
    if !scaled.is_finite() {
        return magnitude;
    }

    let rounded = match mode {
        RoundingMode::Round => scaled.round(),
        RoundingMode::Ceil => scaled.ceil(),
        RoundingMode::Floor => scaled.floor(),
    };
    rounded / factor
}
