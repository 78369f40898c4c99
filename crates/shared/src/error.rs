//! Application-wide error types.
//!
//! Parsing and formatting never fail: uninterpretable input collapses to zero.
//! The errors here cover option values that arrive as text (configuration
//! files, environment variables, command-line flags). Malformed command lines
//! are reported by the argument parser itself.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while reading or validating format options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// Rounding mode is not one of `round`, `ceil`, `floor`.
    #[error("Unknown rounding mode: {0}")]
    UnknownRoundingMode(String),

    /// Negative format is not one of `dash`, `brackets`.
    #[error("Unknown negative format: {0}")]
    UnknownNegativeStyle(String),

    /// Grouping and decimal separators are identical while a fraction is rendered.
    #[error("Grouping and decimal separators must differ, both are {0:?}")]
    SeparatorCollision(String),

    /// A separator contains digits, which would corrupt the rendered amount.
    #[error("Separator {0:?} must not contain digits")]
    DigitInSeparator(String),

    /// Fractional precision exceeds the supported maximum.
    #[error("Total decimal {0} exceeds the maximum of {max}", max = crate::types::MAX_TOTAL_DECIMAL)]
    TotalDecimalTooLarge(u32),
}

impl OptionsError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRoundingMode(_) => "UNKNOWN_ROUNDING_MODE",
            Self::UnknownNegativeStyle(_) => "UNKNOWN_NEGATIVE_STYLE",
            Self::SeparatorCollision(_) => "SEPARATOR_COLLISION",
            Self::DigitInSeparator(_) => "DIGIT_IN_SEPARATOR",
            Self::TotalDecimalTooLarge(_) => "TOTAL_DECIMAL_TOO_LARGE",
        }
    }
}

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid format options.
    #[error("Invalid format options: {0}")]
    Options(#[from] OptionsError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Returns the error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Options(err) => err.error_code(),
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Options(_) => 2,
            // EX_CONFIG from sysexits.h
            Self::Config(_) => 78,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_error_codes() {
        assert_eq!(
            OptionsError::UnknownRoundingMode(String::new()).error_code(),
            "UNKNOWN_ROUNDING_MODE"
        );
        assert_eq!(
            OptionsError::UnknownNegativeStyle(String::new()).error_code(),
            "UNKNOWN_NEGATIVE_STYLE"
        );
        assert_eq!(
            OptionsError::SeparatorCollision(String::new()).error_code(),
            "SEPARATOR_COLLISION"
        );
        assert_eq!(
            OptionsError::DigitInSeparator(String::new()).error_code(),
            "DIGIT_IN_SEPARATOR"
        );
        assert_eq!(
            OptionsError::TotalDecimalTooLarge(101).error_code(),
            "TOTAL_DECIMAL_TOO_LARGE"
        );
    }

    #[test]
    fn test_app_error_codes() {
        let err = AppError::from(OptionsError::SeparatorCollision(".".into()));
        assert_eq!(err.error_code(), "SEPARATOR_COLLISION");
        assert_eq!(err.exit_code(), 2);

        let err = AppError::from(config::ConfigError::Message("bad".into()));
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            OptionsError::UnknownRoundingMode("up".into()).to_string(),
            "Unknown rounding mode: up"
        );
        assert_eq!(
            OptionsError::SeparatorCollision(",".into()).to_string(),
            "Grouping and decimal separators must differ, both are \",\""
        );
        assert_eq!(
            AppError::from(OptionsError::DigitInSeparator("1".into())).to_string(),
            "Invalid format options: Separator \"1\" must not contain digits"
        );
        assert_eq!(
            OptionsError::TotalDecimalTooLarge(4_294_967_295).to_string(),
            "Total decimal 4294967295 exceeds the maximum of 100"
        );
    }
}
