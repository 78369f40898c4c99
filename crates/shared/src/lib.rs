//! Shared types, errors, and configuration for nominal.
//!
//! This crate provides common types used across all other crates:
//! - Format options with two-stage default resolution
//! - Raw currency input (text or number)
//! - Option and application error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult, OptionsError};
pub use types::{
    CurrencyInput, FormatOptions, Grouping, MAX_TOTAL_DECIMAL, NegativeStyle, ResolvedFormat,
    RoundingMode,
};
