//! Currency text engine for nominal.
//!
//! This crate contains pure text logic with ZERO I/O dependencies.
//!
//! # Modules
//!
//! - `text` - Separator classification, currency parsing and formatting

pub mod text;

pub use text::{
    Classification, CurrencyFormatter, SeparatorRule, classify_separators, format_currency,
    parse_currency_string,
};
