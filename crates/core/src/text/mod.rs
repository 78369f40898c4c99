//! Currency text parsing and formatting.
//!
//! Data flows one way in each direction:
//! - parsing: raw text -> classified digit string -> `f64`
//! - formatting: text or number -> `f64` -> rounded -> grouped -> display string
//!
//! The formatter depends on the parser for text input; never the reverse.

pub mod classifier;
pub mod formatter;
pub mod parser;
pub mod rounding;

#[cfg(test)]
mod props;

pub use classifier::{Classification, SeparatorRule, classify_separators};
pub use formatter::{CurrencyFormatter, format_currency};
pub use parser::parse_currency_string;
pub use rounding::{RoundedDigits, round_magnitude};
