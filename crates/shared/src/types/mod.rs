//! Common types used across the application.

pub mod input;
pub mod options;


pub use input::CurrencyInput;
pub use options::{
    FormatOptions, Grouping, MAX_TOTAL_DECIMAL, NegativeStyle, ResolvedFormat, RoundingMode,
};
