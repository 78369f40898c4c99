//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

use nominal_shared::{FormatOptions, NegativeStyle, RoundingMode};

#[derive(Debug, Parser)]
#[command(name = "nominal", version)]
#[command(about = "Parse and format currency text", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the number parsed from currency text
    Parse {
        /// Currency text, e.g. "Rp 1.121.234,00" or "(1,234.56)"
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Print an amount formatted with configured defaults plus the given flags
    Format {
        /// Number or currency text
        #[arg(allow_hyphen_values = true)]
        value: String,

        #[command(flatten)]
        flags: FormatFlags,
    },
}

/// Format options given on the command line. Unset flags keep the
/// configured value.
#[derive(Debug, Args)]
pub struct FormatFlags {
    /// Render the fractional part
    #[arg(long)]
    decimal: bool,

    /// Fractional digits (default 2)
    #[arg(long, value_name = "N")]
    total_decimal: Option<u32>,

    /// Rounding mode: round, ceil or floor
    #[arg(long = "round", value_name = "MODE")]
    rounding: Option<RoundingMode>,

    /// Negative presentation: dash or brackets
    #[arg(long, value_name = "STYLE", conflicts_with = "brackets")]
    negative: Option<NegativeStyle>,

    /// Same as --negative brackets
    #[arg(long)]
    brackets: bool,

    /// Grouping separator
    #[arg(long, value_name = "S")]
    separator: Option<String>,

    /// Decimal separator
    #[arg(long, value_name = "S")]
    separator_decimals: Option<String>,

    /// 3-2 digit grouping
    #[arg(long)]
    indian: bool,

    /// Literal text before the number
    #[arg(long, value_name = "S")]
    prefix: Option<String>,
}

impl FormatFlags {
    /// Converts the flags into an overlay for the configured options.
    pub fn into_options(self) -> FormatOptions {
        let negative = if self.brackets {
            Some(NegativeStyle::Brackets)
        } else {
            self.negative
        };

        FormatOptions {
            decimal: self.decimal.then_some(true),
            total_decimal: self.total_decimal,
            rounded_decimal: self.rounding,
            separator: self.separator,
            separator_decimals: self.separator_decimals,
            indian_format: self.indian.then_some(true),
            negative_format: negative,
            suffix_currency: self.prefix,
        }
    }
}
