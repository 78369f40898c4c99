//! nominal command-line tool
//!
//! Parses and formats currency text from the shell.
//!
//! Usage:
//!   nominal parse "Rp 1.121.234,00"      - Print the parsed number
//!   nominal format 1234567.89 --decimal  - Print the formatted amount
//!
//! Format defaults come from `config/default.*`, `config/{RUN_MODE}.*` and
//! `NOMINAL__FORMAT__*` environment variables; flags override them.

mod args;

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nominal_core::{CurrencyFormatter, parse_currency_string};
use nominal_shared::{AppConfig, AppError};

use args::{Cli, Command};

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing on stderr so stdout carries only results
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nominal=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Usage errors exit with status 2 from here
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            error!(error = %err, "Command failed");
            eprintln!("Error: {err}");
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    debug!(command = ?cli.command, "Parsed command line");

    match cli.command {
        Command::Parse { text } => Ok(parse_currency_string(text.as_str()).to_string()),
        Command::Format { value, flags } => {
            let config = AppConfig::load()?;
            let options = config.format.merged_with(&flags.into_options());
            options.validate().map_err(AppError::from)?;

            let formatter = CurrencyFormatter::new(&options);
            Ok(formatter.format(value.as_str()))
        }
    }
}
