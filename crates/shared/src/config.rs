//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;
use crate::types::FormatOptions;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Default format options applied before per-call overrides.
    #[serde(default)]
    pub format: FormatOptions,
}

impl AppConfig {
    /// Loads configuration from config files and environment.
    ///
    /// Sources, later ones winning:
    /// - `config/default.*`
    /// - `config/{RUN_MODE}.*` (`RUN_MODE` defaults to `development`)
    /// - `NOMINAL__*` environment variables, e.g. `NOMINAL__FORMAT__SEPARATOR`
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or the configured
    /// format options are invalid.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        tracing::debug!(run_mode = %run_mode, "Loading configuration");

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("NOMINAL").separator("__"))
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.format.validate()?;
        Ok(app_config)
    }
}
