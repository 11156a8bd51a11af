//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the `SBCM`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use standard_block_auditor::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let scale = config.scale.to_parameters().expect("Invalid scale");
//! ```

mod error;
mod scale;

pub use error::{ConfigError, ValidationError};
pub use scale::ScaleConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section is defaulted, so loading succeeds in an empty environment
/// and yields the national reference scale.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Reference scale (population, municipalities, block baselines)
    #[serde(default)]
    pub scale: ScaleConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `SBCM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `SBCM__SCALE__NATIONAL_POPULATION=124000000` -> `scale.national_population`
    /// - `SBCM__SCALE__MUNICIPALITY_COUNT=1718` -> `scale.municipality_count`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("SBCM").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.scale.validate()?;
        Ok(())
    }
}
