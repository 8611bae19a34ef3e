//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROFILE_WIZARD` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use profile_wizard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Profile service at {}", config.service.base_url);
//! ```

mod credentials;
mod error;
mod logging;
mod service;
mod submission;

pub use credentials::CredentialsConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use service::ProfileServiceConfig;
pub use submission::{SubmissionConfig, SubmissionStrategy};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration pointed at a local profile service.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Profile service connection
    #[serde(default)]
    pub service: ProfileServiceConfig,

    /// Submission strategy
    #[serde(default)]
    pub submission: SubmissionConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Access token storage
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROFILE_WIZARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROFILE_WIZARD__SERVICE__BASE_URL=...` -> `service.base_url = ...`
    /// - `PROFILE_WIZARD__SUBMISSION__STRATEGY=fan_out` -> `submission.strategy = FanOut`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROFILE_WIZARD")
                    .separator("__"),
            )
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
        self.service.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
