//! Profile service connection configuration

use reqwest::Url;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where the profile service lives and how long to wait for it
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileServiceConfig {
    /// Base URL including the API prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl ProfileServiceConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = Url::parse(&self.base_url).map_err(|_| ValidationError::InvalidServiceUrl)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidServiceUrl);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ProfileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_timeout() -> u64 {
    30
}
