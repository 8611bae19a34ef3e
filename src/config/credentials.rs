//! Credential storage configuration

use serde::Deserialize;
use std::path::PathBuf;

/// Where the access token is kept between sessions
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialsConfig {
    /// Token file path. Without one the token lives only in memory.
    pub token_path: Option<PathBuf>,
}

impl CredentialsConfig {
    /// Check if a durable token file is configured
    pub fn is_persistent(&self) -> bool {
        self.token_path
            .as_ref()
            .is_some_and(|p| !p.as_os_str().is_empty())
    }
}
