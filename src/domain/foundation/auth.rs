//! Credential types for the domain layer.
//!
//! An [`AccessToken`] is passed explicitly into every authenticated call.
//! Nothing reads it from ambient process state.

use secrecy::{ExposeSecret, Secret};
use std::fmt;

/// Bearer credential issued by the profile service.
#[derive(Clone)]
pub struct AccessToken(Secret<String>);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Secret::new(token.into()))
    }

    /// Exposes the raw token (for building request headers).
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn is_empty(&self) -> bool {
        self.expose().is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

impl PartialEq for AccessToken {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for AccessToken {}
