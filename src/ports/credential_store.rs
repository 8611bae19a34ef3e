//! Credential Store Port - durable home of the access token.
//!
//! Callers load the token once and pass it explicitly to the operations that
//! need it. An empty store is a normal state (logged out), not an error.

use async_trait::async_trait;

use crate::domain::foundation::{AccessToken, ErrorCode};

/// Errors that can occur while reading or writing the token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialStoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Stored token is corrupt: {0}")]
    Corrupt(String),
}

impl CredentialStoreError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::StorageError
    }
}

/// Port for persisting the bearer token between sessions.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the stored token, or `None` when logged out.
    async fn load(&self) -> Result<Option<AccessToken>, CredentialStoreError>;

    /// Replaces the stored token.
    async fn store(&self, token: &AccessToken) -> Result<(), CredentialStoreError>;

    /// Removes the stored token. Clearing an empty store succeeds.
    async fn clear(&self) -> Result<(), CredentialStoreError>;
}
