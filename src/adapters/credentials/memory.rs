//! In-Memory Credential Store
//!
//! Holds the token for the lifetime of the process.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::AccessToken;
use crate::ports::{CredentialStore, CredentialStoreError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryCredentialStore {
    token: Arc<RwLock<Option<AccessToken>>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `token`.
    pub fn with_token(token: AccessToken) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token))),
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn load(&self) -> Result<Option<AccessToken>, CredentialStoreError> {
        Ok(self.token.read().await.clone())
    }

    async fn store(&self, token: &AccessToken) -> Result<(), CredentialStoreError> {
        *self.token.write().await = Some(token.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), CredentialStoreError> {
        *self.token.write().await = None;
        Ok(())
    }
}
