//! FetchProfile - query handler for the signed-in user's profile.

use std::sync::Arc;
use tracing::debug;

use super::AccessError;
use crate::domain::foundation::AccessToken;
use crate::domain::profile::ProfileRecord;
use crate::ports::{CredentialStore, ProfileService};

/// Handler for reading the stored profile.
pub struct FetchProfileHandler {
    service: Arc<dyn ProfileService>,
}

impl FetchProfileHandler {
    pub fn new(service: Arc<dyn ProfileService>) -> Self {
        Self { service }
    }

    /// Reads the profile owned by `token`.
    pub async fn handle(&self, token: &AccessToken) -> Result<ProfileRecord, AccessError> {
        if token.is_empty() {
            return Err(AccessError::AuthenticationMissing);
        }
        let record = self.service.fetch_profile(token).await?;
        debug!(profile_id = %record.id, "Fetched profile");
        Ok(record)
    }

    /// Loads the token from `store` first. An empty store is
    /// `AuthenticationMissing`, not a failure of the store.
    pub async fn handle_from_store(
        &self,
        store: &dyn CredentialStore,
    ) -> Result<ProfileRecord, AccessError> {
        let token = store.load().await?.ok_or(AccessError::AuthenticationMissing)?;
        self.handle(&token).await
    }
}
