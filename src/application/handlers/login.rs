//! Login - exchanges credentials for a token and keeps it.

use secrecy::Secret;
use std::sync::Arc;
use tracing::{info, warn};

use super::AccessError;
use crate::domain::foundation::{AccessToken, ValidationError};
use crate::ports::{AuthProvider, CredentialStore};

/// Command to log in.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: Secret<String>,
}

impl LoginCommand {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Secret::new(password.into()),
        }
    }
}

/// Errors from logging in.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Access(#[from] AccessError),
}

/// Handler for logging in.
pub struct LoginHandler {
    auth: Arc<dyn AuthProvider>,
    store: Arc<dyn CredentialStore>,
}

impl LoginHandler {
    pub fn new(auth: Arc<dyn AuthProvider>, store: Arc<dyn CredentialStore>) -> Self {
        Self { auth, store }
    }

    /// Authenticates and stores the resulting token, replacing any previous one.
    pub async fn handle(&self, cmd: LoginCommand) -> Result<AccessToken, LoginError> {
        use secrecy::ExposeSecret;

        let email = cmd.email.trim();
        if email.is_empty() {
            return Err(ValidationError::empty_field("email").into());
        }
        if cmd.password.expose_secret().is_empty() {
            return Err(ValidationError::empty_field("password").into());
        }

        let token = self
            .auth
            .authenticate(email, &cmd.password)
            .await
            .map_err(|e| {
                warn!(error = %e, "Login rejected");
                AccessError::from(e)
            })?;
        self.store.store(&token).await.map_err(AccessError::from)?;

        info!("Logged in");
        Ok(token)
    }

    /// Forgets the stored token.
    pub async fn logout(&self) -> Result<(), AccessError> {
        self.store.clear().await?;
        Ok(())
    }
}
