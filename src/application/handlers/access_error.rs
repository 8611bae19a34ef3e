//! Errors shared by the handlers that need a bearer token.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::ports::{CredentialStoreError, ServiceError};

/// Shown when an authenticated call is attempted while logged out.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to continue.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No token is available. The user has to log in; nothing is retried.
    #[error("No access token available")]
    AuthenticationMissing,

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    CredentialStore(#[from] CredentialStoreError),
}

impl AccessError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AccessError::AuthenticationMissing => ErrorCode::AuthenticationMissing,
            AccessError::Service(e) => e.code(),
            AccessError::CredentialStore(e) => e.code(),
        }
    }

    /// True when the fix is to log in (again).
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            AccessError::AuthenticationMissing | AccessError::Service(ServiceError::Unauthorized(_))
        )
    }

    pub fn user_message(&self) -> String {
        match self {
            AccessError::AuthenticationMissing => LOGIN_REQUIRED_MESSAGE.to_string(),
            AccessError::Service(e) => e.user_message(),
            AccessError::CredentialStore(_) => crate::ports::GENERIC_SERVICE_MESSAGE.to_string(),
        }
    }
}
