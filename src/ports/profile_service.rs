//! Profile Service port - the remote service that stores profiles.
//!
//! Two write shapes are supported:
//!
//! - **Atomic signup**: [`ProfileService::create_profile`] takes the whole
//!   draft in one request and either creates everything or nothing.
//! - **Fan-out**: [`ProfileService::create_root_profile`] creates the bare
//!   profile, then [`ProfileService::create_sub_item`] is called once per
//!   sub-collection element. There is no transaction spanning these calls.
//!
//! # Example
//!
//! ```ignore
//! let service: Arc<dyn ProfileService> = Arc::new(HttpProfileService::new(config)?);
//! let profile_id = service.create_profile(&payload).await?;
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{AccessToken, ErrorCode, ItemId, ProfileId};
use crate::domain::profile::{ProfileRecord, RootProfilePayload, SignupPayload, SubItem};

/// Generic message when the service gives no usable detail.
pub const GENERIC_SERVICE_MESSAGE: &str = "An error occurred. Please try again.";

/// Port for creating and reading profiles.
///
/// # Contract
///
/// Implementations must:
/// - Map transport failures to `ServiceError::Network` or `ServiceError::Timeout`
/// - Map non-2xx responses to `ServiceError::Service`, carrying the
///   service-provided message when there is one
/// - Never retry on their own; recovery is user-initiated
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Creates a profile with all of its sub-collections in one call.
    async fn create_profile(&self, payload: &SignupPayload) -> Result<ProfileId, ServiceError>;

    /// Creates the profile from personal info alone.
    async fn create_root_profile(
        &self,
        payload: &RootProfilePayload,
    ) -> Result<ProfileId, ServiceError>;

    /// Creates one sub-item under an existing profile.
    async fn create_sub_item(
        &self,
        profile_id: ProfileId,
        item: &SubItem,
    ) -> Result<ItemId, ServiceError>;

    /// Reads the profile owned by the bearer of `token`.
    async fn fetch_profile(&self, token: &AccessToken) -> Result<ProfileRecord, ServiceError>;
}

/// Errors from the profile service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Transport failure (connection refused, DNS, reset).
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Credentials were rejected.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Non-2xx response.
    #[error("service error {status}: {message}")]
    Service {
        /// HTTP status code.
        status: u16,
        /// Service-provided message, or a generic fallback.
        message: String,
    },

    /// Response body could not be understood.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ServiceError {
    pub fn network(message: impl Into<String>) -> Self {
        ServiceError::Network(message.into())
    }

    pub fn service(status: u16, message: impl Into<String>) -> Self {
        ServiceError::Service {
            status,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        ServiceError::Parse(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::Network(_) => ErrorCode::NetworkError,
            ServiceError::Timeout { .. } => ErrorCode::Timeout,
            ServiceError::Unauthorized(_) => ErrorCode::Unauthorized,
            ServiceError::Service { .. } => ErrorCode::ServiceError,
            ServiceError::Parse(_) => ErrorCode::ParseError,
        }
    }

    /// Message suitable for showing to the user.
    ///
    /// Service-provided messages are passed through verbatim; everything
    /// else falls back to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Service { message, .. } | ServiceError::Unauthorized(message)
                if !message.is_empty() =>
            {
                message.clone()
            }
            _ => GENERIC_SERVICE_MESSAGE.to_string(),
        }
    }
}
