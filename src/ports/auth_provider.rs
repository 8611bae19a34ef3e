//! Auth provider port for exchanging credentials for an access token.
//!
//! The wizard core does not issue or decode tokens. It only asks the auth
//! provider for one and hands it to the calls that need it.
//!
//! # Example
//!
//! ```ignore
//! async fn sign_in(
//!     auth: Arc<dyn AuthProvider>,
//!     email: &str,
//!     password: &Secret<String>,
//! ) -> Result<AccessToken, ServiceError> {
//!     auth.authenticate(email, password).await
//! }
//! ```

use async_trait::async_trait;
use secrecy::Secret;

use super::ServiceError;
use crate::domain::foundation::AccessToken;

/// Exchanges an email/password pair for a bearer token.
///
/// # Contract
///
/// Implementations must:
/// - Return `ServiceError::Unauthorized` when the credentials are rejected
/// - Return `ServiceError::Network`/`Timeout` for transport failures
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(
        &self,
        email: &str,
        password: &Secret<String>,
    ) -> Result<AccessToken, ServiceError>;
}
