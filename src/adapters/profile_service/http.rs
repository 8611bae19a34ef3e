//! HTTP Profile Service - `ProfileService` and `AuthProvider` over the
//! profile service's REST API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpProfileServiceConfig::new("http://localhost:8000/api")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let service = HttpProfileService::new(config)?;
//! ```
//!
//! # Endpoints
//!
//! | Operation | Request |
//! |-----------|---------|
//! | atomic signup | `POST auth/signup` (JSON) |
//! | credential exchange | `POST auth/token` (form) |
//! | profile read | `GET users/profile` (Bearer) |
//! | fan-out root | `POST users` (JSON) |
//! | fan-out item | `POST users/{id}/{collection}` (JSON) |

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use super::dto::{CreatedItem, CreatedProfile, ErrorBody, TokenResponse};
use crate::config::ProfileServiceConfig;
use crate::domain::foundation::{AccessToken, ItemId, ProfileId};
use crate::domain::profile::{ProfileRecord, RootProfilePayload, SignupPayload, SubItem};
use crate::ports::{AuthProvider, ProfileService, ServiceError};

/// Configuration for the HTTP profile service client.
#[derive(Debug, Clone)]
pub struct HttpProfileServiceConfig {
    /// Base URL including the API prefix (e.g. `http://localhost:8000/api`).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl HttpProfileServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&ProfileServiceConfig> for HttpProfileServiceConfig {
    fn from(config: &ProfileServiceConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }
}

/// Profile service client.
pub struct HttpProfileService {
    config: HttpProfileServiceConfig,
    client: Client,
}

impl HttpProfileService {
    /// Creates a client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Network` if the HTTP client cannot be built
    /// (e.g. the TLS backend fails to initialise).
    pub fn new(config: HttpProfileServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ServiceError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Sends the request and turns non-2xx responses into errors.
    async fn send(&self, request: RequestBuilder) -> Result<Response, ServiceError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ServiceError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                ServiceError::network(format!("Connection failed: {}", e))
            } else {
                ServiceError::network(e.to_string())
            }
        })?;

        Self::handle_response_status(response).await
    }

    async fn handle_response_status(response: Response) -> Result<Response, ServiceError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message());
        warn!(status = status.as_u16(), detail = ?detail, "Profile service returned an error");

        if status == StatusCode::UNAUTHORIZED {
            return Err(ServiceError::Unauthorized(
                detail.unwrap_or_else(|| "Could not validate credentials".to_string()),
            ));
        }

        let message = detail
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_default();
        Err(ServiceError::service(status.as_u16(), message))
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
        response
            .json()
            .await
            .map_err(|e| ServiceError::parse(format!("Failed to parse response: {}", e)))
    }
}

#[async_trait]
impl ProfileService for HttpProfileService {
    async fn create_profile(&self, payload: &SignupPayload) -> Result<ProfileId, ServiceError> {
        let url = self.url("auth/signup");
        debug!(%url, sub_items = payload.sub_item_count(), "Submitting signup");

        let response = self.send(self.client.post(&url).json(payload)).await?;
        let created: CreatedProfile = Self::parse_json(response).await?;
        Ok(created.id)
    }

    async fn create_root_profile(
        &self,
        payload: &RootProfilePayload,
    ) -> Result<ProfileId, ServiceError> {
        let url = self.url("users");
        debug!(%url, "Creating root profile");

        let response = self.send(self.client.post(&url).json(payload)).await?;
        let created: CreatedProfile = Self::parse_json(response).await?;
        Ok(created.id)
    }

    async fn create_sub_item(
        &self,
        profile_id: ProfileId,
        item: &SubItem,
    ) -> Result<ItemId, ServiceError> {
        let url = self.url(&format!(
            "users/{}/{}",
            profile_id,
            item.collection().path_segment()
        ));
        debug!(%url, position = item.position, "Creating sub-item");

        // The body serializes untagged, so it is exactly the item's own shape.
        let response = self.send(self.client.post(&url).json(&item.body)).await?;
        let created: CreatedItem = Self::parse_json(response).await?;
        Ok(created.id)
    }

    async fn fetch_profile(&self, token: &AccessToken) -> Result<ProfileRecord, ServiceError> {
        let url = self.url("users/profile");
        debug!(%url, "Fetching profile");

        let response = self
            .send(self.client.get(&url).bearer_auth(token.expose()))
            .await?;
        Self::parse_json(response).await
    }
}

#[async_trait]
impl AuthProvider for HttpProfileService {
    async fn authenticate(
        &self,
        email: &str,
        password: &Secret<String>,
    ) -> Result<AccessToken, ServiceError> {
        let url = self.url("auth/token");
        debug!(%url, "Exchanging credentials for a token");

        let form = [
            ("grant_type", "password"),
            ("username", email),
            ("password", password.expose_secret().as_str()),
        ];
        let response = self.send(self.client.post(&url).form(&form)).await?;
        let token: TokenResponse = Self::parse_json(response).await?;
        if token.access_token.is_empty() {
            return Err(ServiceError::parse("Token response has an empty access_token"));
        }
        Ok(AccessToken::new(token.access_token))
    }
}
