//! Mock Profile Service for testing.
//!
//! An in-process stand-in for the profile service, implementing both
//! `ProfileService` and `AuthProvider`.
//!
//! # Features
//!
//! - Error injection per operation, including "fail the nth sub-item"
//! - Simulated latency for concurrency tests
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let service = MockProfileService::new()
//!     .with_sub_item_failure(1, ServiceError::service(422, "bad date"));
//!
//! let result = orchestrator.submit(&draft).await;
//! assert_eq!(service.sub_item_call_count(), 3);
//! ```

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::foundation::{AccessToken, ItemId, ProfileId};
use crate::domain::profile::{
    ProfileRecord, RootProfilePayload, SignupPayload, SubCollection, SubItem,
};
use crate::ports::{AuthProvider, ProfileService, ServiceError};

/// A call observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    CreateProfile { email: String, sub_items: usize },
    CreateRootProfile { email: String },
    CreateSubItem {
        profile_id: ProfileId,
        collection: SubCollection,
        position: usize,
    },
    FetchProfile,
    Authenticate { email: String },
}

#[derive(Debug)]
struct MockState {
    calls: Vec<MockCall>,
    /// Full bodies received by `create_profile`, in call order.
    signups: Vec<SignupPayload>,
    create_profile_error: Option<ServiceError>,
    root_error: Option<ServiceError>,
    auth_error: Option<ServiceError>,
    /// Keyed by 0-based sub-item call index.
    sub_item_failures: HashMap<usize, ServiceError>,
    sub_item_calls: usize,
    next_item_id: i64,
    record: Option<ProfileRecord>,
}

/// Mock profile service.
#[derive(Debug, Clone)]
pub struct MockProfileService {
    state: Arc<Mutex<MockState>>,
    profile_id: ProfileId,
    token: String,
    delay: Duration,
}

impl Default for MockProfileService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProfileService {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                calls: Vec::new(),
                signups: Vec::new(),
                create_profile_error: None,
                root_error: None,
                auth_error: None,
                sub_item_failures: HashMap::new(),
                sub_item_calls: 0,
                next_item_id: 1,
                record: None,
            })),
            profile_id: ProfileId::new(),
            token: "mock-access-token".to_string(),
            delay: Duration::ZERO,
        }
    }

    /// Id returned for every created profile.
    pub fn with_profile_id(mut self, profile_id: ProfileId) -> Self {
        self.profile_id = profile_id;
        self
    }

    /// Token issued by `authenticate` and accepted by `fetch_profile`.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Makes atomic signup fail.
    pub fn with_create_profile_error(self, error: ServiceError) -> Self {
        self.state.lock().unwrap().create_profile_error = Some(error);
        self
    }

    /// Makes fan-out root creation fail.
    pub fn with_root_error(self, error: ServiceError) -> Self {
        self.state.lock().unwrap().root_error = Some(error);
        self
    }

    /// Makes the `index`-th sub-item call (0-based, in call order) fail.
    pub fn with_sub_item_failure(self, index: usize, error: ServiceError) -> Self {
        self.state
            .lock()
            .unwrap()
            .sub_item_failures
            .insert(index, error);
        self
    }

    /// Makes `authenticate` fail.
    pub fn with_auth_error(self, error: ServiceError) -> Self {
        self.state.lock().unwrap().auth_error = Some(error);
        self
    }

    /// Profile returned on the read path.
    pub fn with_record(self, record: ProfileRecord) -> Self {
        self.state.lock().unwrap().record = Some(record);
        self
    }

    pub fn profile_id(&self) -> ProfileId {
        self.profile_id
    }

    pub fn token(&self) -> AccessToken {
        AccessToken::new(self.token.clone())
    }

    /// Returns all recorded calls.
    pub fn calls(&self) -> Vec<MockCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Returns every atomic signup body received.
    pub fn signup_payloads(&self) -> Vec<SignupPayload> {
        self.state.lock().unwrap().signups.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    pub fn create_profile_call_count(&self) -> usize {
        self.count(|c| matches!(c, MockCall::CreateProfile { .. }))
    }

    pub fn sub_item_call_count(&self) -> usize {
        self.count(|c| matches!(c, MockCall::CreateSubItem { .. }))
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        let mut state = self.state.lock().unwrap();
        state.calls.clear();
        state.signups.clear();
    }

    fn count(&self, predicate: impl Fn(&MockCall) -> bool) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| predicate(c))
            .count()
    }

    fn record_call(&self, call: MockCall) {
        self.state.lock().unwrap().calls.push(call);
    }

    async fn simulate_latency(&self) {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
    }
}

#[async_trait]
impl ProfileService for MockProfileService {
    async fn create_profile(&self, payload: &SignupPayload) -> Result<ProfileId, ServiceError> {
        {
            let mut state = self.state.lock().unwrap();
            state.calls.push(MockCall::CreateProfile {
                email: payload.profile.email.clone(),
                sub_items: payload.sub_item_count(),
            });
            state.signups.push(payload.clone());
        }
        self.simulate_latency().await;

        let injected = self.state.lock().unwrap().create_profile_error.clone();
        match injected {
            Some(error) => Err(error),
            None => Ok(self.profile_id),
        }
    }

    async fn create_root_profile(
        &self,
        payload: &RootProfilePayload,
    ) -> Result<ProfileId, ServiceError> {
        self.record_call(MockCall::CreateRootProfile {
            email: payload.email.clone(),
        });
        self.simulate_latency().await;

        let injected = self.state.lock().unwrap().root_error.clone();
        match injected {
            Some(error) => Err(error),
            None => Ok(self.profile_id),
        }
    }

    async fn create_sub_item(
        &self,
        profile_id: ProfileId,
        item: &SubItem,
    ) -> Result<ItemId, ServiceError> {
        // Claim the call index before yielding so it follows issue order.
        let outcome = {
            let mut state = self.state.lock().unwrap();
            let index = state.sub_item_calls;
            state.sub_item_calls += 1;
            state.calls.push(MockCall::CreateSubItem {
                profile_id,
                collection: item.collection(),
                position: item.position,
            });
            match state.sub_item_failures.get(&index).cloned() {
                Some(error) => Err(error),
                None => {
                    let id = ItemId::new(state.next_item_id);
                    state.next_item_id += 1;
                    Ok(id)
                }
            }
        };
        self.simulate_latency().await;
        outcome
    }

    async fn fetch_profile(&self, token: &AccessToken) -> Result<ProfileRecord, ServiceError> {
        self.record_call(MockCall::FetchProfile);
        self.simulate_latency().await;

        if token.expose() != self.token {
            return Err(ServiceError::Unauthorized(
                "Could not validate credentials".to_string(),
            ));
        }
        self.state
            .lock()
            .unwrap()
            .record
            .clone()
            .ok_or_else(|| ServiceError::service(404, "User not found"))
    }
}

#[async_trait]
impl AuthProvider for MockProfileService {
    async fn authenticate(
        &self,
        email: &str,
        password: &Secret<String>,
    ) -> Result<AccessToken, ServiceError> {
        self.record_call(MockCall::Authenticate {
            email: email.to_string(),
        });
        self.simulate_latency().await;

        let injected = self.state.lock().unwrap().auth_error.clone();
        if let Some(error) = injected {
            return Err(error);
        }
        if email.is_empty() || password.expose_secret().is_empty() {
            return Err(ServiceError::Unauthorized(
                "Incorrect username or password".to_string(),
            ));
        }
        Ok(self.token())
    }
}
