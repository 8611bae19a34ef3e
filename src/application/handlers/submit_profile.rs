//! SubmitProfile - turns a finished draft into a stored profile.
//!
//! Two strategies, chosen by configuration:
//!
//! - **Atomic** (default): one signup request carrying the whole draft. A
//!   failure leaves nothing behind on the service.
//! - **Best-effort fan-out**: the root profile is created first, then every
//!   sub-item is sent concurrently and all requests are awaited, even after
//!   one fails. Any sub-item failure is reported as
//!   [`SubmissionError::PartialCommit`] because the root and the items that
//!   did succeed stay committed.

use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::SubmissionStrategy;
use crate::domain::foundation::{ErrorCode, ItemId, ProfileId, ValidationError};
use crate::domain::profile::{ProfileDraft, SignupPayload, SubCollection};
use crate::domain::wizard::ValidationGate;
use crate::ports::{ProfileService, ServiceError};

/// A sub-item the service accepted during fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSubItem {
    pub collection: SubCollection,
    /// Index within its collection in the draft.
    pub position: usize,
    pub item_id: ItemId,
}

/// A sub-item the service rejected during fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubItemFailure {
    pub collection: SubCollection,
    pub position: usize,
    pub error: ServiceError,
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub profile_id: ProfileId,
    pub strategy: SubmissionStrategy,
    /// Sub-items sent, across all four collections.
    pub sub_items: usize,
    /// Per-item ids. Only fan-out learns these; atomic signup leaves it empty.
    pub created: Vec<CreatedSubItem>,
}

/// Errors from submitting a draft.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Rejected locally; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The service call failed and nothing was committed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The root profile exists but some sub-items are missing.
    #[error(
        "profile {profile_id} was created but {} of {} sub-items failed",
        failures.len(),
        created.len() + failures.len()
    )]
    PartialCommit {
        profile_id: ProfileId,
        created: Vec<CreatedSubItem>,
        failures: Vec<SubItemFailure>,
    },
}

impl SubmissionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SubmissionError::Validation(e) => e.code(),
            SubmissionError::Service(e) => e.code(),
            SubmissionError::PartialCommit { .. } => ErrorCode::PartialCommit,
        }
    }

    /// True when something may have been committed server-side.
    pub fn is_partial_commit(&self) -> bool {
        matches!(self, SubmissionError::PartialCommit { .. })
    }

    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Validation(e) => e.to_string(),
            SubmissionError::Service(e) => e.user_message(),
            SubmissionError::PartialCommit { failures, .. } => {
                let missing: Vec<String> = failures
                    .iter()
                    .map(|f| format!("{} #{}", f.collection, f.position + 1))
                    .collect();
                format!(
                    "Your profile was created, but some items could not be saved ({}). \
                     They need to be added again from your profile.",
                    missing.join(", ")
                )
            }
        }
    }
}

/// Sends finished drafts to the profile service.
pub struct SubmissionOrchestrator {
    service: Arc<dyn ProfileService>,
    strategy: SubmissionStrategy,
}

impl SubmissionOrchestrator {
    pub fn new(service: Arc<dyn ProfileService>, strategy: SubmissionStrategy) -> Self {
        Self { service, strategy }
    }

    /// Single-request signup.
    pub fn atomic(service: Arc<dyn ProfileService>) -> Self {
        Self::new(service, SubmissionStrategy::Atomic)
    }

    /// Root-then-items fan-out. Can leave a partially committed profile.
    pub fn best_effort_fan_out(service: Arc<dyn ProfileService>) -> Self {
        Self::new(service, SubmissionStrategy::FanOut)
    }

    pub fn strategy(&self) -> SubmissionStrategy {
        self.strategy
    }

    /// Validates `draft` and submits it with the configured strategy.
    ///
    /// The draft is only read; the caller decides what to do with it
    /// afterwards. No request is retried.
    pub async fn submit(&self, draft: &ProfileDraft) -> Result<SubmissionReceipt, SubmissionError> {
        ValidationGate::check(&draft.personal_info)?;
        let payload = SignupPayload::from_draft(draft).map_err(|e| {
            warn!(field = ?e.field(), error = %e, "Draft rejected before submission");
            e
        })?;

        debug!(strategy = %self.strategy, sub_items = payload.sub_item_count(), "Submitting profile");
        match self.strategy {
            SubmissionStrategy::Atomic => self.submit_atomic(payload).await,
            SubmissionStrategy::FanOut => self.submit_fan_out(payload).await,
        }
    }

    async fn submit_atomic(&self, payload: SignupPayload) -> Result<SubmissionReceipt, SubmissionError> {
        let sub_items = payload.sub_item_count();
        let profile_id = self.service.create_profile(&payload).await.map_err(|e| {
            error!(error = %e, code = %e.code(), "Signup failed");
            e
        })?;

        info!(profile_id = %profile_id, sub_items, "Profile created");
        Ok(SubmissionReceipt {
            profile_id,
            strategy: SubmissionStrategy::Atomic,
            sub_items,
            created: Vec::new(),
        })
    }

    async fn submit_fan_out(&self, payload: SignupPayload) -> Result<SubmissionReceipt, SubmissionError> {
        let (root, items) = payload.into_parts();

        let profile_id = self.service.create_root_profile(&root).await.map_err(|e| {
            error!(error = %e, code = %e.code(), "Root profile creation failed");
            e
        })?;
        debug!(profile_id = %profile_id, sub_items = items.len(), "Root profile created, fanning out");

        // Every request runs to completion; there is no short-circuit.
        let results = join_all(
            items
                .iter()
                .map(|item| self.service.create_sub_item(profile_id, item)),
        )
        .await;

        let mut created = Vec::new();
        let mut failures = Vec::new();
        for (item, result) in items.iter().zip(results) {
            match result {
                Ok(item_id) => created.push(CreatedSubItem {
                    collection: item.collection(),
                    position: item.position,
                    item_id,
                }),
                Err(error) => failures.push(SubItemFailure {
                    collection: item.collection(),
                    position: item.position,
                    error,
                }),
            }
        }

        if !failures.is_empty() {
            warn!(
                profile_id = %profile_id,
                created = created.len(),
                failed = failures.len(),
                "Partial commit: profile is missing sub-items"
            );
            return Err(SubmissionError::PartialCommit {
                profile_id,
                created,
                failures,
            });
        }

        info!(profile_id = %profile_id, sub_items = created.len(), "Profile created");
        Ok(SubmissionReceipt {
            profile_id,
            strategy: SubmissionStrategy::FanOut,
            sub_items: created.len(),
            created,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockCall, MockProfileService};
    use crate::domain::profile::{ExperienceField, PersonalInfoField};

    fn valid_draft() -> ProfileDraft {
        let mut draft = ProfileDraft::new();
        let info = &mut draft.personal_info;
        info.set_field(PersonalInfoField::Name, "Ada Lovelace").unwrap();
        info.set_field(PersonalInfoField::Email, "ada@example.com").unwrap();
        info.set_field(PersonalInfoField::Password, "engine").unwrap();
        info.set_field(PersonalInfoField::ConfirmPassword, "engine").unwrap();
        draft
    }

    fn draft_with_three_sub_items() -> ProfileDraft {
        let mut draft = valid_draft();
        draft.experiences.add();
        draft
            .experiences
            .update_at(0, ExperienceField::StartDate, "2020-01-01")
            .unwrap();
        draft.skill_groups.update_skills("Languages", "Rust, Go");
        draft
    }

    #[tokio::test]
    async fn atomic_sends_one_request() {
        let service = Arc::new(MockProfileService::new());
        let orchestrator = SubmissionOrchestrator::atomic(service.clone());

        let receipt = orchestrator.submit(&draft_with_three_sub_items()).await.unwrap();

        assert_eq!(receipt.profile_id, service.profile_id());
        assert_eq!(receipt.sub_items, 3);
        assert_eq!(
            service.calls(),
            vec![MockCall::CreateProfile {
                email: "ada@example.com".to_string(),
                sub_items: 3
            }]
        );
    }

    #[tokio::test]
    async fn atomic_failure_is_a_service_error() {
        let service = Arc::new(
            MockProfileService::new()
                .with_create_profile_error(ServiceError::service(400, "Email already registered")),
        );
        let orchestrator = SubmissionOrchestrator::atomic(service);

        let err = orchestrator.submit(&valid_draft()).await.unwrap_err();

        assert!(!err.is_partial_commit());
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[tokio::test]
    async fn password_mismatch_never_reaches_the_service() {
        let service = Arc::new(MockProfileService::new());
        let orchestrator = SubmissionOrchestrator::atomic(service.clone());
        let mut draft = valid_draft();
        draft
            .personal_info
            .set_field(PersonalInfoField::ConfirmPassword, "engines")
            .unwrap();

        let err = orchestrator.submit(&draft).await.unwrap_err();

        assert_eq!(err, SubmissionError::Validation(ValidationError::PasswordMismatch));
        assert_eq!(err.code(), ErrorCode::PasswordMismatch);
        assert_eq!(service.call_count(), 0);
    }

    #[tokio::test]
    async fn fan_out_success_reports_every_item() {
        let service = Arc::new(MockProfileService::new());
        let orchestrator = SubmissionOrchestrator::best_effort_fan_out(service.clone());

        let receipt = orchestrator.submit(&draft_with_three_sub_items()).await.unwrap();

        assert_eq!(receipt.strategy, SubmissionStrategy::FanOut);
        assert_eq!(receipt.created.len(), 3);
        assert_eq!(service.sub_item_call_count(), 3);
    }

    #[tokio::test]
    async fn fan_out_root_failure_is_total() {
        let service = Arc::new(
            MockProfileService::new().with_root_error(ServiceError::network("connection refused")),
        );
        let orchestrator = SubmissionOrchestrator::best_effort_fan_out(service.clone());

        let err = orchestrator.submit(&draft_with_three_sub_items()).await.unwrap_err();

        assert!(matches!(err, SubmissionError::Service(ServiceError::Network(_))));
        assert_eq!(service.sub_item_call_count(), 0);
    }

    #[tokio::test]
    async fn fan_out_sub_item_failure_is_partial_commit() {
        let service = Arc::new(
            MockProfileService::new()
                .with_sub_item_failure(1, ServiceError::service(422, "bad skill")),
        );
        let orchestrator = SubmissionOrchestrator::best_effort_fan_out(service.clone());

        let err = orchestrator.submit(&draft_with_three_sub_items()).await.unwrap_err();

        match &err {
            SubmissionError::PartialCommit {
                profile_id,
                created,
                failures,
            } => {
                assert_eq!(*profile_id, service.profile_id());
                assert_eq!(created.len(), 2);
                assert_eq!(failures.len(), 1);
                assert_eq!(failures[0].collection, SubCollection::Skills);
                assert_eq!(failures[0].position, 0);
            }
            other => panic!("expected partial commit, got {:?}", other),
        }
        assert_eq!(err.code(), ErrorCode::PartialCommit);
        assert!(err.user_message().contains("skills #1"));
        assert_eq!(service.sub_item_call_count(), 3);
    }

    #[tokio::test]
    async fn fan_out_with_no_sub_items_only_creates_root() {
        let service = Arc::new(MockProfileService::new());
        let orchestrator = SubmissionOrchestrator::best_effort_fan_out(service.clone());

        let receipt = orchestrator.submit(&valid_draft()).await.unwrap();

        assert_eq!(receipt.sub_items, 0);
        assert_eq!(service.call_count(), 1);
    }
}
