//! WizardController - drives one profile wizard session.
//!
//! The controller owns the draft for the whole session, moves between the
//! five steps, runs the password gate, and makes sure only one submission is
//! in flight at a time.
//!
//! Submission is split into [`WizardController::begin_submission`] and
//! [`WizardController::finish_submission`] so an event loop can release the
//! controller while the request is pending. [`WizardController::submit`] runs
//! both halves back to back. A pending submission is never cancelled.

use thiserror::Error;
use tracing::{debug, info, warn};

use super::handlers::{SubmissionError, SubmissionOrchestrator, SubmissionReceipt};
use crate::domain::foundation::{
    ErrorCode, InvalidTransition, ProfileId, StateMachine, ValidationError,
};
use crate::domain::profile::ProfileDraft;
use crate::domain::wizard::{ValidationGate, WizardStep};

/// Errors from driving the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Blocked by a local check. Also kept in `validation_error()`.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Submit is only available on the last step (currently on {current})")]
    NotOnFinalStep { current: WizardStep },

    #[error("The wizard session has already completed")]
    SessionClosed,

    #[error(transparent)]
    Transition(#[from] InvalidTransition),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

impl WizardError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WizardError::Validation(e) => e.code(),
            WizardError::NotOnFinalStep { .. } => ErrorCode::NotOnFinalStep,
            WizardError::SessionClosed => ErrorCode::WizardClosed,
            WizardError::Transition(e) => e.code(),
            WizardError::Submission(e) => e.code(),
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            WizardError::Submission(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

/// Proof that a submission was started. Holds the snapshot being sent.
#[derive(Debug)]
pub struct SubmissionTicket {
    draft: ProfileDraft,
}

impl SubmissionTicket {
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }
}

/// One wizard session.
#[derive(Debug, Default)]
pub struct WizardController {
    step: WizardStep,
    draft: ProfileDraft,
    submitting: bool,
    validation_error: Option<ValidationError>,
    submission_error: Option<SubmissionError>,
    completed: Option<ProfileId>,
}

impl WizardController {
    /// Starts at the first step with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    /// Mutable access for the step editors.
    ///
    /// Edits stay allowed while a submission is pending; they apply to the
    /// live draft, not to the snapshot already sent.
    pub fn draft_mut(&mut self) -> Result<&mut ProfileDraft, WizardError> {
        if self.completed.is_some() {
            return Err(WizardError::SessionClosed);
        }
        Ok(&mut self.draft)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// The message to show next to the form, if a gate blocked the user.
    pub fn validation_error(&self) -> Option<&ValidationError> {
        self.validation_error.as_ref()
    }

    /// The most recent failed submission, kept until the next attempt.
    pub fn submission_error(&self) -> Option<&SubmissionError> {
        self.submission_error.as_ref()
    }

    /// Id of the created profile once the session has completed.
    pub fn completed_profile(&self) -> Option<ProfileId> {
        self.completed
    }

    pub fn is_completed(&self) -> bool {
        self.completed.is_some()
    }

    /// Advances one step.
    ///
    /// Leaving personal info requires matching passwords; on a mismatch the
    /// step does not change and the error is kept for display. On the last
    /// step this is a no-op.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        self.ensure_open()?;

        if self.step == WizardStep::PersonalInfo {
            if let Err(e) = ValidationGate::check(&self.draft.personal_info) {
                warn!(step = %self.step, error = %e, "Step gate blocked navigation");
                self.validation_error = Some(e.clone());
                return Err(e.into());
            }
        }
        self.validation_error = None;

        if let Some(target) = self.step.next() {
            self.step = self.step.transition_to(target)?;
            debug!(step = %self.step, "Advanced");
        }
        Ok(self.step)
    }

    /// Goes back one step, stopping at the first.
    pub fn previous(&mut self) -> Result<WizardStep, WizardError> {
        self.ensure_open()?;

        if let Some(target) = self.step.previous() {
            self.step = self.step.transition_to(target)?;
            debug!(step = %self.step, "Went back");
        }
        Ok(self.step)
    }

    /// Starts a submission.
    ///
    /// Returns `Ok(None)` when one is already in flight. The password gate
    /// runs again here since it may have changed after the first step.
    pub fn begin_submission(&mut self) -> Result<Option<SubmissionTicket>, WizardError> {
        self.ensure_open()?;
        if !self.step.is_last() {
            return Err(WizardError::NotOnFinalStep { current: self.step });
        }
        if self.submitting {
            debug!("Submission already in flight, ignoring");
            return Ok(None);
        }
        if let Err(e) = ValidationGate::check(&self.draft.personal_info) {
            warn!(error = %e, "Submission blocked by password gate");
            self.validation_error = Some(e.clone());
            return Err(e.into());
        }

        self.validation_error = None;
        self.submission_error = None;
        self.submitting = true;
        Ok(Some(SubmissionTicket {
            draft: self.draft.clone(),
        }))
    }

    /// Records the outcome of a submission started with `begin_submission`.
    ///
    /// Success closes the session and discards the draft. Failure keeps the
    /// draft as it is so the user can retry.
    pub fn finish_submission(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<SubmissionReceipt, SubmissionError>,
    ) -> Result<SubmissionReceipt, WizardError> {
        drop(ticket);
        self.submitting = false;

        match result {
            Ok(receipt) => {
                info!(profile_id = %receipt.profile_id, "Wizard completed");
                self.completed = Some(receipt.profile_id);
                self.draft = ProfileDraft::new();
                Ok(receipt)
            }
            Err(e) => {
                if let SubmissionError::Validation(v) = &e {
                    self.validation_error = Some(v.clone());
                }
                self.submission_error = Some(e.clone());
                Err(e.into())
            }
        }
    }

    /// Submits the draft through `orchestrator`.
    ///
    /// Returns `Ok(None)` if a submission was already in flight.
    pub async fn submit(
        &mut self,
        orchestrator: &SubmissionOrchestrator,
    ) -> Result<Option<SubmissionReceipt>, WizardError> {
        let Some(ticket) = self.begin_submission()? else {
            return Ok(None);
        };
        let result = orchestrator.submit(ticket.draft()).await;
        self.finish_submission(ticket, result).map(Some)
    }

    fn ensure_open(&self) -> Result<(), WizardError> {
        if self.completed.is_some() {
            return Err(WizardError::SessionClosed);
        }
        Ok(())
    }
}
