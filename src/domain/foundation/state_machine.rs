//! State machine trait for lifecycle enums.
//!
//! Implementors declare which targets are reachable from each state and get a
//! checked `transition_to` for free. The wizard step sequence is the main user.

use thiserror::Error;

use super::ErrorCode;

/// Rejected state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot transition from {from} to {to}")]
pub struct InvalidTransition {
    pub from: String,
    pub to: String,
}

impl InvalidTransition {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidStateTransition
    }
}

/// Trait for enums that represent state machines.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for WizardStep {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.next() == Some(*target) || self.previous() == Some(*target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         self.previous().into_iter().chain(self.next()).collect()
///     }
/// }
///
/// let step = WizardStep::PersonalInfo.transition_to(WizardStep::Experience)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, InvalidTransition> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(InvalidTransition {
                from: format!("{:?}", self),
                to: format!("{:?}", target),
            })
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
