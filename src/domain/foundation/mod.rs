//! Foundation module - Shared domain primitives.
//!
//! Identifiers, credentials, error vocabulary and the state machine trait used across the
//! profile draft and the wizard.

mod auth;
mod errors;
mod ids;
mod state_machine;

pub use auth::AccessToken;
pub use errors::{ErrorCode, ValidationError};
pub use ids::{ItemId, ProfileId};
pub use state_machine::{InvalidTransition, StateMachine};
