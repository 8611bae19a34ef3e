//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

mod access_error;
mod fetch_profile;
mod login;
mod submit_profile;

pub use access_error::{AccessError, LOGIN_REQUIRED_MESSAGE};
pub use fetch_profile::FetchProfileHandler;
pub use login::{LoginCommand, LoginError, LoginHandler};
pub use submit_profile::{
    CreatedSubItem, SubItemFailure, SubmissionError, SubmissionOrchestrator, SubmissionReceipt,
};
