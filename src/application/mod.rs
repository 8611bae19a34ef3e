//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The wizard controller sits on top and owns one editing session.

pub mod handlers;
mod wizard_controller;

pub use handlers::{
    // Submission
    CreatedSubItem, SubItemFailure, SubmissionError, SubmissionOrchestrator, SubmissionReceipt,
    // Authenticated access
    AccessError, FetchProfileHandler, LoginCommand, LoginError, LoginHandler,
    LOGIN_REQUIRED_MESSAGE,
};
pub use wizard_controller::{SubmissionTicket, WizardController, WizardError};
