//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors raised while checking draft values before they leave the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the offending field, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::InvalidFormat { field, .. } => Some(field),
            ValidationError::PasswordMismatch => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            ValidationError::PasswordMismatch => ErrorCode::PasswordMismatch,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    InvalidFormat,
    PasswordMismatch,

    // Wizard state errors
    InvalidStateTransition,
    NotOnFinalStep,
    WizardClosed,
    CategoryExists,

    // Authorization errors
    AuthenticationMissing,
    Unauthorized,

    // Remote service errors
    NetworkError,
    Timeout,
    ServiceError,
    ParseError,
    PartialCommit,

    // Infrastructure errors
    StorageError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::PasswordMismatch => "PASSWORD_MISMATCH",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::NotOnFinalStep => "NOT_ON_FINAL_STEP",
            ErrorCode::WizardClosed => "WIZARD_CLOSED",
            ErrorCode::CategoryExists => "CATEGORY_EXISTS",
            ErrorCode::AuthenticationMissing => "AUTHENTICATION_MISSING",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::NetworkError => "NETWORK_ERROR",
            ErrorCode::Timeout => "TIMEOUT",
            ErrorCode::ServiceError => "SERVICE_ERROR",
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::PartialCommit => "PARTIAL_COMMIT",
            ErrorCode::StorageError => "STORAGE_ERROR",
        };
        write!(f, "{}", s)
    }
}
