//! Cross-field checks run at step boundaries.

use crate::domain::foundation::ValidationError;
use crate::domain::profile::PersonalInfo;

/// Password confirmation gate.
///
/// Runs when leaving the personal-info step and again right before
/// submission, since the user may go back and change the password after
/// passing the first check.
pub struct ValidationGate;

impl ValidationGate {
    pub fn validate(password: &str, confirm_password: &str) -> Result<(), ValidationError> {
        if password == confirm_password {
            Ok(())
        } else {
            Err(ValidationError::PasswordMismatch)
        }
    }

    pub fn check(info: &PersonalInfo) -> Result<(), ValidationError> {
        Self::validate(info.password(), info.confirm_password())
    }
}
