//! Personal information captured on the first wizard step.

use secrecy::{ExposeSecret, Secret};

use super::field::FieldValue;
use crate::domain::foundation::ValidationError;

/// Personal details plus the credentials the account is created with.
///
/// `confirm_password` is transient: it only feeds the password gate and is
/// never sent to the profile service.
#[derive(Debug, Clone)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
    pub confirm_password: Secret<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub personal_website_url: Option<String>,
    pub professional_summary: Option<String>,
}

/// Selector for [`PersonalInfo::set_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalInfoField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    PhoneNumber,
    Location,
    LinkedinUrl,
    PersonalWebsiteUrl,
    ProfessionalSummary,
}

impl PersonalInfoField {
    pub fn name(self) -> &'static str {
        match self {
            PersonalInfoField::Name => "name",
            PersonalInfoField::Email => "email",
            PersonalInfoField::Password => "password",
            PersonalInfoField::ConfirmPassword => "confirm_password",
            PersonalInfoField::PhoneNumber => "phone_number",
            PersonalInfoField::Location => "location",
            PersonalInfoField::LinkedinUrl => "linkedin_url",
            PersonalInfoField::PersonalWebsiteUrl => "personal_website_url",
            PersonalInfoField::ProfessionalSummary => "professional_summary",
        }
    }
}

impl PersonalInfo {
    /// Replaces a single field.
    ///
    /// Password equality is deliberately not checked here; the wizard checks
    /// it when leaving the step and again before submission.
    pub fn set_field(
        &mut self,
        field: PersonalInfoField,
        value: impl Into<FieldValue>,
    ) -> Result<(), ValidationError> {
        let value = value.into();
        let key = field.name();
        match field {
            PersonalInfoField::Name => self.name = value.into_text(key)?,
            PersonalInfoField::Email => self.email = value.into_text(key)?,
            PersonalInfoField::Password => self.password = Secret::new(value.into_text(key)?),
            PersonalInfoField::ConfirmPassword => {
                self.confirm_password = Secret::new(value.into_text(key)?)
            }
            PersonalInfoField::PhoneNumber => self.phone_number = value.into_optional_text(key)?,
            PersonalInfoField::Location => self.location = value.into_optional_text(key)?,
            PersonalInfoField::LinkedinUrl => self.linkedin_url = value.into_optional_text(key)?,
            PersonalInfoField::PersonalWebsiteUrl => {
                self.personal_website_url = value.into_optional_text(key)?
            }
            PersonalInfoField::ProfessionalSummary => {
                self.professional_summary = value.into_optional_text(key)?
            }
        }
        Ok(())
    }

    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }

    pub fn confirm_password(&self) -> &str {
        self.confirm_password.expose_secret()
    }
}

impl Default for PersonalInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: Secret::new(String::new()),
            confirm_password: Secret::new(String::new()),
            phone_number: None,
            location: None,
            linkedin_url: None,
            personal_website_url: None,
            professional_summary: None,
        }
    }
}
