//! Work experience entries.

use serde::{Deserialize, Serialize};

use super::field::{nullable_flag, nullable_text, DraftItem, FieldValue};
use crate::domain::foundation::ValidationError;

/// One position held by the user.
///
/// When `is_current` is set, `end_date` may still hold a stale value from
/// earlier edits; the payload builder treats `is_current` as authoritative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "nullable_text")]
    pub company_name: String,
    #[serde(deserialize_with = "nullable_text")]
    pub title: String,
    #[serde(deserialize_with = "nullable_text")]
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(deserialize_with = "nullable_flag")]
    pub is_current: bool,
    #[serde(deserialize_with = "nullable_text")]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    CompanyName,
    Title,
    StartDate,
    EndDate,
    IsCurrent,
    Description,
}

impl ExperienceField {
    pub fn name(self) -> &'static str {
        match self {
            ExperienceField::CompanyName => "company_name",
            ExperienceField::Title => "title",
            ExperienceField::StartDate => "start_date",
            ExperienceField::EndDate => "end_date",
            ExperienceField::IsCurrent => "is_current",
            ExperienceField::Description => "description",
        }
    }
}

impl DraftItem for Experience {
    type Field = ExperienceField;

    fn blank() -> Self {
        Self::default()
    }

    fn set_field(&mut self, field: ExperienceField, value: FieldValue) -> Result<(), ValidationError> {
        let key = field.name();
        match field {
            ExperienceField::CompanyName => self.company_name = value.into_text(key)?,
            ExperienceField::Title => self.title = value.into_text(key)?,
            ExperienceField::StartDate => self.start_date = value.into_text(key)?,
            ExperienceField::EndDate => self.end_date = value.into_optional_text(key)?,
            ExperienceField::IsCurrent => self.is_current = value.into_flag(key)?,
            ExperienceField::Description => self.description = value.into_text(key)?,
        }
        Ok(())
    }
}
