//! Education entries.

use serde::{Deserialize, Serialize};

use super::field::{nullable_text, DraftItem, FieldValue};
use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(deserialize_with = "nullable_text")]
    pub institution_name: String,
    #[serde(deserialize_with = "nullable_text")]
    pub degree: String,
    #[serde(deserialize_with = "nullable_text")]
    pub field_of_study: String,
    #[serde(deserialize_with = "nullable_text")]
    pub start_date: String,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    InstitutionName,
    Degree,
    FieldOfStudy,
    StartDate,
    EndDate,
}

impl EducationField {
    pub fn name(self) -> &'static str {
        match self {
            EducationField::InstitutionName => "institution_name",
            EducationField::Degree => "degree",
            EducationField::FieldOfStudy => "field_of_study",
            EducationField::StartDate => "start_date",
            EducationField::EndDate => "end_date",
        }
    }
}

impl DraftItem for Education {
    type Field = EducationField;

    fn blank() -> Self {
        Self::default()
    }

    fn set_field(&mut self, field: EducationField, value: FieldValue) -> Result<(), ValidationError> {
        let key = field.name();
        match field {
            EducationField::InstitutionName => self.institution_name = value.into_text(key)?,
            EducationField::Degree => self.degree = value.into_text(key)?,
            EducationField::FieldOfStudy => self.field_of_study = value.into_text(key)?,
            EducationField::StartDate => self.start_date = value.into_text(key)?,
            EducationField::EndDate => self.end_date = value.into_optional_text(key)?,
        }
        Ok(())
    }
}
