//! Portfolio project entries.

use serde::{Deserialize, Serialize};

use super::field::{nullable_text, DraftItem, FieldValue};
use crate::domain::foundation::ValidationError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "nullable_text")]
    pub name: String,
    pub description: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Name,
    Description,
    GithubUrl,
    LiveUrl,
    StartDate,
    EndDate,
}

impl ProjectField {
    pub fn name(self) -> &'static str {
        match self {
            ProjectField::Name => "name",
            ProjectField::Description => "description",
            ProjectField::GithubUrl => "github_url",
            ProjectField::LiveUrl => "live_url",
            ProjectField::StartDate => "start_date",
            ProjectField::EndDate => "end_date",
        }
    }
}

impl DraftItem for Project {
    type Field = ProjectField;

    fn blank() -> Self {
        Self::default()
    }

    fn set_field(&mut self, field: ProjectField, value: FieldValue) -> Result<(), ValidationError> {
        let key = field.name();
        match field {
            ProjectField::Name => self.name = value.into_text(key)?,
            ProjectField::Description => self.description = value.into_optional_text(key)?,
            ProjectField::GithubUrl => self.github_url = value.into_optional_text(key)?,
            ProjectField::LiveUrl => self.live_url = value.into_optional_text(key)?,
            ProjectField::StartDate => self.start_date = value.into_optional_text(key)?,
            ProjectField::EndDate => self.end_date = value.into_optional_text(key)?,
        }
        Ok(())
    }
}
