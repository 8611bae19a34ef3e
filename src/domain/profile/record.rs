//! Profile as returned by the service on the read path.

use serde::Deserialize;

use super::{group_skills, Education, Experience, Project, Skill, SkillGroup};
use crate::domain::foundation::ProfileId;

/// A stored profile. Same entity shapes as the draft, plus the service id.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileRecord {
    pub id: ProfileId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub personal_website_url: Option<String>,
    #[serde(default)]
    pub professional_summary: Option<String>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub educations: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

impl ProfileRecord {
    /// Skills regrouped by category for display.
    pub fn skill_groups(&self) -> Vec<SkillGroup> {
        group_skills(&self.skills)
    }
}
