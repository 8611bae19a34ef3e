//! Wire-ready payloads built from a finished draft.
//!
//! Building a payload is where loosely-typed form state becomes something the
//! profile service can accept: text is trimmed, blank optionals become
//! `null`, dates and URLs are parsed, and `is_current` wins over a stale end
//! date. The transient `confirm_password` never makes it into a payload.

use std::fmt;

use chrono::NaiveDate;
use reqwest::Url;
use secrecy::{ExposeSecret, Secret};
use serde::{Serialize, Serializer};

use super::{Education, Experience, ProfileDraft, Project, Skill};
use crate::domain::foundation::ValidationError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Personal info as sent to the service, without any sub-collections.
#[derive(Debug, Clone, Serialize)]
pub struct RootProfilePayload {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "expose_password")]
    pub password: Secret<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub linkedin_url: Option<String>,
    pub personal_website_url: Option<String>,
    pub professional_summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperiencePayload {
    pub company_name: String,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationPayload {
    pub institution_name: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// The whole draft in one request body, for atomic signup.
#[derive(Debug, Clone, Serialize)]
pub struct SignupPayload {
    #[serde(flatten)]
    pub profile: RootProfilePayload,
    pub experiences: Vec<ExperiencePayload>,
    pub educations: Vec<EducationPayload>,
    pub skills: Vec<Skill>,
    pub projects: Vec<ProjectPayload>,
}

/// The four repeatable sections of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubCollection {
    Experiences,
    Educations,
    Skills,
    Projects,
}

impl SubCollection {
    /// Path segment used by the service for this collection.
    pub fn path_segment(self) -> &'static str {
        match self {
            SubCollection::Experiences => "experiences",
            SubCollection::Educations => "educations",
            SubCollection::Skills => "skills",
            SubCollection::Projects => "projects",
        }
    }
}

impl fmt::Display for SubCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SubItemBody {
    Experience(ExperiencePayload),
    Education(EducationPayload),
    Skill(Skill),
    Project(ProjectPayload),
}

/// One fan-out request: an item plus where it sat in its collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubItem {
    pub position: usize,
    pub body: SubItemBody,
}

impl SubItem {
    pub fn collection(&self) -> SubCollection {
        match self.body {
            SubItemBody::Experience(_) => SubCollection::Experiences,
            SubItemBody::Education(_) => SubCollection::Educations,
            SubItemBody::Skill(_) => SubCollection::Skills,
            SubItemBody::Project(_) => SubCollection::Projects,
        }
    }
}

impl SignupPayload {
    /// Validates and normalizes `draft` into a request body.
    ///
    /// # Errors
    ///
    /// - `EmptyField` for a missing name, email, password or required date
    /// - `InvalidFormat` for a malformed email, date or URL
    pub fn from_draft(draft: &ProfileDraft) -> Result<Self, ValidationError> {
        let info = &draft.personal_info;

        let name = required_text("name", &info.name)?;
        let email = required_text("email", &info.email)?;
        validate_email(&email)?;
        if info.password().is_empty() {
            return Err(ValidationError::empty_field("password"));
        }

        let profile = RootProfilePayload {
            name,
            email,
            password: info.password.clone(),
            phone_number: optional_text(info.phone_number.as_deref()),
            location: optional_text(info.location.as_deref()),
            linkedin_url: optional_url("linkedin_url", info.linkedin_url.as_deref())?,
            personal_website_url: optional_url(
                "personal_website_url",
                info.personal_website_url.as_deref(),
            )?,
            professional_summary: optional_text(info.professional_summary.as_deref()),
        };

        let experiences = draft
            .experiences
            .iter()
            .enumerate()
            .map(|(i, exp)| experience_payload(i, exp))
            .collect::<Result<Vec<_>, _>>()?;
        let educations = draft
            .educations
            .iter()
            .enumerate()
            .map(|(i, edu)| education_payload(i, edu))
            .collect::<Result<Vec<_>, _>>()?;
        let projects = draft
            .projects
            .iter()
            .enumerate()
            .map(|(i, project)| project_payload(i, project))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            profile,
            experiences,
            educations,
            skills: draft.skill_groups.to_skills(),
            projects,
        })
    }

    pub fn sub_item_count(&self) -> usize {
        self.experiences.len() + self.educations.len() + self.skills.len() + self.projects.len()
    }

    /// Splits into the root profile and one request per sub-item, ordered
    /// experiences, educations, skills, projects.
    pub fn into_parts(self) -> (RootProfilePayload, Vec<SubItem>) {
        fn numbered<T>(
            items: Vec<T>,
            wrap: fn(T) -> SubItemBody,
        ) -> impl Iterator<Item = SubItem> {
            items
                .into_iter()
                .enumerate()
                .map(move |(position, item)| SubItem {
                    position,
                    body: wrap(item),
                })
        }

        let items = numbered(self.experiences, SubItemBody::Experience)
            .chain(numbered(self.educations, SubItemBody::Education))
            .chain(numbered(self.skills, SubItemBody::Skill))
            .chain(numbered(self.projects, SubItemBody::Project))
            .collect();
        (self.profile, items)
    }
}

fn experience_payload(index: usize, exp: &Experience) -> Result<ExperiencePayload, ValidationError> {
    let path = |field: &str| format!("experiences[{}].{}", index, field);
    let end_date = if exp.is_current {
        None
    } else {
        optional_date(&path("end_date"), exp.end_date.as_deref())?
    };
    Ok(ExperiencePayload {
        company_name: exp.company_name.trim().to_string(),
        title: exp.title.trim().to_string(),
        start_date: required_date(&path("start_date"), &exp.start_date)?,
        end_date,
        is_current: exp.is_current,
        description: optional_text(Some(&exp.description)),
    })
}

fn education_payload(index: usize, edu: &Education) -> Result<EducationPayload, ValidationError> {
    let path = |field: &str| format!("educations[{}].{}", index, field);
    Ok(EducationPayload {
        institution_name: edu.institution_name.trim().to_string(),
        degree: edu.degree.trim().to_string(),
        field_of_study: edu.field_of_study.trim().to_string(),
        start_date: required_date(&path("start_date"), &edu.start_date)?,
        end_date: optional_date(&path("end_date"), edu.end_date.as_deref())?,
    })
}

fn project_payload(index: usize, project: &Project) -> Result<ProjectPayload, ValidationError> {
    let path = |field: &str| format!("projects[{}].{}", index, field);
    Ok(ProjectPayload {
        name: project.name.trim().to_string(),
        description: optional_text(project.description.as_deref()),
        github_url: optional_url(&path("github_url"), project.github_url.as_deref())?,
        live_url: optional_url(&path("live_url"), project.live_url.as_deref())?,
        start_date: optional_date(&path("start_date"), project.start_date.as_deref())?,
        end_date: optional_date(&path("end_date"), project.end_date.as_deref())?,
    })
}

fn required_text(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn required_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    optional_date(field, Some(value))?.ok_or_else(|| ValidationError::empty_field(field))
}

fn optional_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    match optional_text(value) {
        None => Ok(None),
        Some(text) => NaiveDate::parse_from_str(&text, DATE_FORMAT)
            .map(Some)
            .map_err(|_| ValidationError::invalid_format(field, "expected a date as YYYY-MM-DD")),
    }
}

fn optional_url(field: &str, value: Option<&str>) -> Result<Option<String>, ValidationError> {
    let Some(text) = optional_text(value) else {
        return Ok(None);
    };
    let url = Url::parse(&text)
        .map_err(|e| ValidationError::invalid_format(field, format!("not a valid URL: {}", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(Some(text)),
        other => Err(ValidationError::invalid_format(
            field,
            format!("unsupported URL scheme '{}'", other),
        )),
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.contains('@')
        });
    if valid {
        Ok(())
    } else {
        Err(ValidationError::invalid_format("email", "expected an address like name@example.com"))
    }
}

fn expose_password<S: Serializer>(password: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}
