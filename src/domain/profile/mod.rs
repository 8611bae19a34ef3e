//! Profile module - the draft being assembled by the wizard.
//!
//! `ProfileDraft` is the in-memory aggregate. `SignupPayload` is the validated,
//! wire-ready form of it, and `ProfileRecord` is what the service returns on
//! the read path.

mod draft;
mod education;
mod experience;
mod field;
mod payload;
mod personal_info;
mod project;
mod record;
mod skill;

pub use draft::ProfileDraft;
pub use education::{Education, EducationField};
pub use experience::{Experience, ExperienceField};
pub use field::{DraftItem, FieldValue};
pub use payload::{
    EducationPayload, ExperiencePayload, ProjectPayload, RootProfilePayload, SignupPayload,
    SubCollection, SubItem, SubItemBody,
};
pub use personal_info::{PersonalInfo, PersonalInfoField};
pub use project::{Project, ProjectField};
pub use record::ProfileRecord;
pub use skill::{group_skills, Skill, SkillGroup, DEFAULT_SKILL_CATEGORY};
