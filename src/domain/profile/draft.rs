//! The profile draft aggregate.

use super::{Education, Experience, PersonalInfo, Project};
use crate::domain::editor::{CollectionEditor, KeyedGroupEditor};

/// Everything the user has entered so far.
///
/// Owned by one wizard session. Cloning is cheap for the list sections, which
/// share their backing storage until the next edit.
#[derive(Debug, Clone, Default)]
pub struct ProfileDraft {
    pub personal_info: PersonalInfo,
    pub experiences: CollectionEditor<Experience>,
    pub educations: CollectionEditor<Education>,
    pub skill_groups: KeyedGroupEditor,
    pub projects: CollectionEditor<Project>,
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sub-items a fan-out submission would create.
    pub fn sub_item_count(&self) -> usize {
        self.experiences.len()
            + self.educations.len()
            + self.projects.len()
            + self
                .skill_groups
                .groups()
                .iter()
                .map(|g| g.skills.len())
                .sum::<usize>()
    }
}
