//! Category → skills editor.
//!
//! Categories are unique keys kept in insertion order. Renaming onto an
//! existing category overwrites it (last write wins); use
//! [`KeyedGroupEditor::try_rename_category`] to reject that case instead.

use thiserror::Error;

use crate::domain::foundation::ErrorCode;
use crate::domain::profile::{Skill, SkillGroup};

/// Prefix for categories created by [`KeyedGroupEditor::add_category`].
pub const NEW_CATEGORY_PREFIX: &str = "New Category";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyedGroupError {
    #[error("category '{0}' already exists")]
    CategoryExists(String),
}

impl KeyedGroupError {
    pub fn code(&self) -> ErrorCode {
        match self {
            KeyedGroupError::CategoryExists(_) => ErrorCode::CategoryExists,
        }
    }
}

/// What a rename actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Old and new names are identical.
    Unchanged,
    /// The old category does not exist.
    Missing,
    /// Moved to a fresh key.
    Renamed,
    /// Replaced the skills of an existing category with the same name.
    Overwrote,
    /// Renamed to an empty name, which removes the category.
    Deleted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedGroupEditor {
    groups: Vec<SkillGroup>,
    version: u64,
}

impl KeyedGroupEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_groups(groups: impl IntoIterator<Item = SkillGroup>) -> Self {
        let mut editor = Self::new();
        for group in groups {
            editor.upsert(group.category, group.skills);
        }
        editor.version = 0;
        editor
    }

    /// Adds an empty category named `"New Category N"`, where N is the
    /// current category count plus one, and returns that name.
    ///
    /// If a category with that name already exists its skills are cleared.
    pub fn add_category(&mut self) -> String {
        let category = format!("{} {}", NEW_CATEGORY_PREFIX, self.groups.len() + 1);
        self.upsert(category.clone(), Vec::new());
        category
    }

    /// Renames `old` to `new`.
    ///
    /// An empty `new` removes the category. A `new` that names another
    /// existing category overwrites that category's skills.
    pub fn rename_category(&mut self, old: &str, new: &str) -> RenameOutcome {
        if old == new {
            return RenameOutcome::Unchanged;
        }
        let Some(position) = self.position(old) else {
            return RenameOutcome::Missing;
        };

        let removed = self.groups.remove(position);
        self.version += 1;
        if new.is_empty() {
            return RenameOutcome::Deleted;
        }

        let overwrote = self.position(new).is_some();
        self.upsert(new.to_string(), removed.skills);
        if overwrote {
            RenameOutcome::Overwrote
        } else {
            RenameOutcome::Renamed
        }
    }

    /// Like [`rename_category`](Self::rename_category) but refuses to
    /// overwrite an existing category.
    pub fn try_rename_category(
        &mut self,
        old: &str,
        new: &str,
    ) -> Result<RenameOutcome, KeyedGroupError> {
        if old != new && !new.is_empty() && self.position(old).is_some() && self.contains(new) {
            return Err(KeyedGroupError::CategoryExists(new.to_string()));
        }
        Ok(self.rename_category(old, new))
    }

    /// Replaces the skills of `category` with the comma-separated `raw_text`.
    ///
    /// Creates the category if it does not exist. Duplicates are kept.
    pub fn update_skills(&mut self, category: &str, raw_text: &str) {
        self.upsert(category.to_string(), parse_skills(raw_text));
    }

    /// Removes `category`; returns false if it was not present.
    pub fn remove_category(&mut self, category: &str) -> bool {
        match self.position(category) {
            Some(position) => {
                self.groups.remove(position);
                self.version += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, category: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.skills.as_slice())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.position(category).is_some()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.category.as_str())
    }

    pub fn groups(&self) -> &[SkillGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Flattens the groups into one skill per entry, in group order.
    pub fn to_skills(&self) -> Vec<Skill> {
        self.groups
            .iter()
            .flat_map(|group| {
                group.skills.iter().map(move |name| Skill {
                    name: name.clone(),
                    category: Some(group.category.clone()),
                })
            })
            .collect()
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.category == category)
    }

    /// Existing keys keep their position; new keys go to the end.
    fn upsert(&mut self, category: String, skills: Vec<String>) {
        match self.position(&category) {
            Some(position) => self.groups[position].skills = skills,
            None => self.groups.push(SkillGroup { category, skills }),
        }
        self.version += 1;
    }
}

/// Splits comma-separated input into trimmed, non-empty skill names.
pub fn parse_skills(raw_text: &str) -> Vec<String> {
    raw_text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
