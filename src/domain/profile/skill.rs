//! Skills, grouped by category while editing and flat on the wire.

use serde::{Deserialize, Serialize};

use super::field::nullable_text;

/// Category used when the service returns a skill without one.
pub const DEFAULT_SKILL_CATEGORY: &str = "General";

/// One category and its skills, in the order the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

impl SkillGroup {
    pub fn new(category: impl Into<String>, skills: Vec<String>) -> Self {
        Self {
            category: category.into(),
            skills,
        }
    }
}

/// A single skill as stored by the profile service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(default, deserialize_with = "nullable_text")]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Regroups flat skills by category, preserving first-seen category order.
pub fn group_skills(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        let category = skill
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_SKILL_CATEGORY);
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.skills.push(skill.name.clone()),
            None => groups.push(SkillGroup::new(category, vec![skill.name.clone()])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, category: Option<&str>) -> Skill {
        Skill {
            name: name.to_string(),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn group_skills_keeps_first_seen_order() {
        let groups = group_skills(&[
            skill("Rust", Some("Languages")),
            skill("Git", Some("Tools")),
            skill("Go", Some("Languages")),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], SkillGroup::new("Languages", vec!["Rust".into(), "Go".into()]));
        assert_eq!(groups[1], SkillGroup::new("Tools", vec!["Git".into()]));
    }

    #[test]
    fn uncategorised_skills_fall_under_general() {
        let groups = group_skills(&[skill("Writing", None), skill("Speaking", Some(""))]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, DEFAULT_SKILL_CATEGORY);
        assert_eq!(groups[0].skills, vec!["Writing", "Speaking"]);
    }
}
