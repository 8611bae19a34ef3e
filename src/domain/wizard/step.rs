//! The ordered wizard steps.

use std::fmt;

use crate::domain::foundation::StateMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    PersonalInfo,
    Experience,
    Education,
    Skills,
    Projects,
}

impl WizardStep {
    /// All steps in the order the wizard visits them.
    pub const ALL: [WizardStep; 5] = [
        WizardStep::PersonalInfo,
        WizardStep::Experience,
        WizardStep::Education,
        WizardStep::Skills,
        WizardStep::Projects,
    ];

    pub fn first() -> Self {
        Self::ALL[0]
    }

    pub fn last() -> Self {
        Self::ALL[Self::ALL.len() - 1]
    }

    /// Zero-based position of the step.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    pub fn is_first(self) -> bool {
        self == Self::first()
    }

    pub fn is_last(self) -> bool {
        self == Self::last()
    }

    /// Tab label shown above the form.
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::PersonalInfo => "Personal Info",
            WizardStep::Experience => "Experience",
            WizardStep::Education => "Education",
            WizardStep::Skills => "Skills",
            WizardStep::Projects => "Projects",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Steps move one at a time in either direction.
impl StateMachine for WizardStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next() == Some(*target) || self.previous() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.previous().into_iter().chain(self.next()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_follow_declaration_order() {
        for (i, step) in WizardStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), i);
            assert_eq!(WizardStep::from_index(i), Some(*step));
        }
        assert_eq!(WizardStep::from_index(5), None);
    }

    #[test]
    fn next_and_previous_stop_at_the_ends() {
        assert_eq!(WizardStep::Projects.next(), None);
        assert_eq!(WizardStep::PersonalInfo.previous(), None);
        assert_eq!(WizardStep::Skills.next(), Some(WizardStep::Projects));
    }

    #[test]
    fn transitions_are_adjacent_only() {
        let step = WizardStep::PersonalInfo;
        assert_eq!(step.transition_to(WizardStep::Experience), Ok(WizardStep::Experience));
        assert!(step.transition_to(WizardStep::Skills).is_err());
        assert!(step.transition_to(WizardStep::PersonalInfo).is_err());
    }

    #[test]
    fn valid_transitions_match_can_transition_to() {
        for step in WizardStep::ALL {
            for target in step.valid_transitions() {
                assert!(step.can_transition_to(&target), "{:?} -> {:?}", step, target);
            }
        }
        assert_eq!(
            WizardStep::Experience.valid_transitions(),
            vec![WizardStep::PersonalInfo, WizardStep::Education]
        );
    }

    #[test]
    fn no_step_is_terminal() {
        assert!(WizardStep::ALL.iter().all(|s| !s.is_terminal()));
    }

    #[test]
    fn invalid_transition_reports_both_ends() {
        let err = WizardStep::Skills
            .transition_to(WizardStep::PersonalInfo)
            .unwrap_err();
        assert_eq!(err.to_string(), "Cannot transition from Skills to PersonalInfo");
    }
}
