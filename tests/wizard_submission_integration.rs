//! End-to-end wizard scenarios against the mock profile service.
//!
//! These tests drive a session the way a form would:
//! 1. Fill personal info and pass the password gate
//! 2. Edit the repeatable sections through their editors
//! 3. Submit from the last step with either strategy

use std::sync::Arc;
use std::time::Duration;

use profile_wizard::adapters::{MockCall, MockProfileService};
use profile_wizard::application::{
    SubmissionError, SubmissionOrchestrator, WizardController, WizardError,
};
use profile_wizard::domain::foundation::{ErrorCode, ValidationError};
use profile_wizard::domain::profile::{
    ExperienceField, PersonalInfoField, ProjectField, Skill, SubCollection,
};
use profile_wizard::domain::wizard::WizardStep;
use profile_wizard::ports::ServiceError;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn start_wizard(password: &str, confirm: &str) -> WizardController {
    let mut wizard = WizardController::new();
    let info = &mut wizard.draft_mut().unwrap().personal_info;
    info.set_field(PersonalInfoField::Name, "Grace Hopper").unwrap();
    info.set_field(PersonalInfoField::Email, "grace@example.com").unwrap();
    info.set_field(PersonalInfoField::Password, password).unwrap();
    info.set_field(PersonalInfoField::ConfirmPassword, confirm).unwrap();
    info.set_field(PersonalInfoField::Location, "Arlington, VA").unwrap();
    wizard
}

/// Fills one experience, no education, two skill categories, no projects.
fn fill_sections(wizard: &mut WizardController) {
    assert_eq!(wizard.next().unwrap(), WizardStep::Experience);
    {
        let draft = wizard.draft_mut().unwrap();
        draft.experiences.add();
        draft
            .experiences
            .update_at(0, ExperienceField::CompanyName, "US Navy")
            .unwrap();
        draft
            .experiences
            .update_at(0, ExperienceField::Title, "Rear Admiral")
            .unwrap();
        draft
            .experiences
            .update_at(0, ExperienceField::StartDate, "1943-12-01")
            .unwrap();
        draft
            .experiences
            .update_at(0, ExperienceField::IsCurrent, true)
            .unwrap();
    }

    assert_eq!(wizard.next().unwrap(), WizardStep::Education);
    assert_eq!(wizard.next().unwrap(), WizardStep::Skills);
    {
        let skills = &mut wizard.draft_mut().unwrap().skill_groups;
        let first = skills.add_category();
        skills.rename_category(&first, "Languages");
        skills.update_skills("Languages", "COBOL,  FLOW-MATIC ,,");
        skills.update_skills("Hardware", "Mark I");
    }

    assert_eq!(wizard.next().unwrap(), WizardStep::Projects);
}

// =============================================================================
// Strategy A: atomic signup
// =============================================================================

#[tokio::test]
async fn atomic_submission_sends_the_whole_draft_once() {
    let service = Arc::new(MockProfileService::new());
    let orchestrator = SubmissionOrchestrator::atomic(service.clone());
    let mut wizard = start_wizard("compiler", "compiler");
    fill_sections(&mut wizard);

    let receipt = wizard.submit(&orchestrator).await.unwrap().unwrap();

    // One experience + three skills, in a single request.
    assert_eq!(
        service.calls(),
        vec![MockCall::CreateProfile {
            email: "grace@example.com".to_string(),
            sub_items: 4
        }]
    );
    // Each item lands in its own collection, skills keep their category.
    let payloads = service.signup_payloads();
    assert_eq!(payloads.len(), 1);
    let payload = &payloads[0];
    assert_eq!(payload.experiences.len(), 1);
    assert_eq!(payload.experiences[0].company_name, "US Navy");
    assert!(payload.experiences[0].is_current);
    assert!(payload.educations.is_empty());
    assert!(payload.projects.is_empty());
    let skill = |name: &str, category: &str| Skill {
        name: name.to_string(),
        category: Some(category.to_string()),
    };
    assert_eq!(
        payload.skills,
        vec![
            skill("COBOL", "Languages"),
            skill("FLOW-MATIC", "Languages"),
            skill("Mark I", "Hardware"),
        ]
    );

    assert_eq!(receipt.profile_id, service.profile_id());
    assert_eq!(wizard.completed_profile(), Some(service.profile_id()));
    assert!(wizard.is_completed());
}

#[tokio::test]
async fn mismatched_passwords_stop_at_the_first_step() {
    let service = Arc::new(MockProfileService::new());
    let mut wizard = start_wizard("compiler", "compilers");

    let err = wizard.next().unwrap_err();

    assert_eq!(err, WizardError::Validation(ValidationError::PasswordMismatch));
    assert_eq!(err.user_message(), "Passwords do not match.");
    assert_eq!(wizard.step(), WizardStep::PersonalInfo);
    assert_eq!(service.call_count(), 0);
}

#[tokio::test]
async fn invalid_section_data_is_reported_with_its_path() {
    let service = Arc::new(MockProfileService::new());
    let orchestrator = SubmissionOrchestrator::atomic(service.clone());
    let mut wizard = start_wizard("compiler", "compiler");
    fill_sections(&mut wizard);
    {
        let draft = wizard.draft_mut().unwrap();
        draft.projects.add();
        draft
            .projects
            .update_at(0, ProjectField::LiveUrl, "not a url")
            .unwrap();
    }

    let err = wizard.submit(&orchestrator).await.unwrap_err();

    match err {
        WizardError::Submission(SubmissionError::Validation(e)) => {
            assert_eq!(e.field(), Some("projects[0].live_url"));
        }
        other => panic!("expected a validation failure, got {:?}", other),
    }
    assert_eq!(service.call_count(), 0);
    assert_eq!(wizard.draft().projects.len(), 1);
}

// =============================================================================
// Strategy B: best-effort fan-out
// =============================================================================

#[tokio::test]
async fn fan_out_partial_failure_is_a_partial_commit() {
    // Second of three sub-item calls fails; latency forces real overlap.
    let service = Arc::new(
        MockProfileService::new()
            .with_delay(Duration::from_millis(20))
            .with_sub_item_failure(1, ServiceError::network("connection reset")),
    );
    let orchestrator = SubmissionOrchestrator::best_effort_fan_out(service.clone());

    let mut wizard = start_wizard("compiler", "compiler");
    assert_eq!(wizard.next().unwrap(), WizardStep::Experience);
    {
        let draft = wizard.draft_mut().unwrap();
        draft.experiences.add();
        draft
            .experiences
            .update_at(0, ExperienceField::StartDate, "1943-12-01")
            .unwrap();
        draft.skill_groups.update_skills("Languages", "COBOL, FLOW-MATIC");
    }
    while !wizard.step().is_last() {
        wizard.next().unwrap();
    }

    let err = wizard.submit(&orchestrator).await.unwrap_err();

    let WizardError::Submission(submission) = &err else {
        panic!("expected a submission error, got {:?}", err);
    };
    assert_eq!(submission.code(), ErrorCode::PartialCommit);
    assert!(!matches!(submission, SubmissionError::Service(_)));
    match submission {
        SubmissionError::PartialCommit {
            profile_id,
            created,
            failures,
        } => {
            assert_eq!(*profile_id, service.profile_id());
            assert_eq!(created.len(), 2);
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].collection, SubCollection::Skills);
            assert_eq!(failures[0].error.code(), ErrorCode::NetworkError);
        }
        other => panic!("expected partial commit, got {:?}", other),
    }

    // The third call was still attempted.
    assert_eq!(service.sub_item_call_count(), 3);
    let last = service.calls().last().cloned();
    assert!(matches!(
        last,
        Some(MockCall::CreateSubItem {
            collection: SubCollection::Skills,
            position: 1,
            ..
        })
    ));

    // Draft kept so the user can decide what to do next.
    assert!(!wizard.is_completed());
    assert!(!wizard.is_submitting());
    assert_eq!(wizard.draft().experiences.len(), 1);
}

#[tokio::test]
async fn fan_out_root_failure_is_not_a_partial_commit() {
    let service = Arc::new(
        MockProfileService::new()
            .with_root_error(ServiceError::service(400, "Email already registered")),
    );
    let orchestrator = SubmissionOrchestrator::best_effort_fan_out(service.clone());
    let mut wizard = start_wizard("compiler", "compiler");
    fill_sections(&mut wizard);

    let err = wizard.submit(&orchestrator).await.unwrap_err();

    assert!(matches!(
        err,
        WizardError::Submission(SubmissionError::Service(ServiceError::Service {
            status: 400,
            ..
        }))
    ));
    assert_eq!(err.user_message(), "Email already registered");
    assert_eq!(service.sub_item_call_count(), 0);
}
