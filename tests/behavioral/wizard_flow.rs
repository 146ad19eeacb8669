// ABOUTME: Behavioral tests for the registration wizard
// Verifies step gating, free back-navigation, progress and one-shot submission

use mockall::mock;
use pretty_assertions::assert_eq;

use super::fixtures::{valid_draft, RecordingSink};
use ppdb::models::{ApplicationDraft, Field};
use ppdb::wizard::{
    FieldProblem, SubmissionSink, ValidationRules, WizardController, WizardError, WizardPhase,
    WizardStep,
};

mock! {
    pub Sink {}
    impl SubmissionSink for Sink {
        fn on_submit(&mut self, draft: &ApplicationDraft);
    }
}

fn controller_with(draft: ApplicationDraft) -> WizardController {
    WizardController::with_draft(ValidationRules::default(), draft)
}

fn to_final_step(wizard: &mut WizardController) {
    for _ in 0..3 {
        wizard.advance().expect("step should validate");
    }
}

#[test]
fn test_minimal_valid_data_reaches_sink_once() {
    let mut wizard = controller_with(valid_draft());
    to_final_step(&mut wizard);
    assert_eq!(wizard.current_step(), WizardStep::SchoolPreferences);

    let mut sink = MockSink::new();
    sink.expect_on_submit()
        .withf(|draft| draft.personal.nisn == "0987654321")
        .times(1)
        .return_const(());

    let submitted = wizard.submit_to(&mut sink).unwrap();
    assert_eq!(submitted.preferences.first.school, "SMA Negeri 3 Bandung");
    assert_eq!(wizard.phase(), WizardPhase::Submitted);

    // A second submit is refused and never reaches the sink
    assert_eq!(wizard.submit_to(&mut sink), Err(WizardError::Submitted));
}

#[test]
fn test_short_nisn_blocks_first_step() {
    let mut draft = valid_draft();
    draft.set(Field::Nisn, "12345");
    let mut wizard = controller_with(draft);

    let err = wizard.advance().unwrap_err();
    let problems = err.validation().expect("validation failure");
    assert_eq!(problems.fields(), vec![Field::Nisn]);
    assert!(matches!(
        problems.problem_for(Field::Nisn),
        Some(FieldProblem::InvalidFormat { .. })
    ));
    assert_eq!(wizard.current_step(), WizardStep::Personal);
}

#[test]
fn test_empty_step_reports_every_required_field() {
    let mut wizard = WizardController::new(ValidationRules::default());
    let err = wizard.advance().unwrap_err();
    let fields = err.validation().map(|v| v.fields()).unwrap_or_default();

    for field in WizardStep::Personal.fields().iter().filter(|f| f.is_required()) {
        assert!(fields.contains(field), "{:?} should be reported", field);
    }
}

#[test]
fn test_retreat_is_free_and_keeps_values() {
    let mut wizard = controller_with(valid_draft());
    wizard.advance().unwrap();
    wizard.advance().unwrap();

    // Break a guardian-step field, then walk back past it without validation
    wizard.set_field(Field::ParentPhone, "").unwrap();
    wizard.retreat().unwrap();
    wizard.retreat().unwrap();
    assert_eq!(wizard.current_step(), WizardStep::Personal);
    assert_eq!(wizard.retreat(), Err(WizardError::NoPreviousStep));

    assert_eq!(wizard.draft().personal.full_name, "Siti Nurhaliza");
    wizard.advance().unwrap();
    let err = wizard.advance().unwrap_err();
    assert_eq!(err.validation().map(|v| v.fields()), Some(vec![Field::ParentPhone]));
}

#[test]
fn test_progress_fraction_per_step() {
    let mut wizard = controller_with(valid_draft());
    let mut seen = vec![wizard.progress_fraction()];
    for _ in 0..3 {
        wizard.advance().unwrap();
        seen.push(wizard.progress_fraction());
    }
    assert_eq!(seen, vec![0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn test_submit_before_final_step_is_refused() {
    let mut wizard = controller_with(valid_draft());
    assert_eq!(
        wizard.submit(),
        Err(WizardError::NotOnFinalStep { current: 1, total: 4 })
    );
    assert_eq!(wizard.phase(), WizardPhase::Editing);
}

#[test]
fn test_submit_revalidates_every_step() {
    let mut wizard = controller_with(valid_draft());
    to_final_step(&mut wizard);

    // Earlier-step edits made after advancing are caught at submit
    wizard.set_field(Field::Email, "not-an-email").unwrap();
    wizard.set_field(Field::TermsAccepted, "no").unwrap();

    let mut sink = RecordingSink::default();
    let err = wizard.submit_to(&mut sink).unwrap_err();
    let problems = err.validation().expect("validation failure");
    assert!(problems.contains(Field::Email));
    assert!(problems.contains(Field::TermsAccepted));
    assert_eq!(problems.first_step(), Some(WizardStep::Personal));
    assert!(sink.received.is_empty());
    assert_eq!(wizard.phase(), WizardPhase::Editing);
}

#[test]
fn test_submitted_snapshot_is_frozen() {
    let mut wizard = controller_with(valid_draft());
    to_final_step(&mut wizard);
    let mut sink = RecordingSink::default();
    let snapshot = wizard.submit_to(&mut sink).unwrap();

    assert_eq!(wizard.set_field(Field::FullName, "Someone Else"), Err(WizardError::Submitted));
    assert_eq!(wizard.retreat(), Err(WizardError::Submitted));
    assert_eq!(sink.received, vec![snapshot.clone()]);
    assert_eq!(wizard.draft(), &snapshot);
}

#[test]
fn test_half_filled_optional_choice_is_rejected() {
    let mut draft = valid_draft();
    draft.set(Field::SecondChoice, "SMA Negeri 5 Bandung");
    let mut wizard = controller_with(draft);
    to_final_step(&mut wizard);

    let err = wizard.submit().unwrap_err();
    assert!(matches!(
        err.validation().and_then(|v| v.problem_for(Field::SecondChoiceProgram)),
        Some(FieldProblem::IncompletePair { .. })
    ));
}
