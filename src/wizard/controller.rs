// ABOUTME: Step sequencing, per-step validation and submission for one registration session
// The controller exclusively owns its draft; a submitted controller is frozen

use thiserror::Error;
use tracing::{debug, info, warn};

use super::step::WizardStep;
use super::validation::{ValidationError, ValidationRules};
use crate::models::{ApplicationDraft, Field};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("already on the last step")]
    NoNextStep,

    #[error("already on the first step")]
    NoPreviousStep,

    #[error("submission is only possible on step {total} (currently on step {current})")]
    NotOnFinalStep { current: usize, total: usize },

    #[error("the application has already been submitted")]
    Submitted,
}

impl WizardError {
    /// Field problems, when this is a validation failure
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

/// Receives the finished draft after a successful submission
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn on_submit(&mut self, draft: &ApplicationDraft);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    Editing,
    Submitted,
}

#[derive(Debug, Clone)]
pub struct WizardController {
    current_step: WizardStep,
    phase: WizardPhase,
    draft: ApplicationDraft,
    rules: ValidationRules,
}

impl WizardController {
    pub fn new(rules: ValidationRules) -> Self {
        Self::with_draft(rules, ApplicationDraft::new())
    }

    /// Start on step 1 with pre-filled values
    pub fn with_draft(rules: ValidationRules, draft: ApplicationDraft) -> Self {
        Self {
            current_step: WizardStep::first(),
            phase: WizardPhase::Editing,
            draft,
            rules,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == WizardPhase::Submitted
    }

    pub fn draft(&self) -> &ApplicationDraft {
        &self.draft
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    pub fn value(&self, field: Field) -> std::borrow::Cow<'_, str> {
        self.draft.get(field)
    }

    pub fn can_retreat(&self) -> bool {
        !self.is_submitted() && self.current_step.previous().is_some()
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == WizardStep::last()
    }

    /// Overwrite a field without validating it. Refused once submitted.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), WizardError> {
        self.ensure_editing()?;
        self.draft.set(field, value);
        Ok(())
    }

    /// Validate the current step and move forward when it passes
    pub fn advance(&mut self) -> Result<(), WizardError> {
        self.ensure_editing()?;
        let next = self.current_step.next().ok_or(WizardError::NoNextStep)?;

        if let Err(err) = self.rules.validate_step(self.current_step, &self.draft) {
            debug!(
                "Step {} blocked on {} field(s): {:?}",
                self.current_step.number(),
                err.len(),
                err.fields()
            );
            return Err(err.into());
        }

        debug!("Advancing from step {} to {}", self.current_step.number(), next.number());
        self.current_step = next;
        Ok(())
    }

    /// Step back without validating; fields keep their values
    pub fn retreat(&mut self) -> Result<(), WizardError> {
        self.ensure_editing()?;
        let previous = self.current_step.previous().ok_or(WizardError::NoPreviousStep)?;
        self.current_step = previous;
        Ok(())
    }

    /// Fraction of the wizard reached, for display only
    pub fn progress_fraction(&self) -> f64 {
        self.current_step.number() as f64 / WizardStep::total() as f64
    }

    /// Re-validate every step and freeze the wizard on success
    pub fn submit(&mut self) -> Result<ApplicationDraft, WizardError> {
        self.ensure_editing()?;
        if !self.is_final_step() {
            return Err(WizardError::NotOnFinalStep {
                current: self.current_step.number(),
                total: WizardStep::total(),
            });
        }

        if let Err(err) = self.rules.validate_all(&self.draft) {
            warn!("Submission rejected: {} field(s) need attention", err.len());
            return Err(err.into());
        }

        self.phase = WizardPhase::Submitted;
        info!("Application draft submitted for NISN {}", self.draft.personal.nisn);
        Ok(self.draft.clone())
    }

    /// Submit and hand the snapshot to `sink` exactly once
    pub fn submit_to<S>(&mut self, sink: &mut S) -> Result<ApplicationDraft, WizardError>
    where
        S: SubmissionSink + ?Sized,
    {
        let draft = self.submit()?;
        sink.on_submit(&draft);
        Ok(draft)
    }

    /// Abandon the session; the draft is dropped with the controller
    pub fn cancel(self) {
        debug!(
            "Wizard cancelled on step {} ({:?})",
            self.current_step.number(),
            self.phase
        );
    }

    fn ensure_editing(&self) -> Result<(), WizardError> {
        match self.phase {
            WizardPhase::Editing => Ok(()),
            WizardPhase::Submitted => Err(WizardError::Submitted),
        }
    }
}
