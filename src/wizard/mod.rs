// ABOUTME: Multi-step registration wizard: step order, validation rules and the controller

pub mod controller;
pub mod step;
pub mod validation;

pub use controller::{SubmissionSink, WizardController, WizardError, WizardPhase};
pub use step::WizardStep;
pub use validation::{FieldError, FieldProblem, ValidationError, ValidationRules};
