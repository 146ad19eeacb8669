// ABOUTME: Per-step validation rules for the registration wizard
// Produces an exhaustive list of field problems rather than stopping at the first

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

use super::step::WizardStep;
use crate::models::{ApplicationDraft, ChoiceToken, Field, Gender, IncomeBracket, Religion};

lazy_static! {
    // local@domain, no whitespace
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+$").unwrap();

    // Optional leading +, then digits with optional spaces or dashes
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9][0-9 \-]{6,18}[0-9]$").unwrap();
}

/// What is wrong with a single field
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldProblem {
    #[error("is required")]
    Missing,

    #[error("must be {expected}")]
    InvalidFormat { expected: String },

    #[error("must be between {min} and {max}")]
    OutOfRange { min: f64, max: f64 },

    #[error("'{value}' is not one of the available options")]
    UnknownChoice { value: String },

    #[error("must be filled in together with {}", .counterpart.label())]
    IncompletePair { counterpart: Field },

    #[error("must be accepted")]
    NotAccepted,
}

/// A problem tied to the field that has it
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} {problem}", .field.label())]
pub struct FieldError {
    pub field: Field,
    pub problem: FieldProblem,
}

impl FieldError {
    pub fn new(field: Field, problem: FieldProblem) -> Self {
        Self { field, problem }
    }
}

/// Every problem found while validating one or more steps
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Wrap a non-empty list of problems; `None` when there is nothing to report
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Fields with at least one problem, in the order they were found
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = Vec::with_capacity(self.errors.len());
        for error in &self.errors {
            if !fields.contains(&error.field) {
                fields.push(error.field);
            }
        }
        fields
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    pub fn problem_for(&self, field: Field) -> Option<&FieldProblem> {
        self.errors.iter().find(|e| e.field == field).map(|e| &e.problem)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// First step that has a problem
    pub fn first_step(&self) -> Option<WizardStep> {
        self.errors
            .iter()
            .map(|e| WizardStep::containing(e.field))
            .min()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) need attention", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Tunable limits and catalogues used by the validators
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRules {
    pub nisn_length: usize,
    pub graduation_years: RangeInclusive<i32>,
    pub grade_range: RangeInclusive<f64>,
    /// Allowed schools; empty means any non-empty name is accepted
    pub schools: Vec<String>,
    /// Allowed programs; empty means any non-empty name is accepted
    pub programs: Vec<String>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            nisn_length: 10,
            graduation_years: 2020..=2025,
            grade_range: 0.0..=100.0,
            schools: Vec::new(),
            programs: Vec::new(),
        }
    }
}

impl ValidationRules {
    /// Check the fields of one step
    pub fn check_step(&self, step: WizardStep, draft: &ApplicationDraft) -> Vec<FieldError> {
        let mut errors = Vec::new();
        match step {
            WizardStep::Personal => self.check_personal(draft, &mut errors),
            WizardStep::Guardian => self.check_guardian(draft, &mut errors),
            WizardStep::AcademicHistory => self.check_academic(draft, &mut errors),
            WizardStep::SchoolPreferences => self.check_preferences(draft, &mut errors),
        }
        errors
    }

    /// Validate one step
    pub fn validate_step(&self, step: WizardStep, draft: &ApplicationDraft) -> Result<(), ValidationError> {
        ValidationError::from_errors(self.check_step(step, draft)).map_or(Ok(()), Err)
    }

    /// Validate every step and aggregate the problems in step order
    pub fn validate_all(&self, draft: &ApplicationDraft) -> Result<(), ValidationError> {
        let errors: Vec<FieldError> = WizardStep::all()
            .iter()
            .flat_map(|step| self.check_step(*step, draft))
            .collect();
        ValidationError::from_errors(errors).map_or(Ok(()), Err)
    }

    fn check_personal(&self, draft: &ApplicationDraft, errors: &mut Vec<FieldError>) {
        require(draft, Field::FullName, errors);

        if let Some(nisn) = require(draft, Field::Nisn, errors) {
            if nisn.len() != self.nisn_length || !nisn.chars().all(|c| c.is_ascii_digit()) {
                errors.push(FieldError::new(
                    Field::Nisn,
                    FieldProblem::InvalidFormat {
                        expected: format!("exactly {} digits", self.nisn_length),
                    },
                ));
            }
        }

        require(draft, Field::BirthPlace, errors);

        if let Some(date) = require(draft, Field::BirthDate, errors) {
            if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
                errors.push(invalid_format(Field::BirthDate, "a date in YYYY-MM-DD form"));
            }
        }

        require_choice::<Gender>(draft, Field::Gender, errors);
        require_choice::<Religion>(draft, Field::Religion, errors);
        require_phone(draft, Field::Phone, errors);

        if let Some(email) = require(draft, Field::Email, errors) {
            if !EMAIL_REGEX.is_match(email) {
                errors.push(invalid_format(Field::Email, "an address in local@domain form"));
            }
        }

        require(draft, Field::Address, errors);
    }

    fn check_guardian(&self, draft: &ApplicationDraft, errors: &mut Vec<FieldError>) {
        require(draft, Field::FatherName, errors);
        require(draft, Field::FatherOccupation, errors);
        require(draft, Field::MotherName, errors);
        require(draft, Field::MotherOccupation, errors);
        require_phone(draft, Field::ParentPhone, errors);
        require_choice::<IncomeBracket>(draft, Field::FamilyIncome, errors);
    }

    fn check_academic(&self, draft: &ApplicationDraft, errors: &mut Vec<FieldError>) {
        require(draft, Field::PreviousSchool, errors);

        if let Some(year) = require(draft, Field::GraduationYear, errors) {
            match year.parse::<i32>() {
                Ok(year) if self.graduation_years.contains(&year) => {}
                Ok(_) => errors.push(FieldError::new(
                    Field::GraduationYear,
                    FieldProblem::OutOfRange {
                        min: f64::from(*self.graduation_years.start()),
                        max: f64::from(*self.graduation_years.end()),
                    },
                )),
                Err(_) => errors.push(invalid_format(Field::GraduationYear, "a four-digit year")),
            }
        }

        require(draft, Field::Certificate, errors);

        if let Some(grade) = require(draft, Field::AverageGrade, errors) {
            match grade.replace(',', ".").parse::<f64>() {
                Ok(grade) if grade.is_finite() && self.grade_range.contains(&grade) => {}
                Ok(_) => errors.push(FieldError::new(
                    Field::AverageGrade,
                    FieldProblem::OutOfRange {
                        min: *self.grade_range.start(),
                        max: *self.grade_range.end(),
                    },
                )),
                Err(_) => errors.push(invalid_format(Field::AverageGrade, "a number such as 85.50")),
            }
        }
    }

    fn check_preferences(&self, draft: &ApplicationDraft, errors: &mut Vec<FieldError>) {
        let pairs = [
            (Field::FirstChoice, Field::FirstChoiceProgram),
            (Field::SecondChoice, Field::SecondChoiceProgram),
            (Field::ThirdChoice, Field::ThirdChoiceProgram),
        ];

        for (school_field, program_field) in pairs {
            let school = draft.text(school_field).unwrap_or_default().trim();
            let program = draft.text(program_field).unwrap_or_default().trim();

            if school_field.is_required() {
                if school.is_empty() {
                    errors.push(FieldError::new(school_field, FieldProblem::Missing));
                }
                if program.is_empty() {
                    errors.push(FieldError::new(program_field, FieldProblem::Missing));
                }
            } else if school.is_empty() && !program.is_empty() {
                errors.push(FieldError::new(
                    school_field,
                    FieldProblem::IncompletePair { counterpart: program_field },
                ));
            } else if !school.is_empty() && program.is_empty() {
                errors.push(FieldError::new(
                    program_field,
                    FieldProblem::IncompletePair { counterpart: school_field },
                ));
            }

            if !school.is_empty() && !in_catalog(&self.schools, school) {
                errors.push(unknown_choice(school_field, school));
            }
            if !program.is_empty() && !in_catalog(&self.programs, program) {
                errors.push(unknown_choice(program_field, program));
            }
        }

        if !draft.preferences.terms_accepted {
            errors.push(FieldError::new(Field::TermsAccepted, FieldProblem::NotAccepted));
        }
    }
}

/// Push `Missing` for an empty field; otherwise hand back the trimmed value
fn require<'a>(draft: &'a ApplicationDraft, field: Field, errors: &mut Vec<FieldError>) -> Option<&'a str> {
    let trimmed = draft.text(field).unwrap_or_default().trim();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, FieldProblem::Missing));
        None
    } else {
        Some(trimmed)
    }
}

fn require_choice<T: ChoiceToken>(draft: &ApplicationDraft, field: Field, errors: &mut Vec<FieldError>) {
    if let Some(value) = require(draft, field, errors) {
        if T::from_token(value).is_none() {
            errors.push(unknown_choice(field, value));
        }
    }
}

fn require_phone(draft: &ApplicationDraft, field: Field, errors: &mut Vec<FieldError>) {
    if let Some(phone) = require(draft, field, errors) {
        if !PHONE_REGEX.is_match(phone) {
            errors.push(invalid_format(field, "a phone number such as 081234567890"));
        }
    }
}

fn in_catalog(catalog: &[String], value: &str) -> bool {
    catalog.is_empty() || catalog.iter().any(|entry| entry.eq_ignore_ascii_case(value))
}

fn invalid_format(field: Field, expected: &str) -> FieldError {
    FieldError::new(
        field,
        FieldProblem::InvalidFormat {
            expected: expected.to_string(),
        },
    )
}

fn unknown_choice(field: Field, value: &str) -> FieldError {
    FieldError::new(
        field,
        FieldProblem::UnknownChoice {
            value: value.to_string(),
        },
    )
}
