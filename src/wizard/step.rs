// ABOUTME: Ordered steps of the registration wizard
// Each step owns a fixed subset of draft fields and a display title

use crate::models::Field;

/// Steps in the registration wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WizardStep {
    Personal,
    Guardian,
    AcademicHistory,
    SchoolPreferences,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::Personal,
            Self::Guardian,
            Self::AcademicHistory,
            Self::SchoolPreferences,
        ]
    }

    /// Get the step number (1-indexed)
    pub fn number(&self) -> usize {
        match self {
            Self::Personal => 1,
            Self::Guardian => 2,
            Self::AcademicHistory => 3,
            Self::SchoolPreferences => 4,
        }
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        4
    }

    /// Step for a 1-indexed number
    pub fn from_number(number: usize) -> Option<Self> {
        Self::all().get(number.checked_sub(1)?).copied()
    }

    pub fn first() -> Self {
        Self::Personal
    }

    pub fn last() -> Self {
        Self::SchoolPreferences
    }

    /// Get display title for this step
    pub fn title(&self) -> &'static str {
        match self {
            Self::Personal => "Personal Data",
            Self::Guardian => "Parents",
            Self::AcademicHistory => "Education",
            Self::SchoolPreferences => "School Choice",
        }
    }

    /// Get description for this step
    pub fn description(&self) -> &'static str {
        match self {
            Self::Personal => "Tell us about the student",
            Self::Guardian => "Parent or guardian details",
            Self::AcademicHistory => "Previous school and grades",
            Self::SchoolPreferences => "Pick up to three schools in order of priority",
        }
    }

    /// Fields collected on this step, in display order
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Self::Personal => &[
                Field::FullName,
                Field::Nisn,
                Field::BirthPlace,
                Field::BirthDate,
                Field::Gender,
                Field::Religion,
                Field::Phone,
                Field::Email,
                Field::Address,
            ],
            Self::Guardian => &[
                Field::FatherName,
                Field::FatherOccupation,
                Field::MotherName,
                Field::MotherOccupation,
                Field::ParentPhone,
                Field::FamilyIncome,
            ],
            Self::AcademicHistory => &[
                Field::PreviousSchool,
                Field::GraduationYear,
                Field::Certificate,
                Field::AverageGrade,
                Field::Achievements,
            ],
            Self::SchoolPreferences => &[
                Field::FirstChoice,
                Field::FirstChoiceProgram,
                Field::SecondChoice,
                Field::SecondChoiceProgram,
                Field::ThirdChoice,
                Field::ThirdChoiceProgram,
                Field::TermsAccepted,
            ],
        }
    }

    /// The step on which a field is collected
    pub fn containing(field: Field) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|step| step.fields().contains(&field))
            .unwrap_or(Self::Personal)
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Personal => Some(Self::Guardian),
            Self::Guardian => Some(Self::AcademicHistory),
            Self::AcademicHistory => Some(Self::SchoolPreferences),
            Self::SchoolPreferences => None,
        }
    }

    /// Get the previous step, if any
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Personal => None,
            Self::Guardian => Some(Self::Personal),
            Self::AcademicHistory => Some(Self::Guardian),
            Self::SchoolPreferences => Some(Self::AcademicHistory),
        }
    }
}
