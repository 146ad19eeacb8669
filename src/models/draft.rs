// ABOUTME: Structured registration draft collected by the wizard
// Four groups (personal, guardian, academic, preferences) addressed field-by-field

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::field::Field;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub nisn: String,
    pub birth_place: String,
    pub birth_date: String,
    pub gender: String,
    pub religion: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuardianInfo {
    pub father_name: String,
    pub father_occupation: String,
    pub mother_name: String,
    pub mother_occupation: String,
    pub parent_phone: String,
    pub family_income: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AcademicHistory {
    pub previous_school: String,
    pub graduation_year: String,
    pub certificate: String,
    pub average_grade: String,
    pub achievements: String,
}

/// A ranked (school, program) pair
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolChoice {
    pub school: String,
    pub program: String,
}

impl SchoolChoice {
    pub fn new(school: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            school: school.into(),
            program: program.into(),
        }
    }

    /// Neither half is filled in
    pub fn is_empty(&self) -> bool {
        self.school.trim().is_empty() && self.program.trim().is_empty()
    }

    /// Both halves are filled in
    pub fn is_complete(&self) -> bool {
        !self.school.trim().is_empty() && !self.program.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchoolPreferences {
    pub first: SchoolChoice,
    pub second: SchoolChoice,
    pub third: SchoolChoice,
    pub terms_accepted: bool,
}

impl SchoolPreferences {
    /// Choices in rank order
    pub fn ranked(&self) -> [&SchoolChoice; 3] {
        [&self.first, &self.second, &self.third]
    }

    /// Filled-in choices in rank order
    pub fn filled(&self) -> impl Iterator<Item = &SchoolChoice> {
        self.ranked().into_iter().filter(|choice| !choice.is_empty())
    }
}

/// Everything the student enters during one registration session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDraft {
    pub personal: PersonalInfo,
    pub guardian: GuardianInfo,
    pub academic: AcademicHistory,
    pub preferences: SchoolPreferences,
}

impl ApplicationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a field. Never validates; the flag field accepts
    /// `true/yes/y/1/on` (case-insensitive) as set and anything else as unset.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match self.text_slot_mut(field) {
            Some(slot) => *slot = value,
            None => self.preferences.terms_accepted = parse_flag(&value),
        }
    }

    /// Current value of a field as text
    pub fn get(&self, field: Field) -> Cow<'_, str> {
        match self.text_slot(field) {
            Some(slot) => Cow::Borrowed(slot.as_str()),
            None => Cow::Borrowed(if self.preferences.terms_accepted {
                "true"
            } else {
                "false"
            }),
        }
    }

    /// Whether the field holds anything other than whitespace (or is a set flag)
    pub fn is_filled(&self, field: Field) -> bool {
        match self.text_slot(field) {
            Some(slot) => !slot.trim().is_empty(),
            None => self.preferences.terms_accepted,
        }
    }

    /// Text value of a field; `None` for the terms flag
    pub fn text(&self, field: Field) -> Option<&str> {
        self.text_slot(field).map(String::as_str)
    }

    fn text_slot(&self, field: Field) -> Option<&String> {
        let slot = match field {
            Field::FullName => &self.personal.full_name,
            Field::Nisn => &self.personal.nisn,
            Field::BirthPlace => &self.personal.birth_place,
            Field::BirthDate => &self.personal.birth_date,
            Field::Gender => &self.personal.gender,
            Field::Religion => &self.personal.religion,
            Field::Phone => &self.personal.phone,
            Field::Email => &self.personal.email,
            Field::Address => &self.personal.address,
            Field::FatherName => &self.guardian.father_name,
            Field::FatherOccupation => &self.guardian.father_occupation,
            Field::MotherName => &self.guardian.mother_name,
            Field::MotherOccupation => &self.guardian.mother_occupation,
            Field::ParentPhone => &self.guardian.parent_phone,
            Field::FamilyIncome => &self.guardian.family_income,
            Field::PreviousSchool => &self.academic.previous_school,
            Field::GraduationYear => &self.academic.graduation_year,
            Field::Certificate => &self.academic.certificate,
            Field::AverageGrade => &self.academic.average_grade,
            Field::Achievements => &self.academic.achievements,
            Field::FirstChoice => &self.preferences.first.school,
            Field::FirstChoiceProgram => &self.preferences.first.program,
            Field::SecondChoice => &self.preferences.second.school,
            Field::SecondChoiceProgram => &self.preferences.second.program,
            Field::ThirdChoice => &self.preferences.third.school,
            Field::ThirdChoiceProgram => &self.preferences.third.program,
            Field::TermsAccepted => return None,
        };
        Some(slot)
    }

    fn text_slot_mut(&mut self, field: Field) -> Option<&mut String> {
        let slot = match field {
            Field::FullName => &mut self.personal.full_name,
            Field::Nisn => &mut self.personal.nisn,
            Field::BirthPlace => &mut self.personal.birth_place,
            Field::BirthDate => &mut self.personal.birth_date,
            Field::Gender => &mut self.personal.gender,
            Field::Religion => &mut self.personal.religion,
            Field::Phone => &mut self.personal.phone,
            Field::Email => &mut self.personal.email,
            Field::Address => &mut self.personal.address,
            Field::FatherName => &mut self.guardian.father_name,
            Field::FatherOccupation => &mut self.guardian.father_occupation,
            Field::MotherName => &mut self.guardian.mother_name,
            Field::MotherOccupation => &mut self.guardian.mother_occupation,
            Field::ParentPhone => &mut self.guardian.parent_phone,
            Field::FamilyIncome => &mut self.guardian.family_income,
            Field::PreviousSchool => &mut self.academic.previous_school,
            Field::GraduationYear => &mut self.academic.graduation_year,
            Field::Certificate => &mut self.academic.certificate,
            Field::AverageGrade => &mut self.academic.average_grade,
            Field::Achievements => &mut self.academic.achievements,
            Field::FirstChoice => &mut self.preferences.first.school,
            Field::FirstChoiceProgram => &mut self.preferences.first.program,
            Field::SecondChoice => &mut self.preferences.second.school,
            Field::SecondChoiceProgram => &mut self.preferences.second.program,
            Field::ThirdChoice => &mut self.preferences.third.school,
            Field::ThirdChoiceProgram => &mut self.preferences.third.program,
            Field::TermsAccepted => return None,
        };
        Some(slot)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_every_text_field() {
        let mut draft = ApplicationDraft::new();
        for field in Field::ALL.into_iter().filter(|f| *f != Field::TermsAccepted) {
            draft.set(field, field.name());
            assert_eq!(draft.get(field), field.name());
        }
        assert_eq!(draft.preferences.second.program, "secondChoiceProgram");
    }

    #[test]
    fn test_terms_flag() {
        let mut draft = ApplicationDraft::new();
        assert_eq!(draft.get(Field::TermsAccepted), "false");
        draft.set(Field::TermsAccepted, "Yes");
        assert!(draft.preferences.terms_accepted);
        assert!(draft.is_filled(Field::TermsAccepted));
        draft.set(Field::TermsAccepted, "nope");
        assert!(!draft.preferences.terms_accepted);
    }

    #[test]
    fn test_whitespace_is_not_filled() {
        let mut draft = ApplicationDraft::new();
        draft.set(Field::FullName, "   ");
        assert!(!draft.is_filled(Field::FullName));
    }

    #[test]
    fn test_filled_choices() {
        let mut draft = ApplicationDraft::new();
        draft.preferences.first = SchoolChoice::new("SMA Negeri 1 Bandung", "IPA");
        draft.preferences.third = SchoolChoice::new("SMA Negeri 2 Bandung", "IPS");
        let schools: Vec<&str> = draft.preferences.filled().map(|c| c.school.as_str()).collect();
        assert_eq!(schools, vec!["SMA Negeri 1 Bandung", "SMA Negeri 2 Bandung"]);
    }

    #[test]
    fn test_draft_parses_from_partial_toml() {
        let draft: ApplicationDraft = toml::from_str(
            r#"
            [personal]
            fullName = "Ahmad"
            nisn = "1234567890"

            [preferences]
            termsAccepted = true

            [preferences.first]
            school = "SMA Negeri 1 Bandung"
            program = "IPA"
            "#,
        )
        .unwrap();

        assert_eq!(draft.personal.full_name, "Ahmad");
        assert_eq!(draft.preferences.first.program, "IPA");
        assert!(draft.preferences.second.is_empty());
        assert!(draft.guardian.father_name.is_empty());
    }
}
