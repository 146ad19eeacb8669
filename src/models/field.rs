// ABOUTME: Field catalogue for the registration draft and the fixed choice vocabularies
// Every editable value in the wizard is addressed by a Field; choice fields carry token sets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every editable value in an application draft.
///
/// The set is fixed: a draft always holds a value (possibly empty) for each
/// field, and fields are only ever overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    // Personal
    FullName,
    Nisn,
    BirthPlace,
    BirthDate,
    Gender,
    Religion,
    Phone,
    Email,
    Address,
    // Guardian
    FatherName,
    FatherOccupation,
    MotherName,
    MotherOccupation,
    ParentPhone,
    FamilyIncome,
    // Academic history
    PreviousSchool,
    GraduationYear,
    Certificate,
    AverageGrade,
    Achievements,
    // School preferences
    FirstChoice,
    FirstChoiceProgram,
    SecondChoice,
    SecondChoiceProgram,
    ThirdChoice,
    ThirdChoiceProgram,
    TermsAccepted,
}

/// How a field is edited and displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Multi-line free text
    LongText,
    /// Calendar date (YYYY-MM-DD)
    Date,
    /// Numeric text
    Number,
    /// One of a fixed or configured set of tokens
    Choice,
    /// Boolean checkbox
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl Field {
    pub const ALL: [Field; 27] = [
        Field::FullName,
        Field::Nisn,
        Field::BirthPlace,
        Field::BirthDate,
        Field::Gender,
        Field::Religion,
        Field::Phone,
        Field::Email,
        Field::Address,
        Field::FatherName,
        Field::FatherOccupation,
        Field::MotherName,
        Field::MotherOccupation,
        Field::ParentPhone,
        Field::FamilyIncome,
        Field::PreviousSchool,
        Field::GraduationYear,
        Field::Certificate,
        Field::AverageGrade,
        Field::Achievements,
        Field::FirstChoice,
        Field::FirstChoiceProgram,
        Field::SecondChoice,
        Field::SecondChoiceProgram,
        Field::ThirdChoice,
        Field::ThirdChoiceProgram,
        Field::TermsAccepted,
    ];

    /// Stable camelCase key, used in draft files and error output
    pub const fn name(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Nisn => "nisn",
            Self::BirthPlace => "birthPlace",
            Self::BirthDate => "birthDate",
            Self::Gender => "gender",
            Self::Religion => "religion",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::FatherName => "fatherName",
            Self::FatherOccupation => "fatherOccupation",
            Self::MotherName => "motherName",
            Self::MotherOccupation => "motherOccupation",
            Self::ParentPhone => "parentPhone",
            Self::FamilyIncome => "familyIncome",
            Self::PreviousSchool => "previousSchool",
            Self::GraduationYear => "graduationYear",
            Self::Certificate => "certificate",
            Self::AverageGrade => "averageGrade",
            Self::Achievements => "achievements",
            Self::FirstChoice => "firstChoice",
            Self::FirstChoiceProgram => "firstChoiceProgram",
            Self::SecondChoice => "secondChoice",
            Self::SecondChoiceProgram => "secondChoiceProgram",
            Self::ThirdChoice => "thirdChoice",
            Self::ThirdChoiceProgram => "thirdChoiceProgram",
            Self::TermsAccepted => "termsAccepted",
        }
    }

    /// Human-readable label shown next to the input
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Nisn => "NISN",
            Self::BirthPlace => "Place of birth",
            Self::BirthDate => "Date of birth",
            Self::Gender => "Gender",
            Self::Religion => "Religion",
            Self::Phone => "Phone number",
            Self::Email => "Email",
            Self::Address => "Home address",
            Self::FatherName => "Father's name",
            Self::FatherOccupation => "Father's occupation",
            Self::MotherName => "Mother's name",
            Self::MotherOccupation => "Mother's occupation",
            Self::ParentPhone => "Parent phone",
            Self::FamilyIncome => "Family income",
            Self::PreviousSchool => "Previous school",
            Self::GraduationYear => "Graduation year",
            Self::Certificate => "Certificate number",
            Self::AverageGrade => "Average grade",
            Self::Achievements => "Achievements",
            Self::FirstChoice => "First choice school",
            Self::FirstChoiceProgram => "First choice program",
            Self::SecondChoice => "Second choice school",
            Self::SecondChoiceProgram => "Second choice program",
            Self::ThirdChoice => "Third choice school",
            Self::ThirdChoiceProgram => "Third choice program",
            Self::TermsAccepted => "I declare the data above is true",
        }
    }

    /// Input hint shown while the field is empty
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Nisn => "10-digit national student number",
            Self::BirthDate => "YYYY-MM-DD",
            Self::Phone | Self::ParentPhone => "08xxxxxxxxxx",
            Self::Email => "name@example.com",
            Self::GraduationYear => "2024",
            Self::AverageGrade => "85.50",
            Self::Achievements => "Optional",
            _ => "",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Gender
            | Self::Religion
            | Self::FamilyIncome
            | Self::FirstChoice
            | Self::FirstChoiceProgram
            | Self::SecondChoice
            | Self::SecondChoiceProgram
            | Self::ThirdChoice
            | Self::ThirdChoiceProgram => FieldKind::Choice,
            Self::BirthDate => FieldKind::Date,
            Self::GraduationYear | Self::AverageGrade => FieldKind::Number,
            Self::Address | Self::Achievements => FieldKind::LongText,
            Self::TermsAccepted => FieldKind::Flag,
            _ => FieldKind::Text,
        }
    }

    /// Whether the field must be filled before its step can be left
    pub const fn is_required(self) -> bool {
        !matches!(
            self,
            Self::Achievements
                | Self::SecondChoice
                | Self::SecondChoiceProgram
                | Self::ThirdChoice
                | Self::ThirdChoiceProgram
        )
    }

    /// Fixed token vocabulary for choice fields that do not come from the school catalogue
    pub fn fixed_options(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Gender => Some(Gender::TOKENS),
            Self::Religion => Some(Religion::TOKENS),
            Self::FamilyIncome => Some(IncomeBracket::TOKENS),
            _ => None,
        }
    }

    /// True for the school half of a school/program pair
    pub const fn is_school_choice(self) -> bool {
        matches!(self, Self::FirstChoice | Self::SecondChoice | Self::ThirdChoice)
    }

    /// True for the program half of a school/program pair
    pub const fn is_program_choice(self) -> bool {
        matches!(
            self,
            Self::FirstChoiceProgram | Self::SecondChoiceProgram | Self::ThirdChoiceProgram
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts the camelCase key as well as snake_case and kebab-case spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_key(s);
        Field::ALL
            .into_iter()
            .find(|field| normalize_key(field.name()) == wanted)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// A fixed set of tokens a choice field may hold
pub trait ChoiceToken: Sized + Copy + 'static {
    const ALL: &'static [Self];
    const TOKENS: &'static [&'static str];

    fn token(self) -> &'static str;
    fn label(self) -> &'static str;

    fn from_token(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.token().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl ChoiceToken for Gender {
    const ALL: &'static [Self] = &[Self::Male, Self::Female];
    const TOKENS: &'static [&'static str] = &["male", "female"];

    fn token(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Religion {
    Islam,
    Kristen,
    Katolik,
    Hindu,
    Buddha,
    Konghucu,
}

impl ChoiceToken for Religion {
    const ALL: &'static [Self] = &[
        Self::Islam,
        Self::Kristen,
        Self::Katolik,
        Self::Hindu,
        Self::Buddha,
        Self::Konghucu,
    ];
    const TOKENS: &'static [&'static str] =
        &["islam", "kristen", "katolik", "hindu", "buddha", "konghucu"];

    fn token(self) -> &'static str {
        match self {
            Self::Islam => "islam",
            Self::Kristen => "kristen",
            Self::Katolik => "katolik",
            Self::Hindu => "hindu",
            Self::Buddha => "buddha",
            Self::Konghucu => "konghucu",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Islam => "Islam",
            Self::Kristen => "Protestant",
            Self::Katolik => "Catholic",
            Self::Hindu => "Hindu",
            Self::Buddha => "Buddhist",
            Self::Konghucu => "Confucian",
        }
    }
}

/// Monthly family income bracket, in rupiah
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeBracket {
    UnderOneMillion,
    OneToTwoMillion,
    TwoToFiveMillion,
    FiveToTenMillion,
    OverTenMillion,
}

impl ChoiceToken for IncomeBracket {
    const ALL: &'static [Self] = &[
        Self::UnderOneMillion,
        Self::OneToTwoMillion,
        Self::TwoToFiveMillion,
        Self::FiveToTenMillion,
        Self::OverTenMillion,
    ];
    const TOKENS: &'static [&'static str] = &["< 1jt", "1-2jt", "2-5jt", "5-10jt", "> 10jt"];

    fn token(self) -> &'static str {
        match self {
            Self::UnderOneMillion => "< 1jt",
            Self::OneToTwoMillion => "1-2jt",
            Self::TwoToFiveMillion => "2-5jt",
            Self::FiveToTenMillion => "5-10jt",
            Self::OverTenMillion => "> 10jt",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::UnderOneMillion => "Under Rp 1.000.000",
            Self::OneToTwoMillion => "Rp 1.000.000 - Rp 2.000.000",
            Self::TwoToFiveMillion => "Rp 2.000.000 - Rp 5.000.000",
            Self::FiveToTenMillion => "Rp 5.000.000 - Rp 10.000.000",
            Self::OverTenMillion => "Over Rp 10.000.000",
        }
    }
}

/// Display label for a stored choice token, falling back to the raw token
pub fn choice_label(field: Field, token: &str) -> String {
    let label = match field {
        Field::Gender => Gender::from_token(token).map(ChoiceToken::label),
        Field::Religion => Religion::from_token(token).map(ChoiceToken::label),
        Field::FamilyIncome => IncomeBracket::from_token(token).map(ChoiceToken::label),
        _ => None,
    };
    label.map_or_else(|| token.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn test_field_parse_accepts_snake_case() {
        assert_eq!("first_choice_program".parse::<Field>(), Ok(Field::FirstChoiceProgram));
        assert_eq!("terms-accepted".parse::<Field>(), Ok(Field::TermsAccepted));
        assert!("favouriteColour".parse::<Field>().is_err());
    }

    #[test]
    fn test_optional_fields() {
        let optional: Vec<Field> = Field::ALL.into_iter().filter(|f| !f.is_required()).collect();
        assert_eq!(
            optional,
            vec![
                Field::Achievements,
                Field::SecondChoice,
                Field::SecondChoiceProgram,
                Field::ThirdChoice,
                Field::ThirdChoiceProgram,
            ]
        );
    }

    #[test]
    fn test_choice_tokens() {
        assert_eq!(Gender::from_token("Female"), Some(Gender::Female));
        assert_eq!(Religion::from_token(" hindu "), Some(Religion::Hindu));
        assert_eq!(IncomeBracket::from_token("2-5jt"), Some(IncomeBracket::TwoToFiveMillion));
        assert_eq!(IncomeBracket::from_token("lots"), None);
        assert_eq!(choice_label(Field::Gender, "male"), "Male");
        assert_eq!(choice_label(Field::FirstChoice, "SMA Negeri 1 Bandung"), "SMA Negeri 1 Bandung");
    }
}
