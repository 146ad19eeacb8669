// ABOUTME: Core data models for the admissions portal: accounts and registration drafts

pub mod account;
pub mod draft;
pub mod field;

pub use account::{Account, Role, UnknownRole};
pub use draft::{AcademicHistory, ApplicationDraft, GuardianInfo, PersonalInfo, SchoolChoice, SchoolPreferences};
pub use field::{ChoiceToken, Field, FieldKind, Gender, IncomeBracket, Religion, UnknownField, choice_label};
