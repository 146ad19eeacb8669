// ABOUTME: Shared test fixtures for behavioral tests
//
// Provides:
// - valid_draft(): a draft that passes every step
// - TestPortal: temporary data directory with config pointing at it
// - RecordingSink: submission sink that keeps what it received

use anyhow::Result;
use std::path::Path;
use tempfile::TempDir;

use ppdb::config::AppConfig;
use ppdb::models::{ApplicationDraft, Field};
use ppdb::wizard::SubmissionSink;

/// Minimal values that satisfy every validator with default rules
pub fn valid_draft() -> ApplicationDraft {
    let mut draft = ApplicationDraft::new();
    let values = [
        (Field::FullName, "Siti Nurhaliza"),
        (Field::Nisn, "0987654321"),
        (Field::BirthPlace, "Bandung"),
        (Field::BirthDate, "2009-02-11"),
        (Field::Gender, "female"),
        (Field::Religion, "islam"),
        (Field::Phone, "081234567890"),
        (Field::Email, "siti@example.com"),
        (Field::Address, "Jl. Dago 12, Bandung"),
        (Field::FatherName, "Hasan"),
        (Field::FatherOccupation, "Wiraswasta"),
        (Field::MotherName, "Aminah"),
        (Field::MotherOccupation, "Guru"),
        (Field::ParentPhone, "081298765432"),
        (Field::FamilyIncome, "2-5jt"),
        (Field::PreviousSchool, "SMP Negeri 2 Bandung"),
        (Field::GraduationYear, "2024"),
        (Field::Certificate, "DN-02/D-SMP/06/0054321"),
        (Field::AverageGrade, "88.25"),
        (Field::FirstChoice, "SMA Negeri 3 Bandung"),
        (Field::FirstChoiceProgram, "IPA"),
        (Field::TermsAccepted, "yes"),
    ];
    for (field, value) in values {
        draft.set(field, value);
    }
    draft
}

/// Temporary portal home; the directory is removed on drop
pub struct TestPortal {
    pub dir: TempDir,
    pub config: AppConfig,
}

impl TestPortal {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let mut config = AppConfig::default();
        config.storage.data_dir = Some(dir.path().join("data"));
        Ok(Self { dir, config })
    }

    pub fn data_dir(&self) -> &Path {
        self.config.storage.data_dir.as_deref().unwrap_or(self.dir.path())
    }
}

/// Keeps every draft it is handed
#[derive(Default)]
pub struct RecordingSink {
    pub received: Vec<ApplicationDraft>,
}

impl SubmissionSink for RecordingSink {
    fn on_submit(&mut self, draft: &ApplicationDraft) {
        self.received.push(draft.clone());
    }
}
