// ABOUTME: Supporting-document checklist attached to every application

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    GraduationCertificate,
    FamilyCard,
    BirthCertificate,
    ReportCards,
    AchievementLetter,
    LowIncomeLetter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentState {
    #[default]
    NotUploaded,
    Pending,
    Uploaded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown document '{0}'")]
pub struct UnknownDocument(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown document state '{0}' (expected uploaded, pending or not_uploaded)")]
pub struct UnknownDocumentState(pub String);

impl DocumentKind {
    pub const ALL: [DocumentKind; 6] = [
        Self::GraduationCertificate,
        Self::FamilyCard,
        Self::BirthCertificate,
        Self::ReportCards,
        Self::AchievementLetter,
        Self::LowIncomeLetter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::GraduationCertificate => "Junior high graduation certificate (Ijazah)",
            Self::FamilyCard => "Family card (Kartu Keluarga)",
            Self::BirthCertificate => "Birth certificate (Akta Kelahiran)",
            Self::ReportCards => "Report cards, semesters 1-5 (Rapor)",
            Self::AchievementLetter => "Achievement letter",
            Self::LowIncomeLetter => "Low-income letter (SKTM)",
        }
    }

    /// Short token used on the command line
    pub fn token(&self) -> &'static str {
        match self {
            Self::GraduationCertificate => "ijazah",
            Self::FamilyCard => "kk",
            Self::BirthCertificate => "akta",
            Self::ReportCards => "rapor",
            Self::AchievementLetter => "prestasi",
            Self::LowIncomeLetter => "sktm",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::AchievementLetter | Self::LowIncomeLetter)
    }
}

impl FromStr for DocumentKind {
    type Err = UnknownDocument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.token() == wanted
                    || format!("{kind:?}").to_ascii_lowercase() == wanted
            })
            .ok_or_else(|| UnknownDocument(s.to_string()))
    }
}

impl DocumentState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotUploaded => "not_uploaded",
            Self::Pending => "pending",
            Self::Uploaded => "uploaded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::NotUploaded => "Not uploaded",
            Self::Pending => "Being verified",
            Self::Uploaded => "Uploaded",
        }
    }
}

impl fmt::Display for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentState {
    type Err = UnknownDocumentState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "not_uploaded" | "missing" => Ok(Self::NotUploaded),
            "pending" => Ok(Self::Pending),
            "uploaded" | "done" => Ok(Self::Uploaded),
            _ => Err(UnknownDocumentState(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub kind: DocumentKind,
    pub state: DocumentState,
}

/// One entry per `DocumentKind`, in the canonical order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentChecklist {
    entries: Vec<DocumentEntry>,
}

impl Default for DocumentChecklist {
    fn default() -> Self {
        Self {
            entries: DocumentKind::ALL
                .into_iter()
                .map(|kind| DocumentEntry {
                    kind,
                    state: DocumentState::NotUploaded,
                })
                .collect(),
        }
    }
}

impl DocumentChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[DocumentEntry] {
        &self.entries
    }

    pub fn state(&self, kind: DocumentKind) -> DocumentState {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind)
            .map(|entry| entry.state)
            .unwrap_or_default()
    }

    pub fn mark(&mut self, kind: DocumentKind, state: DocumentState) {
        match self.entries.iter_mut().find(|entry| entry.kind == kind) {
            Some(entry) => entry.state = state,
            // Older files may predate a document kind
            None => self.entries.push(DocumentEntry { kind, state }),
        }
    }

    /// Documents fully uploaded
    pub fn completed(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.state == DocumentState::Uploaded)
            .count()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Required documents not yet uploaded
    pub fn missing_required(&self) -> Vec<DocumentKind> {
        self.entries
            .iter()
            .filter(|entry| entry.kind.is_required() && entry.state != DocumentState::Uploaded)
            .map(|entry| entry.kind)
            .collect()
    }
}
