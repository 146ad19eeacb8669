// ABOUTME: Submitted applications: status workflow, document checklist, admin filter and store
// An application is created once from a submitted wizard draft

pub mod documents;
pub mod filter;
pub mod status;
pub mod store;

pub use documents::{DocumentChecklist, DocumentEntry, DocumentKind, DocumentState};
pub use filter::ApplicationFilter;
pub use status::{ApplicationStatus, UnknownStatus};
pub use store::{ApplicationError, ApplicationStore, StoreSink};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ApplicationDraft;
use crate::notify::NotificationKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub account_id: String,
    pub student_name: String,
    pub nisn: String,
    /// First-choice school
    pub school: String,
    pub program: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub average_grade: String,
    #[serde(default)]
    pub documents: DocumentChecklist,
    #[serde(default)]
    pub draft: ApplicationDraft,
}

impl Application {
    /// Build a pending application from a submitted draft
    pub fn from_draft(
        id: impl Into<String>,
        account_id: impl Into<String>,
        draft: ApplicationDraft,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            account_id: account_id.into(),
            student_name: draft.personal.full_name.trim().to_string(),
            nisn: draft.personal.nisn.trim().to_string(),
            school: draft.preferences.first.school.trim().to_string(),
            program: draft.preferences.first.program.trim().to_string(),
            status: ApplicationStatus::Pending,
            submitted_at: now,
            updated_at: now,
            average_grade: draft.academic.average_grade.trim().to_string(),
            documents: DocumentChecklist::new(),
            draft,
        }
    }

    /// Messages shown on the student dashboard for this application
    pub fn notifications(&self) -> Vec<StudentNotification> {
        let mut notes = Vec::new();
        match self.status {
            ApplicationStatus::Accepted => notes.push(StudentNotification {
                kind: NotificationKind::Success,
                title: "Application accepted".to_string(),
                message: format!("Congratulations! You have been accepted at {} ({}).", self.school, self.program),
            }),
            ApplicationStatus::Rejected => notes.push(StudentNotification {
                kind: NotificationKind::Error,
                title: "Application not accepted".to_string(),
                message: format!("Your application {} to {} was not accepted.", self.id, self.school),
            }),
            ApplicationStatus::Review => notes.push(StudentNotification {
                kind: NotificationKind::Info,
                title: "Application under review".to_string(),
                message: format!("{} is reviewing application {}.", self.school, self.id),
            }),
            ApplicationStatus::Pending => {}
        }

        let missing = self.documents.missing_required();
        if !self.status.is_final() && !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|kind| kind.label()).collect();
            notes.push(StudentNotification {
                kind: NotificationKind::Warning,
                title: "Documents incomplete".to_string(),
                message: format!("Please complete: {}.", names.join(", ")),
            });
        }
        notes
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}
