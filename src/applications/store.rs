// ABOUTME: JSON-file store of submitted applications
// Mutations reload the file first and write it back atomically (last write wins)

use anyhow::Result;
use chrono::Utc;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use super::documents::{DocumentKind, DocumentState};
use super::status::ApplicationStatus;
use super::Application;
use crate::models::ApplicationDraft;
use crate::storage::{read_json_or_default, write_json_atomic};
use crate::wizard::SubmissionSink;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("no application matches '{0}'")]
    NotFound(String),

    #[error("'{query}' matches several applications: {}", .candidates.join(", "))]
    Ambiguous { query: String, candidates: Vec<String> },

    #[error("cannot move {id} from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Default)]
pub struct ApplicationStore {
    /// `None` keeps everything in memory
    path: Option<PathBuf>,
    applications: Vec<Application>,
}

impl ApplicationStore {
    pub const FILE_NAME: &'static str = "applications.json";

    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let applications = read_json_or_default(&path)?;
        Ok(Self {
            path: Some(path),
            applications,
        })
    }

    /// Store at `<data_dir>/applications.json`
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        Self::load(data_dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Re-read the backing file, picking up writes from other instances
    pub fn reload(&mut self) -> Result<()> {
        if let Some(path) = &self.path {
            self.applications = read_json_or_default(path)?;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => write_json_atomic(path, &self.applications),
            None => Ok(()),
        }
    }

    pub fn all(&self) -> &[Application] {
        &self.applications
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    pub fn for_account(&self, account_id: &str) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|app| app.account_id == account_id)
            .collect()
    }

    /// Distinct first-choice schools, sorted
    pub fn schools(&self) -> Vec<String> {
        let mut schools: Vec<String> = self.applications.iter().map(|app| app.school.clone()).collect();
        schools.sort();
        schools.dedup();
        schools
    }

    /// Exact id, or a prefix that identifies a single application (case-insensitive)
    pub fn find(&self, query: &str) -> Result<&Application, ApplicationError> {
        let index = self.position(query)?;
        Ok(&self.applications[index])
    }

    /// Persist a new pending application built from `draft`
    pub fn insert(&mut self, account_id: &str, draft: ApplicationDraft) -> Result<Application, ApplicationError> {
        self.reload()?;
        let id = self.next_id();
        let application = Application::from_draft(id, account_id, draft, Utc::now());
        let mut next = self.applications.clone();
        next.push(application.clone());
        self.commit(next)?;
        info!("Stored application {} for {}", application.id, application.school);
        Ok(application)
    }

    pub fn set_status(&mut self, query: &str, status: ApplicationStatus) -> Result<Application, ApplicationError> {
        self.reload()?;
        let index = self.position(query)?;
        let current = &self.applications[index];
        if !current.status.can_transition_to(status) {
            return Err(ApplicationError::InvalidTransition {
                id: current.id.clone(),
                from: current.status,
                to: status,
            });
        }

        let mut updated = current.clone();
        let from = updated.status;
        updated.status = status;
        updated.updated_at = Utc::now();
        self.replace(index, updated.clone())?;
        info!("Application {}: {} -> {}", updated.id, from, status);
        Ok(updated)
    }

    pub fn mark_document(
        &mut self,
        query: &str,
        kind: DocumentKind,
        state: DocumentState,
    ) -> Result<Application, ApplicationError> {
        self.reload()?;
        let index = self.position(query)?;
        let mut updated = self.applications[index].clone();
        updated.documents.mark(kind, state);
        updated.updated_at = Utc::now();
        self.replace(index, updated.clone())?;
        Ok(updated)
    }

    fn replace(&mut self, index: usize, application: Application) -> Result<()> {
        let mut next = self.applications.clone();
        next[index] = application;
        self.commit(next)
    }

    /// Write `next` to disk and adopt it; memory is untouched when the write fails
    fn commit(&mut self, next: Vec<Application>) -> Result<()> {
        if let Some(path) = &self.path {
            write_json_atomic(path, &next)?;
        }
        self.applications = next;
        Ok(())
    }

    fn position(&self, query: &str) -> Result<usize, ApplicationError> {
        let query = query.trim();
        if let Some(index) = self
            .applications
            .iter()
            .position(|app| app.id.eq_ignore_ascii_case(query))
        {
            return Ok(index);
        }

        let wanted = query.to_ascii_lowercase();
        let matches: Vec<usize> = self
            .applications
            .iter()
            .enumerate()
            .filter(|(_, app)| !wanted.is_empty() && app.id.to_ascii_lowercase().starts_with(&wanted))
            .map(|(index, _)| index)
            .collect();

        match matches.as_slice() {
            [index] => Ok(*index),
            [] => Err(ApplicationError::NotFound(query.to_string())),
            _ => Err(ApplicationError::Ambiguous {
                query: query.to_string(),
                candidates: matches.iter().map(|i| self.applications[*i].id.clone()).collect(),
            }),
        }
    }

    fn next_id(&self) -> String {
        let highest = self
            .applications
            .iter()
            .filter_map(|app| app.id.strip_prefix("APP")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        format!("APP{:03}", highest + 1)
    }
}

/// Stores a submitted draft as a new application for `account_id`
pub struct StoreSink<'a> {
    store: &'a mut ApplicationStore,
    account_id: &'a str,
    stored: Option<Result<Application, ApplicationError>>,
}

impl<'a> StoreSink<'a> {
    pub fn new(store: &'a mut ApplicationStore, account_id: &'a str) -> Self {
        Self {
            store,
            account_id,
            stored: None,
        }
    }

    /// Outcome of the insert; `None` when nothing was submitted
    pub fn into_stored(self) -> Option<Result<Application, ApplicationError>> {
        self.stored
    }
}

impl SubmissionSink for StoreSink<'_> {
    fn on_submit(&mut self, draft: &ApplicationDraft) {
        self.stored = Some(self.store.insert(self.account_id, draft.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Field, SchoolChoice};
    use tempfile::TempDir;

    fn draft(name: &str) -> ApplicationDraft {
        let mut draft = ApplicationDraft::new();
        draft.set(Field::FullName, name);
        draft.set(Field::Nisn, "1234567890");
        draft.preferences.first = SchoolChoice::new("SMA Negeri 1 Bandung", "IPA");
        draft
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut store = ApplicationStore::in_memory();
        assert_eq!(store.insert("a", draft("Ahmad")).unwrap().id, "APP001");
        assert_eq!(store.insert("b", draft("Siti")).unwrap().id, "APP002");
        assert_eq!(store.for_account("b").len(), 1);
    }

    #[test]
    fn test_find_by_prefix() {
        let mut store = ApplicationStore::in_memory();
        for name in ["Ahmad", "Siti", "Budi"] {
            store.insert("a", draft(name)).unwrap();
        }
        assert_eq!(store.find("app002").unwrap().student_name, "Siti");
        assert!(matches!(store.find("APP"), Err(ApplicationError::Ambiguous { .. })));
        assert!(matches!(store.find("APP9"), Err(ApplicationError::NotFound(_))));
        assert!(matches!(store.find(""), Err(ApplicationError::NotFound(_))));
    }

    #[test]
    fn test_status_transitions_are_enforced() {
        let mut store = ApplicationStore::in_memory();
        store.insert("a", draft("Ahmad")).unwrap();
        store.set_status("APP001", ApplicationStatus::Accepted).unwrap();
        let err = store.set_status("APP001", ApplicationStatus::Rejected).unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidTransition { .. }));
        assert_eq!(store.find("APP001").unwrap().status, ApplicationStatus::Accepted);
    }

    #[test]
    fn test_persists_across_instances() {
        let dir = TempDir::new().unwrap();
        let mut first = ApplicationStore::load_from_dir(dir.path()).unwrap();
        let mut second = ApplicationStore::load_from_dir(dir.path()).unwrap();

        first.insert("a", draft("Ahmad")).unwrap();
        // The second instance reloads before writing, so ids do not collide
        assert_eq!(second.insert("b", draft("Siti")).unwrap().id, "APP002");

        second
            .mark_document("APP001", DocumentKind::FamilyCard, DocumentState::Uploaded)
            .unwrap();
        first.reload().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first.find("APP001").unwrap().documents.completed(), 1);
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = TempDir::new().unwrap();
        // A regular file where the data directory should be makes every write fail
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let mut store = ApplicationStore::load(blocker.join(ApplicationStore::FILE_NAME)).unwrap();

        let err = store.insert("a", draft("Ahmad")).unwrap_err();
        assert!(matches!(err, ApplicationError::Store(_)));
        assert!(store.is_empty());
        assert!(store.for_account("a").is_empty());
    }
}
