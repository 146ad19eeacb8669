// ABOUTME: Account repository abstraction plus JSON-file and in-memory implementations
// The JSON store is read-all/write-all; record counts are small and local

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::debug;

use crate::models::Account;
use crate::storage::{read_json_or_default, write_json_atomic};

/// Where accounts live. Lookups have default implementations over `all()`.
#[cfg_attr(test, mockall::automock)]
pub trait AccountRepository {
    fn all(&self) -> Result<Vec<Account>>;

    fn append(&mut self, account: Account) -> Result<()>;

    /// Linear scan for an exact email and password match
    fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<Account>> {
        Ok(self
            .all()?
            .into_iter()
            .find(|account| account.matches_credentials(email, password)))
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        let email = email.trim();
        Ok(self
            .all()?
            .into_iter()
            .find(|account| account.email.trim().eq_ignore_ascii_case(email)))
    }
}

impl<R: AccountRepository + ?Sized> AccountRepository for Box<R> {
    fn all(&self) -> Result<Vec<Account>> {
        (**self).all()
    }

    fn append(&mut self, account: Account) -> Result<()> {
        (**self).append(account)
    }

    fn find_by_credentials(&self, email: &str, password: &str) -> Result<Option<Account>> {
        (**self).find_by_credentials(email, password)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        (**self).find_by_email(email)
    }
}

/// Accounts kept as a JSON array in a single file (the `users` key)
#[derive(Debug, Clone)]
pub struct JsonAccountStore {
    path: PathBuf,
}

impl JsonAccountStore {
    pub const FILE_NAME: &'static str = "users.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/users.json`
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AccountRepository for JsonAccountStore {
    fn all(&self) -> Result<Vec<Account>> {
        read_json_or_default(&self.path)
    }

    fn append(&mut self, account: Account) -> Result<()> {
        let mut accounts = self.all()?;
        debug!("Appending account {} to {}", account.email, self.path.display());
        accounts.push(account);
        write_json_atomic(&self.path, &accounts)
    }
}

/// Process-local repository; clones share the same accounts
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<Mutex<Vec<Account>>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(accounts)),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Account>>> {
        self.accounts
            .lock()
            .map_err(|_| anyhow::anyhow!("account repository lock poisoned"))
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn all(&self) -> Result<Vec<Account>> {
        Ok(self.lock()?.clone())
    }

    fn append(&mut self, account: Account) -> Result<()> {
        self.lock()?.push(account);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use tempfile::TempDir;

    fn siti() -> Account {
        Account::new("Siti", "siti@example.com", "0812", Role::Student, "rahasia123")
    }

    #[test]
    fn test_json_store_appends_and_finds() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonAccountStore::in_dir(dir.path());
        assert!(store.all().unwrap().is_empty());

        store.append(siti()).unwrap();
        let reopened = JsonAccountStore::in_dir(dir.path());
        let found = reopened
            .find_by_credentials("siti@example.com", "rahasia123")
            .unwrap();
        assert_eq!(found.map(|a| a.name), Some("Siti".to_string()));
        assert!(reopened.find_by_credentials("siti@example.com", "wrong").unwrap().is_none());
    }

    #[test]
    fn test_in_memory_clones_share_state() {
        let repo = InMemoryAccountRepository::new();
        let mut writer = repo.clone();
        writer.append(siti()).unwrap();
        assert!(repo.find_by_email("SITI@example.com").unwrap().is_some());
    }

    #[test]
    fn test_boxed_repository_delegates() {
        let mut boxed: Box<dyn AccountRepository> = Box::new(InMemoryAccountRepository::new());
        boxed.append(siti()).unwrap();
        assert_eq!(boxed.all().unwrap().len(), 1);
    }
}
