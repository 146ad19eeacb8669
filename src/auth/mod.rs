// ABOUTME: Authentication: account repository, login/registration service and demo accounts

pub mod repository;
pub mod service;

pub use repository::{AccountRepository, InMemoryAccountRepository, JsonAccountStore};
pub use service::{AuthError, AuthService, RegistrationForm};

use anyhow::Result;
use tracing::info;

use crate::models::{Account, Role};

pub const DEMO_PASSWORD: &str = "password123";

/// The two walkthrough accounts, one per role
pub fn demo_accounts() -> Vec<Account> {
    vec![
        Account {
            id: "demo-student".to_string(),
            name: "Ahmad Rizki".to_string(),
            email: "student@ppdb.jabar.go.id".to_string(),
            phone: "081234567890".to_string(),
            role: Role::Student,
            password: DEMO_PASSWORD.to_string(),
            is_logged_in: false,
        },
        Account {
            id: "demo-admin".to_string(),
            name: "Admin PPDB".to_string(),
            email: "admin@ppdb.jabar.go.id".to_string(),
            phone: "081298765432".to_string(),
            role: Role::Admin,
            password: DEMO_PASSWORD.to_string(),
            is_logged_in: false,
        },
    ]
}

/// Insert the demo accounts when the repository is empty. Returns how many were added.
pub fn seed_demo_accounts<R: AccountRepository + ?Sized>(repo: &mut R) -> Result<usize> {
    if !repo.all()?.is_empty() {
        return Ok(0);
    }
    let accounts = demo_accounts();
    let count = accounts.len();
    for account in accounts {
        repo.append(account)?;
    }
    info!("Seeded {} demo accounts", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_only_into_empty_repository() {
        let mut repo = InMemoryAccountRepository::new();
        assert_eq!(seed_demo_accounts(&mut repo).unwrap(), 2);
        assert_eq!(seed_demo_accounts(&mut repo).unwrap(), 0);

        let auth = AuthService::new(repo, 8);
        let admin = auth.login("admin@ppdb.jabar.go.id", DEMO_PASSWORD).unwrap();
        assert!(admin.is_admin());
    }
}
