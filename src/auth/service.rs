// ABOUTME: Login and registration against an injected account repository

use thiserror::Error;
use tracing::{info, warn};

use super::repository::AccountRepository;
use crate::models::{Account, Role};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    Mismatch,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("an account with email {0} already exists")]
    EmailTaken(String),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Input of the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

pub struct AuthService<R: AccountRepository> {
    repo: R,
    min_password_len: usize,
}

impl<R: AccountRepository> AuthService<R> {
    pub fn new(repo: R, min_password_len: usize) -> Self {
        Self {
            repo,
            min_password_len,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn min_password_len(&self) -> usize {
        self.min_password_len
    }

    /// Look up an exact email and password match
    pub fn login(&self, email: &str, password: &str) -> Result<Account, AuthError> {
        match self.repo.find_by_credentials(email, password)? {
            Some(mut account) => {
                account.is_logged_in = true;
                info!("Login succeeded for {} ({})", account.email, account.role);
                Ok(account)
            }
            None => {
                warn!("Login failed for {}", email.trim());
                Err(AuthError::Mismatch)
            }
        }
    }

    /// Validate the form and append a new account
    pub fn register(&mut self, form: RegistrationForm) -> Result<Account, AuthError> {
        let required = [
            ("name", &form.name),
            ("email", &form.email),
            ("phone", &form.phone),
            ("password", &form.password),
        ];
        if let Some((label, _)) = required.into_iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AuthError::MissingField(label));
        }

        if form.password.chars().count() < self.min_password_len {
            return Err(AuthError::PasswordTooShort {
                min: self.min_password_len,
            });
        }
        if form.password != form.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let email = form.email.trim().to_string();
        if self.repo.find_by_email(&email)?.is_some() {
            return Err(AuthError::EmailTaken(email));
        }

        let account = Account::new(form.name.trim(), email, form.phone.trim(), form.role, form.password);
        self.repo.append(account.clone())?;
        info!("Registered {} account {}", account.role, account.email);
        Ok(account)
    }
}
