// ABOUTME: Portal account record as kept in the account store

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role '{0}' (expected student or admin)")]
pub struct UnknownRole(pub String);

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "admin" => Ok(Self::Admin),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// A registered user. Passwords are stored as entered; the store is a
/// single-user local file.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: Role,
    pub password: String,
    #[serde(default)]
    pub is_logged_in: bool,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        role: Role,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            role,
            password: password.into(),
            is_logged_in: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Exact credential match; email comparison ignores case and surrounding whitespace
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email.trim().eq_ignore_ascii_case(email.trim()) && self.password == password
    }
}

// Keep passwords out of logs
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("role", &self.role)
            .field("is_logged_in", &self.is_logged_in)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("student".parse::<Role>(), Ok(Role::Student));
        assert!("principal".parse::<Role>().is_err());
    }

    #[test]
    fn test_credentials_match() {
        let account = Account::new("Siti", "siti@example.com", "0812", Role::Student, "rahasia123");
        assert!(account.matches_credentials(" SITI@example.com", "rahasia123"));
        assert!(!account.matches_credentials("siti@example.com", "Rahasia123"));
    }

    #[test]
    fn test_debug_hides_password() {
        let account = Account::new("Siti", "siti@example.com", "0812", Role::Student, "rahasia123");
        assert!(!format!("{account:?}").contains("rahasia123"));
    }

    #[test]
    fn test_json_shape() {
        let account = Account::new("Siti", "siti@example.com", "0812", Role::Admin, "pw");
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["role"], "admin");
        assert_eq!(json["isLoggedIn"], false);
    }
}
