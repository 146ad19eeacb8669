// ABOUTME: Application review status and the transitions an admin may apply

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Review,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown status '{0}' (expected pending, review, accepted or rejected)")]
pub struct UnknownStatus(pub String);

impl ApplicationStatus {
    pub fn all() -> &'static [ApplicationStatus] {
        &[Self::Pending, Self::Review, Self::Accepted, Self::Rejected]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Review => "review",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Review => "Under review",
            Self::Accepted => "Accepted",
            Self::Rejected => "Rejected",
        }
    }

    /// Whether an admin may move an application from `self` to `next`
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        use ApplicationStatus::*;
        matches!(
            (self, next),
            (Pending, Review | Accepted | Rejected)
                | (Review, Pending | Accepted | Rejected)
                | (Accepted | Rejected, Review)
        )
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "review" | "reviewing" => Ok(Self::Review),
            "accepted" | "accept" => Ok(Self::Accepted),
            "rejected" | "reject" => Ok(Self::Rejected),
            _ => Err(UnknownStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ApplicationStatus::*;

    #[test]
    fn test_transition_table() {
        assert!(Pending.can_transition_to(Review));
        assert!(Pending.can_transition_to(Accepted));
        assert!(Review.can_transition_to(Pending));
        assert!(Accepted.can_transition_to(Review));
        assert!(!Accepted.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Pending));
        for status in ApplicationStatus::all() {
            assert!(!status.can_transition_to(*status));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Accepted".parse::<ApplicationStatus>(), Ok(Accepted));
        assert_eq!("review".parse::<ApplicationStatus>(), Ok(Review));
        assert!("lost".parse::<ApplicationStatus>().is_err());
    }
}
