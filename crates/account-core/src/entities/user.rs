//! User entity - represents a registered account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Lifecycle state of an account
///
/// Deleted rows stay in the table; uniqueness of email and nickname is only
/// enforced among active and dormant rows, so a deleted account's email or
/// nickname may be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    #[default]
    Active,
    Dormant,
    Deleted,
}

impl UserStatus {
    /// Database string for this status
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Dormant => "dormant",
            Self::Deleted => "deleted",
        }
    }

    /// Check whether this status participates in uniqueness checks
    #[inline]
    #[must_use]
    pub const fn counts_for_uniqueness(self) -> bool {
        matches!(self, Self::Active | Self::Dormant)
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserStatus {
    type Err = UserStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "dormant" => Ok(Self::Dormant),
            "deleted" => Ok(Self::Deleted),
            other => Err(UserStatusParseError::Unknown(other.to_string())),
        }
    }
}

/// Error when parsing a UserStatus from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStatusParseError {
    #[error("unknown user status: {0}")]
    Unknown(String),
}

/// User entity representing an account row
///
/// The password hash and refresh token never leave the database layer; they
/// are not part of the entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub phone_number: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the account is active
    #[inline]
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Update the nickname
    pub fn set_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
        self.updated_at = Utc::now();
    }

    /// Transition the lifecycle status
    pub fn set_status(&mut self, status: UserStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

/// Row shape returned by user listing queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub email: String,
    pub phone_number: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub status: UserStatus,
    pub user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        let now = Utc::now();
        User {
            id: UserId::new(1),
            email: "test@example.com".to_string(),
            phone_number: "010-1234-5678".to_string(),
            nickname: "tester".to_string(),
            profile_image: None,
            status: UserStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(UserStatus::Active.as_str(), "active");
        assert_eq!(UserStatus::Dormant.as_str(), "dormant");
        assert_eq!(UserStatus::Deleted.as_str(), "deleted");
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("active".parse::<UserStatus>(), Ok(UserStatus::Active));
        assert_eq!("dormant".parse::<UserStatus>(), Ok(UserStatus::Dormant));
        assert_eq!("deleted".parse::<UserStatus>(), Ok(UserStatus::Deleted));
        assert!("banned".parse::<UserStatus>().is_err());
    }

    #[test]
    fn test_status_counts_for_uniqueness() {
        assert!(UserStatus::Active.counts_for_uniqueness());
        assert!(UserStatus::Dormant.counts_for_uniqueness());
        assert!(!UserStatus::Deleted.counts_for_uniqueness());
    }

    #[test]
    fn test_is_active() {
        let mut user = test_user();
        assert!(user.is_active());
        user.set_status(UserStatus::Dormant);
        assert!(!user.is_active());
    }

    #[test]
    fn test_set_nickname() {
        let mut user = test_user();
        user.set_nickname("renamed".to_string());
        assert_eq!(user.nickname, "renamed");
    }

    #[test]
    fn test_summary_serializes_status_lowercase() {
        let summary = UserSummary {
            email: "test@example.com".to_string(),
            phone_number: "010-1234-5678".to_string(),
            nickname: "tester".to_string(),
            profile_image: Some("avatar.png".to_string()),
            status: UserStatus::Dormant,
            user_id: UserId::new(7),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["status"], "dormant");
        assert_eq!(json["user_id"], 7);
    }
}
