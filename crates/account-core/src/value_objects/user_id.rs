//! User ID - database-generated 64-bit identifier
//!
//! Ids come from the `users` table sequence; this type only wraps the raw
//! value so it cannot be confused with other integers at API boundaries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a row in the `users` table
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Create a new UserId from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the id is zero
    ///
    /// Zero never matches a real row; list queries use it as the
    /// "no cursor" sentinel.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, UserIdParseError> {
        s.parse::<i64>()
            .map(UserId)
            .map_err(|_| UserIdParseError::InvalidFormat)
    }
}

/// Error when parsing a UserId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("invalid user id format")]
    InvalidFormat,
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_into_inner() {
        let id = UserId::new(42);
        assert_eq!(id.into_inner(), 42);
    }

    #[test]
    fn test_is_zero() {
        assert!(UserId::new(0).is_zero());
        assert!(!UserId::new(1).is_zero());
        assert!(UserId::default().is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(UserId::new(123).to_string(), "123");
    }

    #[test]
    fn test_parse() {
        assert_eq!("123".parse::<UserId>(), Ok(UserId::new(123)));
        assert_eq!(
            "abc".parse::<UserId>(),
            Err(UserIdParseError::InvalidFormat)
        );
    }

    #[test]
    fn test_ordering() {
        assert!(UserId::new(1) < UserId::new(2));
    }

    #[test]
    fn test_serde_as_number() {
        let id = UserId::new(77);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "77");
        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
