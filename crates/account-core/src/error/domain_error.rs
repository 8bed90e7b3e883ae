//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::UserId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("No active user with email: {0}")]
    EmailNotFound(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    /// A uniqueness constraint was violated at the storage layer.
    ///
    /// Surfaced untranslated; the caller decides whether the email or the
    /// nickname collided.
    #[error("Unique constraint violated: {0}")]
    ConstraintViolation(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::EmailNotFound(_) => "UNKNOWN_EMAIL",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::EmailNotFound(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::ConstraintViolation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::UserNotFound(UserId::new(1));
        assert_eq!(err.code(), "UNKNOWN_USER");

        let err = DomainError::ConstraintViolation("users_email_key".to_string());
        assert_eq!(err.code(), "CONSTRAINT_VIOLATION");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::UserNotFound(UserId::new(1)).is_not_found());
        assert!(DomainError::EmailNotFound("a@b.com".to_string()).is_not_found());
        assert!(!DomainError::DatabaseError("boom".to_string()).is_not_found());
    }

    #[test]
    fn test_is_conflict() {
        assert!(DomainError::ConstraintViolation("dup".to_string()).is_conflict());
        assert!(!DomainError::UserNotFound(UserId::new(1)).is_conflict());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::UserNotFound(UserId::new(123));
        assert_eq!(err.to_string(), "User not found: 123");

        let err = DomainError::EmailNotFound("gone@example.com".to_string());
        assert_eq!(err.to_string(), "No active user with email: gone@example.com");
    }
}
