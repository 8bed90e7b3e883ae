//! Error handling utilities for repositories

use account_core::error::DomainError;
use account_core::value_objects::UserId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Surface unique violations as constraint errors, everything else as database errors
pub fn map_unique_violation(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::ConstraintViolation(db_err.message().to_string());
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create an "email not found" error
pub fn email_not_found(email: &str) -> DomainError {
    DomainError::EmailNotFound(email.to_string())
}
