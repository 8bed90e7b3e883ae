//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{User, UserStatus, UserSummary};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Fixed page size for user listing
pub const LIST_PAGE_SIZE: i64 = 20;

/// Data required to create an account
///
/// The caller validates and hashes the password before this struct reaches
/// the repository; the data layer stores it verbatim.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub nickname: String,
    pub profile_image: Option<String>,
}

/// Filter parameters for user listing
///
/// `nickname` and `email` are substring filters (empty string matches
/// everything), `last_id` is an inclusive cursor (zero starts from the
/// beginning). `status` is always an exact match; there is no wildcard.
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub nickname: String,
    pub email: String,
    pub status: UserStatus,
    pub last_id: UserId,
}

impl UserListQuery {
    /// Query matching every user of the given status, from the first page
    pub fn all_with_status(status: UserStatus) -> Self {
        Self {
            nickname: String::new(),
            email: String::new(),
            status,
            last_id: UserId::new(0),
        }
    }
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check if an active or dormant account already uses this email
    async fn has_duplicate_email(&self, email: &str) -> RepoResult<bool>;

    /// Check if an active or dormant account already uses this nickname
    async fn has_duplicate_nickname(&self, nickname: &str) -> RepoResult<bool>;

    /// Insert a new account and return its generated id
    ///
    /// Fails with [`DomainError::ConstraintViolation`] if the email or
    /// nickname uniqueness is violated at the storage layer.
    async fn create_user(&self, user: &NewUser) -> RepoResult<UserId>;

    /// Store a refresh token for the account with this email
    ///
    /// Unconditional update; a no-op when no row has the email. Callers that
    /// care must check existence separately.
    async fn set_refresh_token(&self, email: &str, token: &str) -> RepoResult<()>;

    /// Check if any account holds this refresh token, regardless of status
    async fn has_refresh_token(&self, token: &str) -> RepoResult<bool>;

    /// Mark the account dormant; returns the number of rows affected
    ///
    /// Zero means no row matched the id. That is not an error here.
    async fn set_status_dormant(&self, id: UserId) -> RepoResult<u64>;

    /// Mark the account deleted; returns the number of rows affected
    async fn set_status_deleted(&self, id: UserId) -> RepoResult<u64>;

    /// Change the nickname; returns the number of rows affected
    async fn set_nickname(&self, id: UserId, nickname: &str) -> RepoResult<u64>;

    /// List up to [`LIST_PAGE_SIZE`] users matching the query, ascending by id
    async fn list_users(&self, query: &UserListQuery) -> RepoResult<Vec<UserSummary>>;

    /// Resolve an active account's id from its email
    ///
    /// Fails with [`DomainError::EmailNotFound`] when no active row matches.
    async fn get_user_id_by_email(&self, email: &str) -> RepoResult<UserId>;

    /// Fetch the stored password hash of an active account
    ///
    /// Fails with [`DomainError::UserNotFound`] when no active row matches.
    async fn get_password_hash(&self, id: UserId) -> RepoResult<String>;

    /// Fetch a full user row by id, excluding deleted accounts
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_with_status() {
        let query = UserListQuery::all_with_status(UserStatus::Active);
        assert!(query.nickname.is_empty());
        assert!(query.email.is_empty());
        assert_eq!(query.status, UserStatus::Active);
        assert!(query.last_id.is_zero());
    }

    #[test]
    fn test_page_size() {
        assert_eq!(LIST_PAGE_SIZE, 20);
    }
}
