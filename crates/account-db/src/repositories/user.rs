//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use account_core::entities::{User, UserStatus, UserSummary};
use account_core::traits::{NewUser, RepoResult, UserListQuery, UserRepository, LIST_PAGE_SIZE};
use account_core::value_objects::UserId;

use crate::mappers::UserInsert;
use crate::models::{UserModel, UserSummaryModel};

use super::error::{email_not_found, map_db_error, map_unique_violation, user_not_found};

/// Wrap a filter value for a contains-style LIKE match
fn contains_pattern(filter: &str) -> String {
    format!("%{filter}%")
}

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn has_duplicate_email(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND status IN ('active', 'dormant'))
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn has_duplicate_nickname(&self, nickname: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE nickname = $1 AND status IN ('active', 'dormant'))
            ",
        )
        .bind(nickname)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, user))]
    async fn create_user(&self, user: &NewUser) -> RepoResult<UserId> {
        let insert = UserInsert::new(user);

        let user_id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO users (email, password, phone_number, nickname, profile_image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING user_id
            ",
        )
        .bind(insert.email)
        .bind(insert.password)
        .bind(insert.phone_number)
        .bind(insert.nickname)
        .bind(insert.profile_image)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(UserId::new(user_id))
    }

    #[instrument(skip(self, token))]
    async fn set_refresh_token(&self, email: &str, token: &str) -> RepoResult<()> {
        // Unconditional by contract: zero rows affected is not an error.
        sqlx::query(
            r"
            UPDATE users
            SET refresh_token = $2, updated_at = NOW()
            WHERE email = $1
            ",
        )
        .bind(email)
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn has_refresh_token(&self, token: &str) -> RepoResult<bool> {
        // Deliberately not filtered by status, unlike the duplicate checks.
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE refresh_token = $1)
            ",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn set_status_dormant(&self, id: UserId) -> RepoResult<u64> {
        self.set_status(id, UserStatus::Dormant).await
    }

    #[instrument(skip(self))]
    async fn set_status_deleted(&self, id: UserId) -> RepoResult<u64> {
        self.set_status(id, UserStatus::Deleted).await
    }

    #[instrument(skip(self))]
    async fn set_nickname(&self, id: UserId, nickname: &str) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET nickname = $2, updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(nickname)
        .execute(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn list_users(&self, query: &UserListQuery) -> RepoResult<Vec<UserSummary>> {
        let results = sqlx::query_as::<_, UserSummaryModel>(
            r"
            SELECT email, phone_number, nickname, profile_image, status, user_id
            FROM users
            WHERE nickname LIKE $1 AND email LIKE $2 AND status = $3 AND user_id >= $4
            ORDER BY user_id
            LIMIT $5
            ",
        )
        .bind(contains_pattern(&query.nickname))
        .bind(contains_pattern(&query.email))
        .bind(query.status.as_str())
        .bind(query.last_id.into_inner())
        .bind(LIST_PAGE_SIZE)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(UserSummary::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_user_id_by_email(&self, email: &str) -> RepoResult<UserId> {
        let result = sqlx::query_scalar::<_, i64>(
            r"
            SELECT user_id FROM users WHERE email = $1 AND status = 'active'
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(UserId::new).ok_or_else(|| email_not_found(email))
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: UserId) -> RepoResult<String> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password FROM users WHERE user_id = $1 AND status = 'active'
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.ok_or_else(|| user_not_found(id))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT user_id, email, password, phone_number, nickname, profile_image,
                   status, refresh_token, created_at, updated_at
            FROM users
            WHERE user_id = $1 AND status <> 'deleted'
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }
}

impl PgUserRepository {
    /// Single-field status transition shared by the dormant/deleted operations
    async fn set_status(&self, id: UserId, status: UserStatus) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET status = $2, updated_at = NOW()
            WHERE user_id = $1
            ",
        )
        .bind(id.into_inner())
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }

    #[test]
    fn test_contains_pattern() {
        assert_eq!(contains_pattern("bob"), "%bob%");
        assert_eq!(contains_pattern(""), "%%");
    }
}
