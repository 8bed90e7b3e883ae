//! User database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub user_id: i64,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub status: String,
    pub refresh_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserModel {
    /// Check if the row is soft deleted
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.status == "deleted"
    }
}

/// Database model for the user listing projection
#[derive(Debug, Clone, FromRow)]
pub struct UserSummaryModel {
    pub email: String,
    pub phone_number: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub status: String,
    pub user_id: i64,
}
