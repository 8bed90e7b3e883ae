//! User entity <-> model mapper

use account_core::entities::{User, UserStatus, UserSummary};
use account_core::traits::NewUser;
use account_core::value_objects::UserId;

use crate::models::{UserModel, UserSummaryModel};

/// Convert a database status string to UserStatus
///
/// Unknown values fall back to Active rather than failing the row read.
fn parse_status(status: &str) -> UserStatus {
    match status {
        "dormant" => UserStatus::Dormant,
        "deleted" => UserStatus::Deleted,
        _ => UserStatus::Active,
    }
}

/// Convert UserModel to User entity
///
/// The password hash and refresh token stay behind in the model.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.user_id),
            email: model.email,
            phone_number: model.phone_number,
            nickname: model.nickname,
            profile_image: model.profile_image,
            status: parse_status(&model.status),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert UserSummaryModel to UserSummary
impl From<UserSummaryModel> for UserSummary {
    fn from(model: UserSummaryModel) -> Self {
        UserSummary {
            email: model.email,
            phone_number: model.phone_number,
            nickname: model.nickname,
            profile_image: model.profile_image,
            status: parse_status(&model.status),
            user_id: UserId::new(model.user_id),
        }
    }
}

/// Field-to-parameter view of NewUser for the INSERT call site
pub struct UserInsert<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub phone_number: &'a str,
    pub nickname: &'a str,
    pub profile_image: Option<&'a str>,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a NewUser) -> Self {
        Self {
            email: &user.email,
            password: &user.password,
            phone_number: &user.phone_number,
            nickname: &user.nickname,
            profile_image: user.profile_image.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn test_model() -> UserModel {
        let now = Utc::now();
        UserModel {
            user_id: 42,
            email: "test@example.com".to_string(),
            password: "argon2-hash".to_string(),
            phone_number: "010-1234-5678".to_string(),
            nickname: "tester".to_string(),
            profile_image: Some("avatar.png".to_string()),
            status: "dormant".to_string(),
            refresh_token: Some("tok".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(parse_status("active"), UserStatus::Active);
        assert_eq!(parse_status("dormant"), UserStatus::Dormant);
        assert_eq!(parse_status("deleted"), UserStatus::Deleted);
        assert_eq!(parse_status("garbage"), UserStatus::Active);
    }

    #[test]
    fn test_model_to_entity() {
        let user = User::from(test_model());
        assert_eq!(user.id, UserId::new(42));
        assert_eq!(user.email, "test@example.com");
        assert_eq!(user.status, UserStatus::Dormant);
        assert_eq!(user.profile_image.as_deref(), Some("avatar.png"));
    }

    #[test]
    fn test_summary_model_to_summary() {
        let summary = UserSummary::from(UserSummaryModel {
            email: "a@b.com".to_string(),
            phone_number: "010-0000-0000".to_string(),
            nickname: "bobby".to_string(),
            profile_image: None,
            status: "active".to_string(),
            user_id: 7,
        });
        assert_eq!(summary.user_id, UserId::new(7));
        assert_eq!(summary.status, UserStatus::Active);
        assert!(summary.profile_image.is_none());
    }

    #[test]
    fn test_user_insert_borrows_fields() {
        let new_user = NewUser {
            email: "new@example.com".to_string(),
            password: "hash".to_string(),
            phone_number: "010-9999-9999".to_string(),
            nickname: "newbie".to_string(),
            profile_image: None,
        };
        let insert = UserInsert::new(&new_user);
        assert_eq!(insert.email, "new@example.com");
        assert!(insert.profile_image.is_none());
    }
}
