use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::User;

/// Request payload for adding a user to the roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(
        min = 1,
        max = 80,
        message = "Username must be between 1 and 80 characters"
    ))]
    pub username: String,

    #[validate(email(message = "Email must be a valid address"))]
    #[validate(length(max = 120))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountInfoResponse {
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub address: String,
    pub coins: i32,
}

/// Empty or absent fields keep their current value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountRequest {
    #[validate(length(max = 80))]
    pub nickname: Option<String>,

    #[validate(length(max = 200))]
    pub address: Option<String>,
}

impl UpdateAccountRequest {
    /// Returns the values to store, falling back to the current ones.
    pub fn merged_with(&self, current: &User) -> (String, String) {
        let pick = |new: &Option<String>, old: &str| {
            new.as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(old)
                .to_string()
        };

        (
            pick(&self.nickname, &current.nickname),
            pick(&self.address, &current.address),
        )
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            email: user.email,
        }
    }
}

impl From<User> for AccountInfoResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            nickname: user.nickname,
            address: user.address,
            coins: user.coins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            user_id: Uuid::nil(),
            username: "adele".to_string(),
            email: "adele@example.com".to_string(),
            nickname: "Not set".to_string(),
            address: "London".to_string(),
            coins: 0,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_merge_keeps_empty_fields() {
        let request = UpdateAccountRequest {
            nickname: Some("Dele".to_string()),
            address: Some(String::new()),
        };
        assert_eq!(
            request.merged_with(&user()),
            ("Dele".to_string(), "London".to_string())
        );
    }

    #[test]
    fn test_create_user_validation() {
        let request = CreateUserRequest {
            username: String::new(),
            email: "not-an-email".to_string(),
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("email"));
    }
}
