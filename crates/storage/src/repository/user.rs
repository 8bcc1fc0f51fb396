use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::user::CreateUserRequest;
use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, user_id: Uuid) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, username, email, nickname, address, coins, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }

    pub async fn create(&self, request: &CreateUserRequest) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email)
            VALUES ($1, $2)
            RETURNING user_id, username, email, nickname, address, coins, created_at
            "#,
        )
        .bind(&request.username)
        .bind(&request.email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let error = StorageError::from(e);
            if error.is_unique_violation() {
                StorageError::ConstraintViolation("Username or Email already exists".to_string())
            } else {
                error
            }
        })
    }

    pub async fn update_profile(
        &self,
        user_id: Uuid,
        nickname: &str,
        address: &str,
    ) -> Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET nickname = $2, address = $3
            WHERE user_id = $1
            RETURNING user_id, username, email, nickname, address, coins, created_at
            "#,
        )
        .bind(user_id)
        .bind(nickname)
        .bind(address)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)
    }
}
