use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub address: String,
    pub coins: i32,
    pub created_at: NaiveDateTime,
}

/// Roster entry used by the ranking statistics.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserSummary {
    pub user_id: Uuid,
    pub username: String,
}
