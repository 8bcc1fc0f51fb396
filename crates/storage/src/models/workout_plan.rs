use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutPlan {
    pub plan_id: Uuid,
    pub user_id: Uuid,
    pub activity: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}
