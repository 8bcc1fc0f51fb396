use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutRecord {
    pub record_id: Uuid,
    pub user_id: Uuid,
    pub category_id: i32,
    pub date: NaiveDate,
    pub duration_min: i32,
    pub difficulty: i32,
    pub calories_burn: Option<f64>,
}

/// A record joined with its category's MET value, as read by the statistics queries.
#[derive(Debug, Clone, FromRow)]
pub struct WindowedRecord {
    pub user_id: Uuid,
    pub category_id: i32,
    pub date: NaiveDate,
    pub duration_min: i32,
    pub difficulty: i32,
    pub calories_burn: Option<f64>,
    pub met_value: Option<f64>,
}

/// Insert payload for the logging path. The date is assigned by the caller.
#[derive(Debug, Clone)]
pub struct NewWorkoutRecord {
    pub user_id: Uuid,
    pub category_id: i32,
    pub date: NaiveDate,
    pub duration_min: i32,
    pub difficulty: i32,
    pub calories_burn: Option<f64>,
}
