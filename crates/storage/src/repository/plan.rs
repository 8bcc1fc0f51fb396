use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::plan::NewWorkoutPlan;
use crate::error::{Result, StorageError};
use crate::models::WorkoutPlan;

pub struct PlanRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PlanRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// A user's plans, latest start first
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<WorkoutPlan>> {
        let plans = sqlx::query_as::<_, WorkoutPlan>(
            r#"
            SELECT plan_id, user_id, activity, start_time, end_time
            FROM workout_plans
            WHERE user_id = $1
            ORDER BY start_time DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(plans)
    }

    pub async fn create(&self, user_id: Uuid, plan: &NewWorkoutPlan) -> Result<WorkoutPlan> {
        sqlx::query_as::<_, WorkoutPlan>(
            r#"
            INSERT INTO workout_plans (user_id, activity, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING plan_id, user_id, activity, start_time, end_time
            "#,
        )
        .bind(user_id)
        .bind(&plan.activity)
        .bind(plan.start_time)
        .bind(plan.end_time)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let error = StorageError::from(e);
            if error.is_foreign_key_violation() {
                StorageError::NotFound
            } else {
                error
            }
        })
    }
}
