use sqlx::PgPool;
use storage::{
    dto::plan::NewWorkoutPlan, error::Result, models::WorkoutPlan,
    repository::plan::PlanRepository,
};
use uuid::Uuid;

/// Upcoming and past plans of a user, ordered by start time
pub async fn list_plans(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutPlan>> {
    let repo = PlanRepository::new(pool);
    repo.list_for_user(user_id).await
}

pub async fn create_plan(pool: &PgPool, user_id: Uuid, plan: &NewWorkoutPlan) -> Result<WorkoutPlan> {
    let repo = PlanRepository::new(pool);
    repo.create(user_id, plan).await
}
