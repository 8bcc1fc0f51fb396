use sqlx::PgPool;

use crate::error::Result;
use crate::models::{NewWorkoutRecord, WorkoutRecord};

pub struct WorkoutRecordRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRecordRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a record. Nothing is kept if the insert fails.
    pub async fn create(&self, record: &NewWorkoutRecord) -> Result<WorkoutRecord> {
        let mut tx = self.pool.begin().await?;

        let created = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workout_records (user_id, category_id, date, duration_min, difficulty, calories_burn)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING record_id, user_id, category_id, date, duration_min, difficulty, calories_burn
            "#,
        )
        .bind(record.user_id)
        .bind(record.category_id)
        .bind(record.date)
        .bind(record.duration_min)
        .bind(record.difficulty)
        .bind(record.calories_burn)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(created)
    }
}
