use std::collections::HashSet;

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{SportsCategory, UserSummary, WindowedRecord};
use crate::services::stats::Window;

/// Batched reads behind the statistics endpoints.
///
/// Each method is a single query; the engine in `services::stats` does the
/// per-user and per-day aggregation in memory.
pub struct StatsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StatsRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All users in registration order. Leaderboard ties follow this order.
    pub async fn roster(&self) -> Result<Vec<UserSummary>> {
        let users = sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT user_id, username
            FROM users
            ORDER BY created_at, user_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn catalog(&self) -> Result<Vec<SportsCategory>> {
        let categories = sqlx::query_as::<_, SportsCategory>(
            r#"
            SELECT category_id, name, met_value
            FROM sports_categories
            ORDER BY category_id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Every user's records inside the window, with the category MET value.
    pub async fn windowed_records(&self, window: &Window) -> Result<Vec<WindowedRecord>> {
        let records = sqlx::query_as::<_, WindowedRecord>(
            r#"
            SELECT r.user_id, r.category_id, r.date, r.duration_min, r.difficulty,
                   r.calories_burn, c.met_value
            FROM workout_records r
            LEFT JOIN sports_categories c ON c.category_id = r.category_id
            WHERE r.date BETWEEN $1 AND $2
            "#,
        )
        .bind(window.start)
        .bind(window.today)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Records of a single user inside the window.
    pub async fn user_windowed_records(
        &self,
        user_id: Uuid,
        window: &Window,
    ) -> Result<Vec<WindowedRecord>> {
        let records = sqlx::query_as::<_, WindowedRecord>(
            r#"
            SELECT r.user_id, r.category_id, r.date, r.duration_min, r.difficulty,
                   r.calories_burn, c.met_value
            FROM workout_records r
            LEFT JOIN sports_categories c ON c.category_id = r.category_id
            WHERE r.user_id = $1 AND r.date BETWEEN $2 AND $3
            "#,
        )
        .bind(user_id)
        .bind(window.start)
        .bind(window.today)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }

    /// Distinct days, up to `today`, on which the user logged anything.
    pub async fn activity_dates(
        &self,
        user_id: Uuid,
        today: NaiveDate,
    ) -> Result<HashSet<NaiveDate>> {
        let dates = sqlx::query_scalar::<_, NaiveDate>(
            r#"
            SELECT DISTINCT date
            FROM workout_records
            WHERE user_id = $1 AND date <= $2
            "#,
        )
        .bind(user_id)
        .bind(today)
        .fetch_all(self.pool)
        .await?;

        Ok(dates.into_iter().collect())
    }
}
