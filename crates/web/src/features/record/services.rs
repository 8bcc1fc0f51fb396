use sqlx::PgPool;
use storage::{
    dto::{
        record::LogWorkoutCommand,
        stats::{
            AeroAnaerobicResponse, CategoryComparisonResponse, LeaderboardEntry, MetricsResponse,
            TrendResponse,
        },
    },
    error::Result,
    models::WorkoutRecord,
    repository::{
        category::CategoryRepository, record::WorkoutRecordRepository, stats::StatsRepository,
    },
    services::stats::{self, Window},
};
use uuid::Uuid;

/// Streak, windowed totals and percentile rank among all users
pub async fn get_metrics(
    pool: &PgPool,
    user_id: Uuid,
    window: &Window,
) -> Result<MetricsResponse> {
    let repo = StatsRepository::new(pool);

    let activity_dates = repo.activity_dates(user_id, window.today).await?;
    let records = repo.windowed_records(window).await?;
    let roster = repo.roster().await?;

    Ok(stats::metrics_summary(
        user_id,
        window,
        &activity_dates,
        &records,
        &roster,
    ))
}

/// Daily hours for the user and the per-user average
pub async fn get_trend(pool: &PgPool, user_id: Uuid, window: &Window) -> Result<TrendResponse> {
    let repo = StatsRepository::new(pool);

    let records = repo.windowed_records(window).await?;
    let roster = repo.roster().await?;

    Ok(stats::trend_series(user_id, window, &records, &roster))
}

pub async fn get_aerobic_split(
    pool: &PgPool,
    user_id: Uuid,
    window: &Window,
) -> Result<AeroAnaerobicResponse> {
    let repo = StatsRepository::new(pool);
    let records = repo.user_windowed_records(user_id, window).await?;

    Ok(stats::aerobic_split(user_id, window, &records))
}

pub async fn get_category_comparison(
    pool: &PgPool,
    user_id: Uuid,
    window: &Window,
) -> Result<CategoryComparisonResponse> {
    let repo = StatsRepository::new(pool);

    let records = repo.windowed_records(window).await?;
    let catalog = repo.catalog().await?;

    Ok(stats::category_comparison(user_id, window, &records, &catalog))
}

pub async fn get_leaderboard(pool: &PgPool, window: &Window) -> Result<Vec<LeaderboardEntry>> {
    let repo = StatsRepository::new(pool);

    let records = repo.windowed_records(window).await?;
    let roster = repo.roster().await?;

    Ok(stats::leaderboard(window, &records, &roster))
}

/// Resolve the category by exact name and store a record dated today.
pub async fn log_workout(
    pool: &PgPool,
    user_id: Uuid,
    command: LogWorkoutCommand,
) -> Result<WorkoutRecord> {
    let category = CategoryRepository::new(pool)
        .find_by_name(&command.activity)
        .await?;

    let record = command.into_record(user_id, category.as_ref(), stats::local_today())?;

    WorkoutRecordRepository::new(pool).create(&record).await
}
