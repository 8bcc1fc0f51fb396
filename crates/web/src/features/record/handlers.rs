use axum::{
    Form, Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        record::{LogWorkoutForm, SuccessResponse, WorkoutKind},
        stats::{
            AeroAnaerobicResponse, CategoryComparisonResponse, LeaderboardEntry, MetricsResponse,
            RangeQuery, TrendResponse,
        },
    },
    services::stats::Window,
};

use crate::error::WebError;
use crate::middleware::auth::AuthenticatedUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/record/metrics",
    params(RangeQuery),
    responses(
        (status = 200, description = "Streak, windowed totals and percentile rank", body = MetricsResponse),
        (status = 401, description = "No authenticated user")
    ),
    tag = "record"
)]
pub async fn get_metrics(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(db): State<Database>,
    Query(query): Query<RangeQuery>,
) -> Result<Response, WebError> {
    let window = Window::current(query.resolve());
    let metrics = services::get_metrics(db.pool(), user_id, &window).await?;

    Ok(Json(metrics).into_response())
}

#[utoipa::path(
    get,
    path = "/api/record/trend",
    params(RangeQuery),
    responses(
        (status = 200, description = "Daily training hours against the per-user average", body = TrendResponse),
        (status = 401, description = "No authenticated user")
    ),
    tag = "record"
)]
pub async fn get_trend(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(db): State<Database>,
    Query(query): Query<RangeQuery>,
) -> Result<Response, WebError> {
    let window = Window::current(query.resolve());
    let trend = services::get_trend(db.pool(), user_id, &window).await?;

    Ok(Json(trend).into_response())
}

#[utoipa::path(
    get,
    path = "/api/record/aeroAnaerobic",
    params(RangeQuery),
    responses(
        (status = 200, description = "Hours split by aerobic and anaerobic categories", body = AeroAnaerobicResponse),
        (status = 401, description = "No authenticated user")
    ),
    tag = "record"
)]
pub async fn get_aero_anaerobic(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(db): State<Database>,
    Query(query): Query<RangeQuery>,
) -> Result<Response, WebError> {
    let window = Window::current(query.resolve());
    let split = services::get_aerobic_split(db.pool(), user_id, &window).await?;

    Ok(Json(split).into_response())
}

#[utoipa::path(
    get,
    path = "/api/record/categoryComparison",
    params(RangeQuery),
    responses(
        (status = 200, description = "Average difficulty per category, user against everyone", body = CategoryComparisonResponse),
        (status = 401, description = "No authenticated user")
    ),
    tag = "record"
)]
pub async fn get_category_comparison(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(db): State<Database>,
    Query(query): Query<RangeQuery>,
) -> Result<Response, WebError> {
    let window = Window::current(query.resolve());
    let comparison = services::get_category_comparison(db.pool(), user_id, &window).await?;

    Ok(Json(comparison).into_response())
}

#[utoipa::path(
    get,
    path = "/api/record/leaderboard",
    params(RangeQuery),
    responses(
        (status = 200, description = "Top users by calories burned", body = Vec<LeaderboardEntry>)
    ),
    tag = "record"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
    Query(query): Query<RangeQuery>,
) -> Result<Response, WebError> {
    let window = Window::current(query.resolve());
    let leaderboard = services::get_leaderboard(db.pool(), &window).await?;

    Ok(Json(leaderboard).into_response())
}

#[utoipa::path(
    post,
    path = "/api/log_cardio",
    request_body(content = LogWorkoutForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Workout logged", body = SuccessResponse),
        (status = 400, description = "Missing field, malformed number or unknown activity"),
        (status = 401, description = "No authenticated user"),
        (status = 500, description = "Record could not be stored")
    ),
    tag = "record"
)]
pub async fn log_cardio(
    user: AuthenticatedUser,
    State(db): State<Database>,
    Form(form): Form<LogWorkoutForm>,
) -> Result<Response, WebError> {
    log_workout(user, &db, form, WorkoutKind::Cardio).await
}

#[utoipa::path(
    post,
    path = "/api/log_strength",
    request_body(content = LogWorkoutForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Workout logged", body = SuccessResponse),
        (status = 400, description = "Missing field, malformed number or unknown activity"),
        (status = 401, description = "No authenticated user"),
        (status = 500, description = "Record could not be stored")
    ),
    tag = "record"
)]
pub async fn log_strength(
    user: AuthenticatedUser,
    State(db): State<Database>,
    Form(form): Form<LogWorkoutForm>,
) -> Result<Response, WebError> {
    log_workout(user, &db, form, WorkoutKind::Strength).await
}

async fn log_workout(
    AuthenticatedUser(user_id): AuthenticatedUser,
    db: &Database,
    form: LogWorkoutForm,
    kind: WorkoutKind,
) -> Result<Response, WebError> {
    let command = form.parse(kind).map_err(WebError::BadRequest)?;

    let record = services::log_workout(db.pool(), user_id, command)
        .await
        .map_err(WebError::from_write)?;

    tracing::info!(
        %user_id,
        record_id = %record.record_id,
        kind = ?kind,
        duration_min = record.duration_min,
        "Workout logged"
    );

    Ok(Json(SuccessResponse::ok()).into_response())
}
