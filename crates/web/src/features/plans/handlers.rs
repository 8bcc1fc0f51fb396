use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        plan::{CreatePlanRequest, PlanResponse},
        record::SuccessResponse,
    },
};

use crate::error::WebError;
use crate::middleware::auth::AuthenticatedUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/my_plan",
    responses(
        (status = 200, description = "Workout plans of the acting user", body = Vec<PlanResponse>),
        (status = 401, description = "No authenticated user")
    ),
    tag = "plans"
)]
pub async fn list_plans(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(db): State<Database>,
) -> Result<Response, WebError> {
    let plans = services::list_plans(db.pool(), user_id).await?;

    let response: Vec<PlanResponse> = plans.into_iter().map(PlanResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/my_plan",
    request_body = CreatePlanRequest,
    responses(
        (status = 200, description = "Plan saved", body = SuccessResponse),
        (status = 400, description = "Missing fields or malformed time"),
        (status = 401, description = "No authenticated user"),
        (status = 500, description = "Plan could not be stored")
    ),
    tag = "plans"
)]
pub async fn create_plan(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(db): State<Database>,
    Json(req): Json<CreatePlanRequest>,
) -> Result<Response, WebError> {
    let plan = req.parse().map_err(WebError::BadRequest)?;

    let saved = services::create_plan(db.pool(), user_id, &plan)
        .await
        .map_err(WebError::from_write)?;
    tracing::info!(%user_id, plan_id = %saved.plan_id, activity = %saved.activity, "Plan saved");

    Ok(Json(SuccessResponse::ok()).into_response())
}
