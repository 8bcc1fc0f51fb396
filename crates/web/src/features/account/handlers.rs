use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        record::SuccessResponse,
        user::{AccountInfoResponse, CreateUserRequest, UpdateAccountRequest, UserResponse},
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::AuthenticatedUser;

use super::services;

#[utoipa::path(
    get,
    path = "/api/account/info",
    responses(
        (status = 200, description = "Profile of the acting user", body = AccountInfoResponse),
        (status = 401, description = "No authenticated user"),
        (status = 404, description = "User not found")
    ),
    tag = "account"
)]
pub async fn get_account_info(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(db): State<Database>,
) -> Result<Response, WebError> {
    let user = services::get_account(db.pool(), user_id).await?;

    Ok(Json(AccountInfoResponse::from(user)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/account/edit",
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Profile updated", body = SuccessResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "No authenticated user"),
        (status = 404, description = "User not found")
    ),
    tag = "account"
)]
pub async fn edit_account(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(db): State<Database>,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::update_account(db.pool(), user_id, &req)
        .await
        .map_err(WebError::from_write)?;
    tracing::debug!(%user_id, "Account updated");

    Ok(Json(SuccessResponse::ok()).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body = CreateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "User added to the roster", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Username or email already exists")
    ),
    tag = "admin"
)]
pub async fn create_user(
    State(db): State<Database>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let user = services::create_user(db.pool(), &req).await?;
    tracing::info!(user_id = %user.user_id, username = %user.username, "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))).into_response())
}
