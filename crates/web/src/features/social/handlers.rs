use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        record::SuccessResponse,
        social::{CreateCommentRequest, CreatePostRequest, PostResponse, ToggleResponse},
    },
    repository::social::Reaction,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::{AuthenticatedUser, OptionalUser};

use super::services;

#[utoipa::path(
    get,
    path = "/api/posts",
    responses(
        (status = 200, description = "All posts, newest first", body = Vec<PostResponse>)
    ),
    tag = "social"
)]
pub async fn list_posts(
    OptionalUser(viewer): OptionalUser,
    State(db): State<Database>,
) -> Result<Response, WebError> {
    let posts = services::get_feed(db.pool(), viewer).await?;

    Ok(Json(posts).into_response())
}

#[utoipa::path(
    get,
    path = "/api/posts/bookmarked",
    responses(
        (status = 200, description = "Posts bookmarked by the acting user", body = Vec<PostResponse>),
        (status = 401, description = "No authenticated user")
    ),
    tag = "social"
)]
pub async fn list_bookmarked(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(db): State<Database>,
) -> Result<Response, WebError> {
    let posts = services::get_bookmarked(db.pool(), user_id).await?;

    Ok(Json(posts).into_response())
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post published", body = SuccessResponse),
        (status = 400, description = "Empty content"),
        (status = 401, description = "No authenticated user")
    ),
    tag = "social"
)]
pub async fn create_post(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(db): State<Database>,
    Json(req): Json<CreatePostRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let post = services::create_post(db.pool(), user_id, &req.content)
        .await
        .map_err(WebError::from_write)?;
    tracing::debug!(%user_id, post_id = %post.post_id, "Post published");

    Ok((StatusCode::CREATED, Json(SuccessResponse::ok())).into_response())
}

#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/comments",
    params(
        ("post_id" = Uuid, Path, description = "Post to comment on")
    ),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment added", body = SuccessResponse),
        (status = 400, description = "Empty comment"),
        (status = 401, description = "No authenticated user"),
        (status = 404, description = "Post not found")
    ),
    tag = "social"
)]
pub async fn add_comment(
    AuthenticatedUser(user_id): AuthenticatedUser,
    State(db): State<Database>,
    Path(post_id): Path<Uuid>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::add_comment(db.pool(), user_id, post_id, &req.text)
        .await
        .map_err(WebError::from_write)?;

    Ok((StatusCode::CREATED, Json(SuccessResponse::ok())).into_response())
}

#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/like",
    params(
        ("post_id" = Uuid, Path, description = "Post to like or unlike")
    ),
    responses(
        (status = 200, description = "Like toggled", body = ToggleResponse),
        (status = 401, description = "No authenticated user"),
        (status = 404, description = "Post not found")
    ),
    tag = "social"
)]
pub async fn toggle_like(
    user: AuthenticatedUser,
    State(db): State<Database>,
    Path(post_id): Path<Uuid>,
) -> Result<Response, WebError> {
    toggle(user, &db, post_id, Reaction::Like).await
}

#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/bookmark",
    params(
        ("post_id" = Uuid, Path, description = "Post to bookmark or unbookmark")
    ),
    responses(
        (status = 200, description = "Bookmark toggled", body = ToggleResponse),
        (status = 401, description = "No authenticated user"),
        (status = 404, description = "Post not found")
    ),
    tag = "social"
)]
pub async fn toggle_bookmark(
    user: AuthenticatedUser,
    State(db): State<Database>,
    Path(post_id): Path<Uuid>,
) -> Result<Response, WebError> {
    toggle(user, &db, post_id, Reaction::Bookmark).await
}

async fn toggle(
    AuthenticatedUser(user_id): AuthenticatedUser,
    db: &Database,
    post_id: Uuid,
    reaction: Reaction,
) -> Result<Response, WebError> {
    let active = services::toggle_reaction(db.pool(), reaction, user_id, post_id)
        .await
        .map_err(WebError::from_write)?;

    Ok(Json(ToggleResponse {
        success: true,
        active,
    })
    .into_response())
}
