use sqlx::PgPool;
use storage::{
    dto::user::{CreateUserRequest, UpdateAccountRequest},
    error::Result,
    models::User,
    repository::user::UserRepository,
};
use uuid::Uuid;

/// Get the profile of the acting user
pub async fn get_account(pool: &PgPool, user_id: Uuid) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.find_by_id(user_id).await
}

/// Update nickname and address, keeping current values for empty fields
pub async fn update_account(
    pool: &PgPool,
    user_id: Uuid,
    request: &UpdateAccountRequest,
) -> Result<User> {
    let repo = UserRepository::new(pool);

    let existing = repo.find_by_id(user_id).await?;
    let (nickname, address) = request.merged_with(&existing);
    repo.update_profile(user_id, &nickname, &address).await
}

/// Add a user to the roster
pub async fn create_user(pool: &PgPool, request: &CreateUserRequest) -> Result<User> {
    let repo = UserRepository::new(pool);
    repo.create(request).await
}
