use sqlx::PgPool;
use storage::{
    dto::social::PostResponse,
    error::Result,
    models::{Comment, Post},
    repository::social::{Reaction, SocialRepository},
};
use uuid::Uuid;

/// The whole feed, newest first; flags are false for anonymous viewers
pub async fn get_feed(pool: &PgPool, viewer: Option<Uuid>) -> Result<Vec<PostResponse>> {
    let repo = SocialRepository::new(pool);
    repo.feed(viewer).await
}

pub async fn get_bookmarked(pool: &PgPool, user_id: Uuid) -> Result<Vec<PostResponse>> {
    let repo = SocialRepository::new(pool);
    repo.bookmarked(user_id).await
}

pub async fn create_post(pool: &PgPool, user_id: Uuid, content: &str) -> Result<Post> {
    let repo = SocialRepository::new(pool);
    repo.create_post(user_id, content).await
}

pub async fn add_comment(pool: &PgPool, user_id: Uuid, post_id: Uuid, text: &str) -> Result<Comment> {
    let repo = SocialRepository::new(pool);
    repo.add_comment(user_id, post_id, text).await
}

/// Flip a like or bookmark, returning whether it is now set
pub async fn toggle_reaction(
    pool: &PgPool,
    reaction: Reaction,
    user_id: Uuid,
    post_id: Uuid,
) -> Result<bool> {
    let repo = SocialRepository::new(pool);
    repo.toggle(reaction, user_id, post_id).await
}
