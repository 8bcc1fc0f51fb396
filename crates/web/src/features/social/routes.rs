use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    add_comment, create_post, list_bookmarked, list_posts, toggle_bookmark, toggle_like,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/posts", get(list_posts).post(create_post))
        .route("/posts/bookmarked", get(list_bookmarked))
        .route("/posts/:post_id/comments", post(add_comment))
        .route("/posts/:post_id/like", post(toggle_like))
        .route("/posts/:post_id/bookmark", post(toggle_bookmark))
}
