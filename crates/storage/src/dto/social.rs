use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreatePostRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 5000, message = "Content is required"))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 2000, message = "Comment text is required"))]
    pub text: String,
}

/// A post as shown in the feed, with counters and the viewer's own flags.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostResponse {
    pub id: Uuid,
    pub username: String,
    pub content: String,
    /// `YYYY-MM-DD HH:MM`
    pub timestamp: String,
    pub likes: i64,
    pub comments: Vec<CommentInfo>,
    pub bookmarks: i64,
    pub is_liked: bool,
    pub is_bookmarked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentInfo {
    pub username: String,
    pub text: String,
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ToggleResponse {
    pub success: bool,
    /// State after the toggle
    pub active: bool,
}
