use std::collections::HashMap;

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool, QueryBuilder};
use uuid::Uuid;

use crate::dto::social::{CommentInfo, PostResponse, format_timestamp};
use crate::error::{Result, StorageError};
use crate::models::{Comment, Post};

#[derive(FromRow)]
struct FeedRow {
    post_id: Uuid,
    username: String,
    content: String,
    created_at: NaiveDateTime,
    likes: i64,
    bookmarks: i64,
    is_liked: bool,
    is_bookmarked: bool,
}

#[derive(FromRow)]
struct CommentRow {
    post_id: Uuid,
    username: String,
    content: String,
}

/// Per-user toggles on a post, each stored in its own join table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Bookmark,
}

impl Reaction {
    fn table(&self) -> &'static str {
        match self {
            Self::Like => "likes",
            Self::Bookmark => "bookmarks",
        }
    }
}

pub struct SocialRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SocialRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All posts, newest first. `viewer` drives the `is_liked`/`is_bookmarked` flags.
    pub async fn feed(&self, viewer: Option<Uuid>) -> Result<Vec<PostResponse>> {
        let mut query = Self::feed_query(viewer);
        query.push(" ORDER BY p.created_at DESC");

        let rows: Vec<FeedRow> = query.build_query_as().fetch_all(self.pool).await?;
        self.attach_comments(rows).await
    }

    /// Posts the user bookmarked, in bookmarking order.
    pub async fn bookmarked(&self, user_id: Uuid) -> Result<Vec<PostResponse>> {
        let mut query = Self::feed_query(Some(user_id));
        query.push(" AND EXISTS (SELECT 1 FROM bookmarks mb WHERE mb.post_id = p.post_id AND mb.user_id = ");
        query.push_bind(user_id);
        query.push(
            ") ORDER BY (SELECT mb.created_at FROM bookmarks mb WHERE mb.post_id = p.post_id AND mb.user_id = ",
        );
        query.push_bind(user_id);
        query.push(")");

        let rows: Vec<FeedRow> = query.build_query_as().fetch_all(self.pool).await?;
        self.attach_comments(rows).await
    }

    fn feed_query(viewer: Option<Uuid>) -> QueryBuilder<'static, sqlx::Postgres> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT
                p.post_id,
                u.username,
                p.content,
                p.created_at,
                (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.post_id) AS likes,
                (SELECT COUNT(*) FROM bookmarks b WHERE b.post_id = p.post_id) AS bookmarks,
                EXISTS (SELECT 1 FROM likes l WHERE l.post_id = p.post_id AND l.user_id = "#,
        );
        query.push_bind(viewer);
        query.push(
            r#") AS is_liked,
                EXISTS (SELECT 1 FROM bookmarks b WHERE b.post_id = p.post_id AND b.user_id = "#,
        );
        query.push_bind(viewer);
        query.push(
            r#") AS is_bookmarked
            FROM posts p
            INNER JOIN users u ON u.user_id = p.user_id
            WHERE 1=1
            "#,
        );
        query
    }

    async fn attach_comments(&self, rows: Vec<FeedRow>) -> Result<Vec<PostResponse>> {
        let post_ids: Vec<Uuid> = rows.iter().map(|row| row.post_id).collect();
        let mut comments = self.comments_for(&post_ids).await?;

        let posts = rows
            .into_iter()
            .map(|row| PostResponse {
                id: row.post_id,
                username: row.username,
                content: row.content,
                timestamp: format_timestamp(row.created_at),
                likes: row.likes,
                comments: comments.remove(&row.post_id).unwrap_or_default(),
                bookmarks: row.bookmarks,
                is_liked: row.is_liked,
                is_bookmarked: row.is_bookmarked,
            })
            .collect();

        Ok(posts)
    }

    async fn comments_for(&self, post_ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<CommentInfo>>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT c.post_id, u.username, c.content
            FROM comments c
            INNER JOIN users u ON u.user_id = c.user_id
            WHERE c.post_id = ANY($1)
            ORDER BY c.created_at, c.comment_id
            "#,
        )
        .bind(post_ids)
        .fetch_all(self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<CommentInfo>> = HashMap::new();
        for row in rows {
            grouped.entry(row.post_id).or_default().push(CommentInfo {
                username: row.username,
                text: row.content,
            });
        }

        Ok(grouped)
    }

    pub async fn create_post(&self, user_id: Uuid, content: &str) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (user_id, content)
            VALUES ($1, $2)
            RETURNING post_id, user_id, content, created_at
            "#,
        )
        .bind(user_id)
        .bind(content)
        .fetch_one(self.pool)
        .await
        .map_err(not_found_on_missing_parent)?;

        Ok(post)
    }

    pub async fn add_comment(&self, user_id: Uuid, post_id: Uuid, text: &str) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (user_id, post_id, content)
            VALUES ($1, $2, $3)
            RETURNING comment_id, user_id, post_id, content, created_at
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .bind(text)
        .fetch_one(self.pool)
        .await
        .map_err(not_found_on_missing_parent)?;

        Ok(comment)
    }

    /// Removes the reaction if present, adds it otherwise. Returns whether it is now set.
    pub async fn toggle(
        &self,
        reaction: Reaction,
        user_id: Uuid,
        post_id: Uuid,
    ) -> Result<bool> {
        let table = reaction.table();
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query(&format!(
            "DELETE FROM {table} WHERE user_id = $1 AND post_id = $2"
        ))
        .bind(user_id)
        .bind(post_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if removed == 0 {
            sqlx::query(&format!(
                "INSERT INTO {table} (user_id, post_id) VALUES ($1, $2)"
            ))
            .bind(user_id)
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(not_found_on_missing_parent)?;
        }

        tx.commit().await?;

        Ok(removed == 0)
    }
}

fn not_found_on_missing_parent(error: sqlx::Error) -> StorageError {
    let error = StorageError::from(error);
    if error.is_foreign_key_violation() {
        StorageError::NotFound
    } else {
        error
    }
}
