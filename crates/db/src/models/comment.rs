//! Task comment entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use taskbridge_core::types::{DbId, Timestamp};

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub task_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
}

/// A comment joined with its author's public fields, for task detail views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CommentWithAuthor {
    pub id: DbId,
    pub task_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub author_name: String,
    pub author_email: String,
}

/// DTO for creating a comment.
pub struct CreateComment {
    pub task_id: DbId,
    pub user_id: DbId,
    pub content: String,
}
