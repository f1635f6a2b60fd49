//! Repository for the `comments` table.

use sqlx::PgPool;
use taskbridge_core::types::DbId;

use crate::models::comment::{Comment, CommentWithAuthor, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task_id, user_id, content, created_at";

/// Provides CRUD operations for task comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (task_id, user_id, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.task_id)
            .bind(input.user_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a task's comments with author names, most recent first.
    pub async fn list_for_task(
        pool: &PgPool,
        task_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, CommentWithAuthor>(
            "SELECT c.id, c.task_id, c.user_id, c.content, c.created_at,
                    u.name AS author_name, u.email AS author_email
             FROM comments c
             JOIN users u ON u.id = c.user_id
             WHERE c.task_id = $1
             ORDER BY c.created_at DESC",
        )
        .bind(task_id)
        .fetch_all(pool)
        .await
    }

    /// Delete a comment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
