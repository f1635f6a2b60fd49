//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskbridge_core::types::{DbId, Timestamp};

/// A task row from the `tasks` table.
///
/// `status` is the kanban column: `todo`, `in_progress`, `review`, `done`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `todo` if omitted.
    pub status: Option<String>,
    pub due_date: Option<Timestamp>,
}

/// DTO for updating an existing task. All fields are optional; `status`
/// updates are how kanban drag/drop moves are persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<Timestamp>,
}
