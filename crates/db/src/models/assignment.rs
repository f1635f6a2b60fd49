//! Project team assignment model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskbridge_core::types::{DbId, Timestamp};

/// A row from the `project_assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub project_id: DbId,
    pub team_member_id: DbId,
    /// Role on this project, e.g. "Lead"; independent of the member's title.
    pub role: Option<String>,
    pub hours_per_week: Option<i32>,
    pub created_at: Timestamp,
}

/// An assignment joined with the team member's directory fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssignmentWithMember {
    pub id: DbId,
    pub project_id: DbId,
    pub team_member_id: DbId,
    pub role: Option<String>,
    pub hours_per_week: Option<i32>,
    pub member_name: String,
    pub member_title: String,
    pub member_available: bool,
}

/// One entry in a team replacement request.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignMember {
    pub team_member_id: DbId,
    pub role: Option<String>,
    pub hours_per_week: Option<i32>,
}
