//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskbridge_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
///
/// `credit_balance_cents` is the remaining billable credit in minor currency
/// units. `service_request_id` back-references the service request this
/// project was materialized from; a unique constraint
/// (`uq_projects_service_request`) guarantees at most one project per
/// request.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub credit_balance_cents: i64,
    pub service_id: Option<DbId>,
    pub service_request_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a project directly (not via conversion).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `active` if omitted.
    pub status: Option<String>,
    /// Defaults to the trial credit if omitted.
    pub credit_balance_cents: Option<i64>,
    pub service_id: Option<DbId>,
}

/// Insert payload for materializing a project from a service request.
///
/// Separate from [`CreateProject`] because conversion always sets the
/// back-reference and never defaults the credit balance here; the caller
/// resolves the budget-or-trial fallback first.
#[derive(Debug, Clone)]
pub struct CreateProjectFromRequest {
    pub user_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub credit_balance_cents: i64,
    pub service_id: Option<DbId>,
    pub service_request_id: DbId,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub credit_balance_cents: Option<i64>,
}
