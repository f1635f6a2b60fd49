//! Repository for the `projects` table.

use sqlx::PgPool;
use taskbridge_core::types::DbId;

use crate::models::project::{CreateProject, CreateProjectFromRequest, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, description, status, credit_balance_cents, \
                        service_id, service_request_id, created_at, updated_at";

/// Provides CRUD operations for projects, plus the atomic
/// materialize-from-request insert used by the conversion workflow.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a directly-created project, returning the created row.
    ///
    /// Defaults: status `active`, credit balance 30000 (trial credit).
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (user_id, name, description, status, credit_balance_cents, service_id)
             VALUES ($1, $2, $3, COALESCE($4, 'active'), COALESCE($5, 30000), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.credit_balance_cents)
            .bind(input.service_id)
            .fetch_one(pool)
            .await
    }

    /// Atomically materialize a project from a service request.
    ///
    /// Relies on the `uq_projects_service_request` unique constraint:
    /// `ON CONFLICT DO NOTHING` makes the insert itself the idempotency
    /// check. Returns `Some(project)` when this call created the row, or
    /// `None` when a project for the request already existed (possibly
    /// created by a concurrent call); callers then re-fetch via
    /// [`ProjectRepo::find_by_service_request`].
    pub async fn create_from_request(
        pool: &PgPool,
        input: &CreateProjectFromRequest,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (user_id, name, description, status, credit_balance_cents, service_id, service_request_id)
             VALUES ($1, $2, $3, 'active', $4, $5, $6)
             ON CONFLICT (service_request_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.credit_balance_cents)
            .bind(input.service_id)
            .bind(input.service_request_id)
            .fetch_optional(pool)
            .await
    }

    /// Find the project materialized from a given service request, if any.
    pub async fn find_by_service_request(
        pool: &PgPool,
        service_request_id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE service_request_id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(service_request_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a project by internal ID, regardless of owner.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's projects, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all projects across all users, most recent first. Manager view.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                credit_balance_cents = COALESCE($5, credit_balance_cents),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.status)
            .bind(input.credit_balance_cents)
            .fetch_optional(pool)
            .await
    }
}
