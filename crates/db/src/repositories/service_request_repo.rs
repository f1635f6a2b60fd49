//! Repository for the `service_requests` table.

use sqlx::PgPool;
use taskbridge_core::types::DbId;

use crate::models::service_request::{CreateServiceRequest, ServiceRequest, UpdateServiceRequest};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, service_id, title, description, budget_cents, \
                        timeline, requirements, status, admin_notes, created_at, updated_at";

/// Provides CRUD operations for service requests.
pub struct ServiceRequestRepo;

impl ServiceRequestRepo {
    /// Insert a new request with status `pending`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateServiceRequest,
    ) -> Result<ServiceRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO service_requests
                (user_id, service_id, title, description, budget_cents, timeline, requirements)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceRequest>(&query)
            .bind(input.user_id)
            .bind(input.service_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.budget_cents)
            .bind(&input.timeline)
            .bind(&input.requirements)
            .fetch_one(pool)
            .await
    }

    /// Find a request by internal ID, regardless of owner.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ServiceRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_requests WHERE id = $1");
        sqlx::query_as::<_, ServiceRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's requests, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ServiceRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM service_requests WHERE user_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ServiceRequest>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List all requests across all users, most recent first. Manager view.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ServiceRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service_requests ORDER BY created_at DESC");
        sqlx::query_as::<_, ServiceRequest>(&query).fetch_all(pool).await
    }

    /// Update status/admin notes. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateServiceRequest,
    ) -> Result<Option<ServiceRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE service_requests SET
                status = COALESCE($2, status),
                admin_notes = COALESCE($3, admin_notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ServiceRequest>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(&input.admin_notes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a request by ID. Returns `true` if a row was removed.
    ///
    /// Callers are responsible for the status gate (no deleting approved
    /// requests); this is a plain row delete.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM service_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
