//! Service request entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use taskbridge_core::types::{DbId, Timestamp};

/// A service request row from the `service_requests` table.
///
/// `status` is one of `pending`, `approved`, `rejected` (see
/// `taskbridge_core::status::request_status`). `budget_cents` is optional;
/// conversion falls back to the trial credit when absent.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceRequest {
    pub id: DbId,
    pub user_id: DbId,
    pub service_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub budget_cents: Option<i64>,
    pub timeline: String,
    pub requirements: Option<String>,
    pub status: String,
    pub admin_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new service request. Status is always `pending`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceRequest {
    pub user_id: DbId,
    pub service_id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub budget_cents: Option<i64>,
    pub timeline: String,
    pub requirements: Option<String>,
}

/// DTO for updating a service request's status and admin notes.
/// Only non-`None` fields are applied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateServiceRequest {
    pub status: Option<String>,
    pub admin_notes: Option<String>,
}
