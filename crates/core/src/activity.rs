//! Activity-log vocabulary and typed metadata payloads.
//!
//! The `activity_log` table is append-only. Every entry carries an action
//! tag, the entity it touched, and a JSONB metadata blob. Metadata is always
//! built from one of the typed structs below rather than ad-hoc JSON, so the
//! shapes written to storage are known at compile time.

use serde::Serialize;

use crate::types::DbId;

/// Known action tags for activity log entries.
pub mod actions {
    pub const SERVICE_REQUEST_CREATED: &str = "service_request_created";
    pub const SERVICE_REQUEST_UPDATED: &str = "service_request_updated";
    pub const SERVICE_REQUEST_DELETED: &str = "service_request_deleted";
    pub const PROJECT_CREATED: &str = "project_created";
    pub const PROJECT_CREATED_FROM_REQUEST: &str = "project_created_from_request";
    pub const TASK_UPDATED: &str = "task_updated";
    pub const TEAM_MEMBER_UPDATED: &str = "team_member_updated";
}

/// Known entity type tags for activity log entries.
pub mod entities {
    pub const SERVICE_REQUEST: &str = "service_request";
    pub const PROJECT: &str = "project";
    pub const TASK: &str = "task";
    pub const COMMENT: &str = "comment";
    pub const TEAM_MEMBER: &str = "team_member";
}

/// Metadata for a service-request creation entry.
#[derive(Debug, Serialize)]
pub struct RequestCreated<'a> {
    pub title: &'a str,
    pub service_id: Option<DbId>,
    pub budget_cents: Option<i64>,
}

/// Metadata for a status transition (service request or task).
#[derive(Debug, Serialize)]
pub struct StatusChange<'a> {
    pub old_status: &'a str,
    pub new_status: &'a str,
    pub title: &'a str,
}

/// Metadata for a service-request deletion entry.
#[derive(Debug, Serialize)]
pub struct RequestDeleted<'a> {
    pub title: &'a str,
    pub service_id: Option<DbId>,
}

/// Metadata for a directly-created project.
#[derive(Debug, Serialize)]
pub struct ProjectCreated<'a> {
    pub name: &'a str,
}

/// Metadata for a project materialized from an approved service request.
#[derive(Debug, Serialize)]
pub struct ProjectFromRequest<'a> {
    pub service_request_id: DbId,
    pub project_id: DbId,
    pub name: &'a str,
}

/// Metadata for a team member profile update.
#[derive(Debug, Serialize)]
pub struct TeamMemberUpdated<'a> {
    pub name: &'a str,
    pub available: Option<bool>,
}

/// Serialize a metadata struct to the JSONB value stored alongside the entry.
///
/// Serialization of these plain structs cannot fail; an error here would be a
/// programming bug, so it degrades to an empty object rather than panicking.
pub fn metadata<T: Serialize>(payload: &T) -> serde_json::Value {
    serde_json::to_value(payload).unwrap_or_else(|_| serde_json::json!({}))
}
