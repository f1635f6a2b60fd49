//! Activity log entry model and DTO.

use serde::Serialize;
use sqlx::FromRow;
use taskbridge_core::types::{DbId, Timestamp};

/// An append-only row from the `activity_log` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActivityEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub action: String,
    pub entity_type: String,
    pub entity_id: DbId,
    pub metadata: serde_json::Value,
    pub created_at: Timestamp,
}

/// DTO for appending an activity entry. Metadata should be built via
/// `taskbridge_core::activity::metadata` from a typed payload struct.
pub struct NewActivity {
    pub user_id: DbId,
    pub action: &'static str,
    pub entity_type: &'static str,
    pub entity_id: DbId,
    pub metadata: serde_json::Value,
}
