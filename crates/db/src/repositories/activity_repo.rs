//! Repository for the append-only `activity_log` table.

use sqlx::PgPool;
use taskbridge_core::types::DbId;

use crate::models::activity::{ActivityEntry, NewActivity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, action, entity_type, entity_id, metadata, created_at";

/// Append and query operations for the activity log. Entries are never
/// updated or deleted.
pub struct ActivityLogRepo;

impl ActivityLogRepo {
    /// Append one entry, returning the created row.
    pub async fn append(pool: &PgPool, input: &NewActivity) -> Result<ActivityEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO activity_log (user_id, action, entity_type, entity_id, metadata)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActivityEntry>(&query)
            .bind(input.user_id)
            .bind(input.action)
            .bind(input.entity_type)
            .bind(input.entity_id)
            .bind(&input.metadata)
            .fetch_one(pool)
            .await
    }

    /// List a user's entries, most recent first, with pagination.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ActivityEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activity_log
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, ActivityEntry>(&query)
            .bind(user_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// List entries across all users, most recent first. Manager view.
    pub async fn list_all(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ActivityEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activity_log
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, ActivityEntry>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count entries with a given action for one entity. Used to assert the
    /// at-most-one-creation-entry guarantee of the conversion workflow.
    pub async fn count_for_entity(
        pool: &PgPool,
        action: &str,
        entity_type: &str,
        entity_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM activity_log
             WHERE action = $1 AND entity_type = $2 AND entity_id = $3",
        )
        .bind(action)
        .bind(entity_type)
        .bind(entity_id)
        .fetch_one(pool)
        .await
    }
}
