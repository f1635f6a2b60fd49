//! Repository for the `roles` table.

use sqlx::PgPool;
use taskbridge_core::types::DbId;

/// Lookup operations for roles. The role set is fixed by seed data; there
/// are no create/update operations.
pub struct RoleRepo;

impl RoleRepo {
    /// Resolve a role id to its name. Errors with `RowNotFound` if absent.
    pub async fn resolve_name(pool: &PgPool, role_id: DbId) -> Result<String, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT name FROM roles WHERE id = $1")
            .bind(role_id)
            .fetch_one(pool)
            .await
    }

    /// Look up a role id by name.
    pub async fn find_id_by_name(pool: &PgPool, name: &str) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT id FROM roles WHERE name = $1")
            .bind(name)
            .fetch_optional(pool)
            .await
    }
}
