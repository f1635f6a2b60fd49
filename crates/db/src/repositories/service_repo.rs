//! Repository for the `services` table (the public catalog).

use sqlx::PgPool;
use taskbridge_core::types::DbId;

use crate::models::service::Service;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, slug, description, category, pricing_model, base_price_cents, created_at";

/// Read operations for the service catalog. The catalog is seeded by
/// migration; there is no API-driven write path.
pub struct ServiceRepo;

impl ServiceRepo {
    /// List all services, alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY name ASC");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Find a service by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
