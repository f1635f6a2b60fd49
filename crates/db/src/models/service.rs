//! Service catalog entity model.

use serde::Serialize;
use sqlx::FromRow;
use taskbridge_core::types::{DbId, Timestamp};

/// A service row from the `services` table.
///
/// `base_price_cents` is in minor currency units; `pricing_model` is one of
/// `project`, `retainer`, `per_minute` (CHECK-constrained).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub category: String,
    pub pricing_model: String,
    pub base_price_cents: i64,
    pub created_at: Timestamp,
}
