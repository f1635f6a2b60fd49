//! Team member entity model.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use taskbridge_core::types::{DbId, Timestamp};

/// One portfolio entry. Stored in JSONB but always with this shape; never
/// written as free-form JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    pub url: String,
}

/// Partial update for a team member profile. `None` fields keep their
/// current value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTeamMember {
    pub title: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub available: Option<bool>,
}

/// A team member row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    /// Job title, e.g. "Senior Developer".
    pub title: String,
    pub bio: String,
    /// Comma-separated skill list, as displayed.
    pub skills: String,
    pub available: bool,
    pub portfolio: Json<Vec<PortfolioItem>>,
    pub created_at: Timestamp,
}
