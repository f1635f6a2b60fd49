//! Repository for the `team_members` table.

use sqlx::PgPool;
use taskbridge_core::types::DbId;

use crate::models::team_member::{TeamMember, UpdateTeamMember};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, title, bio, skills, available, portfolio, created_at";

/// Operations for the team member directory.
pub struct TeamMemberRepo;

impl TeamMemberRepo {
    /// List all team members, available first, then alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM team_members ORDER BY available DESC, name ASC");
        sqlx::query_as::<_, TeamMember>(&query).fetch_all(pool).await
    }

    /// Find a team member by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team_members WHERE id = $1");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a member's profile. Returns `None` if no such member.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeamMember,
    ) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!(
            "UPDATE team_members SET
                title = COALESCE($2, title),
                bio = COALESCE($3, bio),
                skills = COALESCE($4, skills),
                available = COALESCE($5, available)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.bio)
            .bind(&input.skills)
            .bind(input.available)
            .fetch_optional(pool)
            .await
    }
}
