//! Repository for the `project_assignments` table.

use sqlx::PgPool;
use taskbridge_core::types::DbId;

use crate::models::assignment::{AssignMember, AssignmentWithMember};

/// Provides team assignment operations for projects.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// List a project's assignments joined with team member details.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<AssignmentWithMember>, sqlx::Error> {
        sqlx::query_as::<_, AssignmentWithMember>(
            "SELECT a.id, a.project_id, a.team_member_id, a.role, a.hours_per_week,
                    m.name AS member_name, m.title AS member_title, m.available AS member_available
             FROM project_assignments a
             JOIN team_members m ON m.id = a.team_member_id
             WHERE a.project_id = $1
             ORDER BY m.name ASC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await
    }

    /// Replace a project's full assignment set in one transaction.
    ///
    /// Deletes existing assignments then inserts the new set, so the caller
    /// always ends up with exactly the members it sent.
    pub async fn replace_for_project(
        pool: &PgPool,
        project_id: DbId,
        members: &[AssignMember],
    ) -> Result<Vec<AssignmentWithMember>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM project_assignments WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        for member in members {
            sqlx::query(
                "INSERT INTO project_assignments (project_id, team_member_id, role, hours_per_week)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(project_id)
            .bind(member.team_member_id)
            .bind(&member.role)
            .bind(member.hours_per_week)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Self::list_for_project(pool, project_id).await
    }
}
