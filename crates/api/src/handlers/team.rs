//! Team member directory handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use taskbridge_core::activity::{self, actions, entities};
use taskbridge_core::error::CoreError;
use taskbridge_core::rbac::{self, Action};
use taskbridge_core::types::DbId;
use taskbridge_db::models::activity::NewActivity;
use taskbridge_db::models::team_member::{TeamMember, UpdateTeamMember};
use taskbridge_db::repositories::{ActivityLogRepo, TeamMemberRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateTeamMemberBody {
    pub title: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub available: Option<bool>,
}

/// `GET /api/v1/team`
///
/// Unauthenticated directory listing, available members first.
pub async fn list_team(State(state): State<AppState>) -> AppResult<Json<Vec<TeamMember>>> {
    let members = TeamMemberRepo::list(&state.pool).await?;
    Ok(Json(members))
}

/// `PATCH /api/v1/team/{id}`
///
/// Staff and managers maintain the directory: availability toggles, bio and
/// skills edits. Clients get 403.
pub async fn update_team_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateTeamMemberBody>,
) -> AppResult<Json<TeamMember>> {
    if !rbac::can(&auth.role, Action::Update, entities::TEAM_MEMBER) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Not allowed to update team members".into(),
        )));
    }

    let member = TeamMemberRepo::update(
        &state.pool,
        id,
        &UpdateTeamMember {
            title: body.title,
            bio: body.bio,
            skills: body.skills,
            available: body.available,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "TeamMember",
        id,
    }))?;

    ActivityLogRepo::append(
        &state.pool,
        &NewActivity {
            user_id: auth.user_id,
            action: actions::TEAM_MEMBER_UPDATED,
            entity_type: entities::TEAM_MEMBER,
            entity_id: member.id,
            metadata: activity::metadata(&activity::TeamMemberUpdated {
                name: &member.name,
                available: body.available,
            }),
        },
    )
    .await?;

    Ok(Json(member))
}
