//! Project handlers: listing, direct creation, materialization from a
//! service request, updates, and team assignment.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskbridge_core::activity::{self, actions, entities};
use taskbridge_core::error::CoreError;
use taskbridge_core::rbac::{self, resources, Action};
use taskbridge_core::status::project_status;
use taskbridge_core::types::DbId;
use taskbridge_db::models::activity::NewActivity;
use taskbridge_db::models::assignment::{AssignMember, AssignmentWithMember};
use taskbridge_db::models::project::{CreateProject, Project, UpdateProject};
use taskbridge_db::repositories::{ActivityLogRepo, AssignmentRepo, ProjectRepo};

use crate::conversion::convert_request;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::state::AppState;

/// Body for `POST /projects`. Either `from_request_id` (materialize from an
/// approved service request) or `name` (direct creation) must be present.
#[derive(Debug, Deserialize)]
pub struct CreateProjectBody {
    pub from_request_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub credit_balance_cents: Option<i64>,
    pub service_id: Option<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceTeamBody {
    pub members: Vec<AssignMember>,
}

/// `GET /api/v1/projects`
///
/// Managers see every project; everyone else sees their own.
pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<Project>>> {
    let projects = if auth.is_manager() {
        ProjectRepo::list_all(&state.pool).await?
    } else {
        ProjectRepo::list_for_user(&state.pool, auth.user_id).await?
    };
    Ok(Json(projects))
}

/// `POST /api/v1/projects`
///
/// With `from_request_id`, materializes the project for that service
/// request: 201 when this call created it, 200 when it already existed.
/// Without it, creates a project directly for the caller (201). Setting a
/// non-default starting credit is manager-only.
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateProjectBody>,
) -> AppResult<(StatusCode, Json<Project>)> {
    if let Some(request_id) = body.from_request_id {
        let outcome = convert_request(&state.pool, &auth, request_id).await?;
        let status = if outcome.created {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };
        return Ok((status, Json(outcome.project)));
    }

    let name = body
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Either from_request_id or name is required".into(),
            ))
        })?;

    if let Some(status) = &body.status {
        if !project_status::is_valid(status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid status: {status}"
            ))));
        }
    }

    if body.credit_balance_cents.is_some()
        && !rbac::can(&auth.role, Action::Create, resources::BILLING)
    {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only managers may set a starting credit balance".into(),
        )));
    }

    let project = ProjectRepo::create(
        &state.pool,
        &CreateProject {
            user_id: auth.user_id,
            name: name.to_string(),
            description: body.description,
            status: body.status,
            credit_balance_cents: body.credit_balance_cents,
            service_id: body.service_id,
        },
    )
    .await?;

    ActivityLogRepo::append(
        &state.pool,
        &NewActivity {
            user_id: auth.user_id,
            action: actions::PROJECT_CREATED,
            entity_type: entities::PROJECT,
            entity_id: project.id,
            metadata: activity::metadata(&activity::ProjectCreated {
                name: &project.name,
            }),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(project)))
}

/// `GET /api/v1/projects/{id}`
pub async fn get_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = find_project(&state, id).await?;
    auth.authorize_record(project.user_id, Action::Read, entities::PROJECT)?;
    Ok(Json(project))
}

/// `PATCH /api/v1/projects/{id}`
///
/// Owners, staff, and managers may edit; credit balance changes are
/// manager-only regardless of ownership.
pub async fn update_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = find_project(&state, id).await?;
    auth.authorize_record(project.user_id, Action::Update, entities::PROJECT)?;

    if body.credit_balance_cents.is_some()
        && !rbac::can(&auth.role, Action::Update, resources::BILLING)
    {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only managers may adjust credit balances".into(),
        )));
    }

    if let Some(status) = &body.status {
        if !project_status::is_valid(status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid status: {status}"
            ))));
        }
    }

    let updated = ProjectRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    Ok(Json(updated))
}

/// `GET /api/v1/projects/{id}/team`
pub async fn get_team(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<AssignmentWithMember>>> {
    let project = find_project(&state, id).await?;
    auth.authorize_record(project.user_id, Action::Read, entities::PROJECT)?;

    let assignments = AssignmentRepo::list_for_project(&state.pool, id).await?;
    Ok(Json(assignments))
}

/// `PUT /api/v1/projects/{id}/team`
///
/// Replaces the project's full assignment set. Manager only.
pub async fn replace_team(
    State(state): State<AppState>,
    RequireManager(_auth): RequireManager,
    Path(id): Path<DbId>,
    Json(body): Json<ReplaceTeamBody>,
) -> AppResult<Json<Vec<AssignmentWithMember>>> {
    find_project(&state, id).await?;

    let assignments = AssignmentRepo::replace_for_project(&state.pool, id, &body.members).await?;
    Ok(Json(assignments))
}

async fn find_project(state: &AppState, id: DbId) -> Result<Project, AppError> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}
