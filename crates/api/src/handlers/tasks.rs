//! Kanban task handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use taskbridge_core::activity::{self, actions, entities};
use taskbridge_core::error::CoreError;
use taskbridge_core::rbac::Action;
use taskbridge_core::status::task_status;
use taskbridge_core::types::DbId;
use taskbridge_db::models::activity::NewActivity;
use taskbridge_db::models::comment::CommentWithAuthor;
use taskbridge_db::models::project::Project;
use taskbridge_db::models::task::{CreateTask, Task, UpdateTask};
use taskbridge_db::repositories::{ActivityLogRepo, CommentRepo, ProjectRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Task detail: the row plus its comment thread.
#[derive(Debug, Serialize)]
pub struct TaskDetail {
    #[serde(flatten)]
    pub task: Task,
    pub comments: Vec<CommentWithAuthor>,
}

/// `GET /api/v1/tasks`
///
/// Managers see every task; everyone else sees tasks across their own
/// projects. Ordered for kanban rendering (column, then newest).
pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = if auth.is_manager() {
        TaskRepo::list_all(&state.pool).await?
    } else {
        TaskRepo::list_for_user(&state.pool, auth.user_id).await?
    };
    Ok(Json(tasks))
}

/// `POST /api/v1/tasks`
///
/// Creates a task on a project the caller owns or works on.
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    if body.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    if let Some(status) = &body.status {
        if !task_status::is_valid(status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid status: {status}"
            ))));
        }
    }

    let project = find_project(&state, body.project_id).await?;
    auth.authorize_record(project.user_id, Action::Create, entities::TASK)?;

    let task = TaskRepo::create(&state.pool, &body).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// `GET /api/v1/tasks/{id}`
///
/// Returns the task with its comment thread.
pub async fn get_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<TaskDetail>> {
    let (task, project) = find_task_with_project(&state, id).await?;
    auth.authorize_record(project.user_id, Action::Read, entities::TASK)?;

    let comments = CommentRepo::list_for_task(&state.pool, id).await?;
    Ok(Json(TaskDetail { task, comments }))
}

/// `PATCH /api/v1/tasks/{id}`
///
/// Partial update; kanban drag/drop lands here as a status-only patch.
/// Status changes are recorded in the activity log.
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(body): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    if let Some(status) = &body.status {
        if !task_status::is_valid(status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid status: {status}"
            ))));
        }
    }

    let (task, project) = find_task_with_project(&state, id).await?;
    auth.authorize_record(project.user_id, Action::Update, entities::TASK)?;

    let updated = TaskRepo::update(&state.pool, id, &body)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    if updated.status != task.status {
        ActivityLogRepo::append(
            &state.pool,
            &NewActivity {
                user_id: project.user_id,
                action: actions::TASK_UPDATED,
                entity_type: entities::TASK,
                entity_id: updated.id,
                metadata: activity::metadata(&activity::StatusChange {
                    old_status: &task.status,
                    new_status: &updated.status,
                    title: &updated.title,
                }),
            },
        )
        .await?;
    }

    Ok(Json(updated))
}

/// `DELETE /api/v1/tasks/{id}`
///
/// Owners and managers only; staff cannot delete.
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let (_, project) = find_task_with_project(&state, id).await?;
    auth.authorize_record(project.user_id, Action::Delete, entities::TASK)?;

    TaskRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn find_project(state: &AppState, id: DbId) -> Result<Project, AppError> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

/// Look up a task and its owning project, or 404.
pub(crate) async fn find_task_with_project(
    state: &AppState,
    id: DbId,
) -> Result<(Task, Project), AppError> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;

    let project = find_project(state, task.project_id).await?;
    Ok((task, project))
}
