//! Task comment handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use taskbridge_core::activity::entities;
use taskbridge_core::error::CoreError;
use taskbridge_core::rbac::Action;
use taskbridge_core::types::DbId;
use taskbridge_db::models::comment::{Comment, CommentWithAuthor, CreateComment};
use taskbridge_db::repositories::CommentRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::tasks::find_task_with_project;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCommentBody {
    pub content: String,
}

/// `GET /api/v1/tasks/{id}/comments`
pub async fn list_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<Vec<CommentWithAuthor>>> {
    let (_, project) = find_task_with_project(&state, task_id).await?;
    auth.authorize_record(project.user_id, Action::Read, entities::COMMENT)?;

    let comments = CommentRepo::list_for_task(&state.pool, task_id).await?;
    Ok(Json(comments))
}

/// `POST /api/v1/tasks/{id}/comments`
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(task_id): Path<DbId>,
    Json(body): Json<CreateCommentBody>,
) -> AppResult<(StatusCode, Json<Comment>)> {
    let content = body.content.trim();
    if content.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Comment must not be empty".into(),
        )));
    }

    let (_, project) = find_task_with_project(&state, task_id).await?;
    auth.authorize_record(project.user_id, Action::Create, entities::COMMENT)?;

    let comment = CommentRepo::create(
        &state.pool,
        &CreateComment {
            task_id,
            user_id: auth.user_id,
            content: content.to_string(),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// `DELETE /api/v1/tasks/{id}/comments/{comment_id}`
///
/// Authors delete their own comments; managers may delete any.
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((task_id, comment_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let comment = CommentRepo::find_by_id(&state.pool, comment_id)
        .await?
        .filter(|c| c.task_id == task_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id: comment_id,
        }))?;

    if comment.user_id != auth.user_id && !auth.is_manager() {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the author or a manager may delete a comment".into(),
        )));
    }

    CommentRepo::delete(&state.pool, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
