//! Route definitions for the `/tasks` resource, including nested comments.

use axum::routing::get;
use axum::Router;

use crate::handlers::{comments, tasks};
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /                             -> list (own projects; managers see all)
/// POST   /                             -> create
/// GET    /{id}                         -> get with comment thread
/// PATCH  /{id}                         -> update (kanban moves)
/// DELETE /{id}                         -> delete (owner or manager)
/// GET    /{id}/comments                -> list comments
/// POST   /{id}/comments                -> add comment
/// DELETE /{id}/comments/{comment_id}   -> delete comment (author or manager)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/{id}",
            get(tasks::get_task)
                .patch(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route(
            "/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/{id}/comments/{comment_id}",
            axum::routing::delete(comments::delete_comment),
        )
}
