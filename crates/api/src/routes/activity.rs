//! Route definitions for the `/activity` feed.

use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activity`.
///
/// ```text
/// GET /     -> the caller's feed
/// GET /all  -> organization-wide feed (manager only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(activity::list_activity))
        .route("/all", get(activity::list_all_activity))
}
