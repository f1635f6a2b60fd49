//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET   /           -> list (own; managers see all)
/// POST  /           -> create directly, or materialize via from_request_id
/// GET   /{id}       -> get
/// PATCH /{id}       -> update (credit changes manager-only)
/// GET   /{id}/team  -> list assignments
/// PUT   /{id}/team  -> replace assignments (manager)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/{id}",
            get(projects::get_project).patch(projects::update_project),
        )
        .route(
            "/{id}/team",
            get(projects::get_team).put(projects::replace_team),
        )
}
