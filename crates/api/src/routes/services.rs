//! Route definitions for the public `/services` catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::services;
use crate::state::AppState;

/// Routes mounted at `/services`. No authentication; these back the public
/// marketing pages.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(services::list_services))
        .route("/{id}", get(services::get_service))
}
