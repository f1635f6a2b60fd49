//! Route definitions for the `/team` directory.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Routes mounted at `/team`. The listing is unauthenticated and backs the
/// public about page; updates are staff-side maintenance.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(team::list_team))
        .route("/{id}", patch(team::update_team_member))
}
