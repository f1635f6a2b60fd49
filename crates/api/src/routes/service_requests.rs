//! Route definitions for the `/service-requests` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::service_requests;
use crate::state::AppState;

/// Routes mounted at `/service-requests`.
///
/// ```text
/// GET    /       -> list (own; managers see all)
/// POST   /       -> create (pending)
/// GET    /{id}   -> get
/// PATCH  /{id}   -> review (manager; approval materializes a project)
/// DELETE /{id}   -> delete (blocked once approved)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(service_requests::list_requests).post(service_requests::create_request),
        )
        .route(
            "/{id}",
            get(service_requests::get_request)
                .patch(service_requests::review_request)
                .delete(service_requests::delete_request),
        )
}
