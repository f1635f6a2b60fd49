pub mod activity;
pub mod auth;
pub mod health;
pub mod projects;
pub mod service_requests;
pub mod services;
pub mod tasks;
pub mod team;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                             register (public)
/// /auth/login                              login (public)
/// /auth/refresh                            rotate refresh token (public)
/// /auth/logout                             revoke sessions (requires auth)
///
/// /services                                catalog list (public)
/// /services/{id}                           catalog detail (public)
///
/// /team                                    team directory (public)
/// /team/{id}                               update member (staff or manager)
///
/// /service-requests                        list, create
/// /service-requests/{id}                   get, review (manager), delete
///
/// /projects                                list, create / materialize
/// /projects/{id}                           get, update
/// /projects/{id}/team                      assignments: list, replace (manager)
///
/// /tasks                                   list, create
/// /tasks/{id}                              get (with comments), update, delete
/// /tasks/{id}/comments                     list, add
/// /tasks/{id}/comments/{comment_id}        delete (author or manager)
///
/// /activity                                caller's feed
/// /activity/all                            org-wide feed (manager only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/services", services::router())
        .nest("/team", team::router())
        .nest("/service-requests", service_requests::router())
        .nest("/projects", projects::router())
        .nest("/tasks", tasks::router())
        .nest("/activity", activity::router())
}
