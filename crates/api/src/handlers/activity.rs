//! Activity feed handlers.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use taskbridge_db::models::activity::ActivityEntry;
use taskbridge_db::repositories::ActivityLogRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::state::AppState;

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl FeedParams {
    fn page(&self) -> (i64, i64) {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = self.offset.unwrap_or(0).max(0);
        (limit, offset)
    }
}

/// `GET /api/v1/activity`
///
/// The caller's own feed, newest first.
pub async fn list_activity(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<FeedParams>,
) -> AppResult<Json<Vec<ActivityEntry>>> {
    let (limit, offset) = params.page();
    let entries = ActivityLogRepo::list_for_user(&state.pool, auth.user_id, limit, offset).await?;
    Ok(Json(entries))
}

/// `GET /api/v1/activity/all`
///
/// The organization-wide feed. Manager only.
pub async fn list_all_activity(
    State(state): State<AppState>,
    RequireManager(_auth): RequireManager,
    Query(params): Query<FeedParams>,
) -> AppResult<Json<Vec<ActivityEntry>>> {
    let (limit, offset) = params.page();
    let entries = ActivityLogRepo::list_all(&state.pool, limit, offset).await?;
    Ok(Json(entries))
}
