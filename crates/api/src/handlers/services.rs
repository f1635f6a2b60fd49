//! Public service catalog handlers.

use axum::extract::{Path, State};
use axum::Json;
use taskbridge_core::error::CoreError;
use taskbridge_core::types::DbId;
use taskbridge_db::models::service::Service;
use taskbridge_db::repositories::ServiceRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// `GET /api/v1/services`
///
/// Unauthenticated; the catalog backs the public marketing pages.
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = ServiceRepo::list(&state.pool).await?;
    Ok(Json(services))
}

/// `GET /api/v1/services/{id}`
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Service>> {
    let service = ServiceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Service",
            id,
        }))?;
    Ok(Json(service))
}
