//! Service request handlers, including the approval path that materializes
//! a project.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use taskbridge_core::activity::{self, actions, entities};
use taskbridge_core::error::CoreError;
use taskbridge_core::rbac::Action;
use taskbridge_core::status::request_status;
use taskbridge_core::types::DbId;
use taskbridge_db::models::activity::NewActivity;
use taskbridge_db::models::project::Project;
use taskbridge_db::models::service_request::{
    CreateServiceRequest, ServiceRequest, UpdateServiceRequest,
};
use taskbridge_db::repositories::{ActivityLogRepo, ServiceRequestRepo};
use validator::Validate;

use crate::conversion::convert_request;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireManager;
use crate::state::AppState;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRequestBody {
    pub service_id: Option<DbId>,
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description must not be empty"))]
    pub description: String,
    #[validate(range(min = 1, message = "Budget must be positive"))]
    pub budget_cents: Option<i64>,
    #[validate(length(min = 1, message = "Timeline must not be empty"))]
    pub timeline: String,
    pub requirements: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequestBody {
    pub status: Option<String>,
    pub admin_notes: Option<String>,
}

/// Review outcome. `project` is set when this review approved the request
/// and a project was materialized (or already existed) for it.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub request: ServiceRequest,
    pub project: Option<Project>,
}

/// `GET /api/v1/service-requests`
///
/// Managers see every request; everyone else sees their own.
pub async fn list_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Json<Vec<ServiceRequest>>> {
    let requests = if auth.is_manager() {
        ServiceRequestRepo::list_all(&state.pool).await?
    } else {
        ServiceRequestRepo::list_for_user(&state.pool, auth.user_id).await?
    };
    Ok(Json(requests))
}

/// `POST /api/v1/service-requests`
///
/// Creates a `pending` request owned by the caller and logs it.
pub async fn create_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<CreateRequestBody>,
) -> AppResult<(StatusCode, Json<ServiceRequest>)> {
    body.validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let request = ServiceRequestRepo::create(
        &state.pool,
        &CreateServiceRequest {
            user_id: auth.user_id,
            service_id: body.service_id,
            title: body.title.trim().to_string(),
            description: body.description,
            budget_cents: body.budget_cents,
            timeline: body.timeline,
            requirements: body.requirements,
        },
    )
    .await?;

    ActivityLogRepo::append(
        &state.pool,
        &NewActivity {
            user_id: auth.user_id,
            action: actions::SERVICE_REQUEST_CREATED,
            entity_type: entities::SERVICE_REQUEST,
            entity_id: request.id,
            metadata: activity::metadata(&activity::RequestCreated {
                title: &request.title,
                service_id: request.service_id,
                budget_cents: request.budget_cents,
            }),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// `GET /api/v1/service-requests/{id}`
pub async fn get_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<ServiceRequest>> {
    let request = find_request(&state, id).await?;
    auth.authorize_record(request.user_id, Action::Read, entities::SERVICE_REQUEST)?;
    Ok(Json(request))
}

/// `PATCH /api/v1/service-requests/{id}`
///
/// Manager review: set status and/or admin notes. Transitioning into
/// `approved` from any other status materializes a project for the request;
/// re-approving an already-approved request changes nothing and creates
/// nothing. Approved requests cannot move back to `pending` or `rejected`.
pub async fn review_request(
    State(state): State<AppState>,
    RequireManager(auth): RequireManager,
    Path(id): Path<DbId>,
    Json(body): Json<ReviewRequestBody>,
) -> AppResult<Json<ReviewResponse>> {
    if let Some(status) = &body.status {
        if !request_status::is_valid(status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Invalid status: {status}"
            ))));
        }
    }

    let existing = find_request(&state, id).await?;

    // Approval is terminal. A materialized project keeps its back-reference
    // to the request, so the request can never re-enter the deletable states.
    if existing.status == request_status::APPROVED {
        if let Some(status) = &body.status {
            if status != request_status::APPROVED {
                return Err(AppError::BadRequest(
                    "Approved requests cannot change status".into(),
                ));
            }
        }
    }

    let updated = ServiceRequestRepo::update(
        &state.pool,
        id,
        &UpdateServiceRequest {
            status: body.status.clone(),
            admin_notes: body.admin_notes,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "ServiceRequest",
        id,
    }))?;

    if updated.status != existing.status {
        ActivityLogRepo::append(
            &state.pool,
            &NewActivity {
                user_id: existing.user_id,
                action: actions::SERVICE_REQUEST_UPDATED,
                entity_type: entities::SERVICE_REQUEST,
                entity_id: updated.id,
                metadata: activity::metadata(&activity::StatusChange {
                    old_status: &existing.status,
                    new_status: &updated.status,
                    title: &updated.title,
                }),
            },
        )
        .await?;
    }

    let project = if updated.status == request_status::APPROVED
        && existing.status != request_status::APPROVED
    {
        Some(convert_request(&state.pool, &auth, id).await?.project)
    } else {
        None
    };

    Ok(Json(ReviewResponse {
        request: updated,
        project,
    }))
}

/// `DELETE /api/v1/service-requests/{id}`
///
/// Owners and managers may delete, but never an approved request; the
/// materialized project keeps its back-reference.
pub async fn delete_request(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let request = find_request(&state, id).await?;
    auth.authorize_record(request.user_id, Action::Delete, entities::SERVICE_REQUEST)?;

    if request.status == request_status::APPROVED {
        return Err(AppError::BadRequest(
            "Cannot delete approved service requests".into(),
        ));
    }

    ServiceRequestRepo::delete(&state.pool, id).await?;

    ActivityLogRepo::append(
        &state.pool,
        &NewActivity {
            user_id: request.user_id,
            action: actions::SERVICE_REQUEST_DELETED,
            entity_type: entities::SERVICE_REQUEST,
            entity_id: request.id,
            metadata: activity::metadata(&activity::RequestDeleted {
                title: &request.title,
                service_id: request.service_id,
            }),
        },
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn find_request(state: &AppState, id: DbId) -> Result<ServiceRequest, AppError> {
    ServiceRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ServiceRequest",
            id,
        }))
}
