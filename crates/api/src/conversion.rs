//! The request-to-project conversion workflow.
//!
//! Given an approved (or being-approved) service request, guarantee that
//! exactly one project exists for it. Both entry points -- the status-change
//! PATCH on a service request and the explicit materialize call on
//! `POST /projects` -- funnel through [`convert_request`] so there is a
//! single implementation of the idempotency contract.
//!
//! Idempotency is enforced at the storage layer: `projects` carries a unique
//! constraint on `service_request_id`, and the insert runs with
//! `ON CONFLICT DO NOTHING`. Creation itself is therefore the atomic check;
//! two concurrent conversions for the same request cannot both insert, and
//! the loser re-fetches and returns the winner's row.

use taskbridge_core::activity::{self, actions, entities};
use taskbridge_core::billing::TRIAL_CREDIT_CENTS;
use taskbridge_core::error::CoreError;
use taskbridge_core::rbac::Action;
use taskbridge_core::status::request_status;
use taskbridge_db::models::activity::NewActivity;
use taskbridge_db::models::project::{CreateProjectFromRequest, Project};
use taskbridge_db::repositories::{ActivityLogRepo, ProjectRepo, ServiceRequestRepo};
use taskbridge_db::DbPool;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;

/// Outcome of a conversion: the project, and whether this call created it.
///
/// The audit log records creation too, but callers that need to distinguish
/// "created" from "already existed" (e.g. to pick a 201 vs 200 status) read
/// the flag directly.
#[derive(Debug)]
pub struct Conversion {
    pub project: Project,
    pub created: bool,
}

/// Materialize a project from a service request, idempotently.
///
/// The principal must own the request or hold the manager role. On the
/// branch that actually creates a project, one
/// `project_created_from_request` activity entry is appended; the
/// idempotent-return branch writes nothing.
///
/// # Errors
///
/// - [`CoreError::NotFound`] if no request with `request_id` exists.
/// - [`CoreError::Forbidden`] if the principal neither owns the request nor
///   is a manager.
/// - [`AppError::BadRequest`] if the request is not in the `approved`
///   status.
/// - Database errors propagate as [`AppError::Database`].
pub async fn convert_request(
    pool: &DbPool,
    auth: &AuthUser,
    request_id: i64,
) -> Result<Conversion, AppError> {
    let request = ServiceRequestRepo::find_by_id(pool, request_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ServiceRequest",
            id: request_id,
        }))?;

    auth.authorize_record(request.user_id, Action::Update, entities::SERVICE_REQUEST)?;

    if request.status != request_status::APPROVED {
        return Err(AppError::BadRequest(
            "Only approved service requests can be converted".into(),
        ));
    }

    let input = CreateProjectFromRequest {
        user_id: request.user_id,
        name: request.title.clone(),
        description: Some(request.description.clone()),
        credit_balance_cents: request.budget_cents.unwrap_or(TRIAL_CREDIT_CENTS),
        service_id: request.service_id,
        service_request_id: request.id,
    };

    match ProjectRepo::create_from_request(pool, &input).await? {
        Some(project) => {
            tracing::info!(
                service_request_id = request.id,
                project_id = project.id,
                "Materialized project from service request"
            );

            ActivityLogRepo::append(
                pool,
                &NewActivity {
                    user_id: request.user_id,
                    action: actions::PROJECT_CREATED_FROM_REQUEST,
                    entity_type: entities::PROJECT,
                    entity_id: project.id,
                    metadata: activity::metadata(&activity::ProjectFromRequest {
                        service_request_id: request.id,
                        project_id: project.id,
                        name: &project.name,
                    }),
                },
            )
            .await?;

            Ok(Conversion {
                project,
                created: true,
            })
        }
        None => {
            // Another call (possibly concurrent) already materialized this
            // request; return its project unchanged.
            let project = ProjectRepo::find_by_service_request(pool, request.id)
                .await?
                .ok_or_else(|| {
                    AppError::InternalError(format!(
                        "Project for service request {} vanished after conflict",
                        request.id
                    ))
                })?;

            Ok(Conversion {
                project,
                created: false,
            })
        }
    }
}
