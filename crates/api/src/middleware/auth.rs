//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use taskbridge_core::error::CoreError;
use taskbridge_core::rbac::{self, Action};
use taskbridge_core::roles::ROLE_MANAGER;
use taskbridge_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated principal extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = auth.user_id, role = %auth.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's role name (e.g. `"manager"`, `"staff"`, `"client"`).
    pub role: String,
}

impl AuthUser {
    /// Whether this principal holds the elevated role.
    pub fn is_manager(&self) -> bool {
        self.role == ROLE_MANAGER
    }

    /// Authorize an action against a record owned by `owner_id`.
    ///
    /// Ownership grants the action; otherwise the role-wide capability
    /// check (`taskbridge_core::rbac::can`) decides. This is the single
    /// path through which handlers make per-record authorization
    /// decisions.
    pub fn authorize_record(
        &self,
        owner_id: DbId,
        action: Action,
        resource: &str,
    ) -> Result<(), AppError> {
        if self.user_id == owner_id || rbac::can(&self.role, action, resource) {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(
                "You do not have access to this resource".into(),
            )))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}
