//! Role-gated extractors.
//!
//! Wrap [`AuthUser`] and reject requests whose role does not meet the
//! requirement, enforcing authorization at the type level in route
//! signatures.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use taskbridge_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `manager` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn manager_only(RequireManager(auth): RequireManager) -> AppResult<Json<()>> {
///     // auth is guaranteed to be a manager here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireManager(pub AuthUser);

impl FromRequestParts<AppState> for RequireManager {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state).await?;
        if !auth.is_manager() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Manager role required".into(),
            )));
        }
        Ok(RequireManager(auth))
    }
}
