//! Authentication handlers: signup, login, token refresh, logout.

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use taskbridge_core::billing::TRIAL_CREDIT_CENTS;
use taskbridge_core::error::CoreError;
use taskbridge_core::roles::ROLE_CLIENT;
use taskbridge_db::models::project::CreateProject;
use taskbridge_db::models::session::CreateSession;
use taskbridge_db::models::user::{CreateUser, User, UserResponse};
use taskbridge_db::repositories::{ProjectRepo, RoleRepo, SessionRepo, UserRepo};
use validator::Validate;

use crate::auth::jwt::{generate_access_token, generate_refresh_token, hash_refresh_token};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Consecutive failed logins before the account is temporarily locked.
const MAX_FAILED_ATTEMPTS: i32 = 5;
/// Lockout duration after too many failed attempts.
const LOCK_DURATION_MINS: i64 = 15;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Optional company name, used to title the trial project.
    pub company: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
pub struct LogoutRequest {
    /// When present, only the matching session is revoked; otherwise all of
    /// the caller's sessions are.
    pub refresh_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// `POST /api/v1/auth/signup`
///
/// Creates a client-role account and seeds it with a trial project carrying
/// the starter credit, then returns a token pair. Duplicate emails are
/// rejected with 409.
pub async fn signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    body.validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let email = body.email.trim().to_lowercase();

    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "An account with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&body.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let role_id = RoleRepo::find_id_by_name(&state.pool, ROLE_CLIENT)
        .await?
        .ok_or_else(|| AppError::InternalError("Client role not seeded".into()))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            name: body.name.trim().to_string(),
            email,
            password_hash,
            role_id,
        },
    )
    .await?;

    // Every new account starts with a trial project so the dashboard is
    // never empty.
    let trial_owner = body.company.as_deref().unwrap_or(&user.name);
    ProjectRepo::create(
        &state.pool,
        &CreateProject {
            user_id: user.id,
            name: format!("{trial_owner}'s Trial Project"),
            description: Some("Trial project with starter credit".into()),
            status: None,
            credit_balance_cents: Some(TRIAL_CREDIT_CENTS),
            service_id: None,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "New account registered");

    let response = issue_tokens(&state, &user, ROLE_CLIENT, &headers).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// `POST /api/v1/auth/login`
///
/// Verifies credentials and returns a token pair. Repeated failures lock
/// the account for a short period. Missing accounts and bad passwords
/// produce the same 401 so the endpoint does not leak which emails exist.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let email = body.email.trim().to_lowercase();

    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(invalid_credentials)?;

    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }

    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account temporarily locked. Try again later".into(),
            )));
        }
    }

    let password_ok = verify_password(&body.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;

    if !password_ok {
        UserRepo::increment_failed_login(&state.pool, user.id).await?;
        if user.failed_login_count + 1 >= MAX_FAILED_ATTEMPTS {
            let until = Utc::now() + Duration::minutes(LOCK_DURATION_MINS);
            UserRepo::lock_account(&state.pool, user.id, until).await?;
            tracing::warn!(user_id = user.id, "Account locked after repeated failures");
        }
        return Err(invalid_credentials());
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;

    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    let response = issue_tokens(&state, &user, &role, &headers).await?;
    Ok(Json(response))
}

/// `POST /api/v1/auth/refresh`
///
/// Rotates a refresh token: the presented session is revoked and a fresh
/// token pair is issued. A revoked or expired token gets 401.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let hash = hash_refresh_token(&body.refresh_token);

    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &hash)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid or expired refresh token".into(),
            ))
        })?;

    // One-time use: the old session dies whether or not issuance succeeds.
    SessionRepo::revoke(&state.pool, session.id).await?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .filter(|u| u.is_active)
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Account is not available".into()))
        })?;

    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    let response = issue_tokens(&state, &user, &role, &headers).await?;
    Ok(Json(response))
}

/// `POST /api/v1/auth/logout`
///
/// Revokes the presented session, or all of the caller's sessions when no
/// refresh token is supplied. Always 204.
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<LogoutRequest>,
) -> AppResult<StatusCode> {
    match body.refresh_token {
        Some(token) => {
            let hash = hash_refresh_token(&token);
            if let Some(session) =
                SessionRepo::find_by_refresh_token_hash(&state.pool, &hash).await?
            {
                if session.user_id == auth.user_id {
                    SessionRepo::revoke(&state.pool, session.id).await?;
                }
            }
        }
        None => {
            SessionRepo::revoke_all_for_user(&state.pool, auth.user_id).await?;
        }
    }

    Ok(StatusCode::NO_CONTENT)
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
}

/// Generate an access/refresh token pair and persist the refresh session.
async fn issue_tokens(
    state: &AppState,
    user: &User,
    role: &str,
    headers: &HeaderMap,
) -> Result<AuthResponse, AppError> {
    let access_token = generate_access_token(user.id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    let (refresh_token, refresh_hash) = generate_refresh_token();
    let expires_at = Utc::now() + Duration::days(state.config.jwt.refresh_token_expiry_days);

    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh_hash,
            expires_at,
            user_agent,
            ip_address: None,
        },
    )
    .await?;

    Ok(AuthResponse {
        user: UserResponse {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: role.to_string(),
            created_at: user.created_at,
        },
        access_token,
        refresh_token,
    })
}
