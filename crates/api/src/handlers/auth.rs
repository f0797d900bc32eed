//! Owner sign-in: password login, refresh-token rotation and logout.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::session::CreateSession;
use folio_db::models::user::User;
use folio_db::repositories::{SessionRepo, UserRepo};
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, hash_refresh_token, RefreshToken};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::OwnerSession;
use crate::state::AppState;

/// Failed logins in a row that lock the account.
const MAX_FAILED_ATTEMPTS: i32 = 5;

/// How long a lock lasts, in minutes.
const LOCKOUT_MINUTES: i64 = 15;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Token pair returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until `access_token` expires.
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.to_string()))
}

/// Refuse accounts that are disabled or inside a lockout window.
fn ensure_can_sign_in(user: &User) -> AppResult<()> {
    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }
    if user.locked_until.is_some_and(|until| until > Utc::now()) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is temporarily locked. Try again later.".into(),
        )));
    }
    Ok(())
}

/// POST /api/v1/auth/login
///
/// Unknown usernames and wrong passwords get the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    const INVALID: &str = "Invalid username or password";

    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| unauthorized(INVALID))?;
    ensure_can_sign_in(&user)?;

    let matches = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !matches {
        record_failure(&state, &user).await?;
        return Err(unauthorized(INVALID));
    }

    UserRepo::record_successful_login(&state.pool, user.id).await?;
    tracing::info!(user_id = user.id, "Owner signed in");
    start_session(&state, user).await.map(Json)
}

async fn record_failure(state: &AppState, user: &User) -> AppResult<()> {
    let lock_until = Utc::now() + Duration::minutes(LOCKOUT_MINUTES);
    let failures =
        UserRepo::record_failed_login(&state.pool, user.id, MAX_FAILED_ATTEMPTS, lock_until)
            .await?;
    if failures >= MAX_FAILED_ATTEMPTS {
        tracing::warn!(user_id = user.id, failures, "Owner account locked");
    }
    Ok(())
}

/// POST /api/v1/auth/refresh
///
/// The presented refresh token is single-use: its session is revoked and a
/// new one is opened.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let hash = hash_refresh_token(&input.refresh_token);
    let session = SessionRepo::find_by_refresh_token_hash(&state.pool, &hash)
        .await?
        .ok_or_else(|| unauthorized("Invalid or expired refresh token"))?;
    SessionRepo::revoke(&state.pool, session.id).await?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| unauthorized("User no longer exists"))?;
    ensure_can_sign_in(&user)?;

    start_session(&state, user).await.map(Json)
}

/// POST /api/v1/auth/logout
///
/// Revokes every open session of the owner.
pub async fn logout(State(state): State<AppState>, auth: OwnerSession) -> AppResult<StatusCode> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, auth.user_id).await?;
    tracing::info!(user_id = auth.user_id, revoked, "Owner signed out");
    Ok(StatusCode::NO_CONTENT)
}

/// Persist a new refresh session for `user` and mint the token pair.
async fn start_session(state: &AppState, user: User) -> AppResult<AuthResponse> {
    let jwt = &state.config.jwt;
    let access_token = generate_access_token(user.id, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;
    let refresh = RefreshToken::generate();

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: refresh.hash,
            expires_at: Utc::now() + jwt.refresh_ttl(),
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token: refresh.plaintext,
        expires_in: jwt.access_ttl_secs(),
        user: UserInfo {
            id: user.id,
            username: user.username,
        },
    })
}
