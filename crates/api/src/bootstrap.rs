//! First-run creation of the owner account.

use folio_core::error::CoreError;
use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;
use folio_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};

/// Credentials the owner account is created with on first start.
#[derive(Clone)]
pub struct OwnerCredentials {
    pub username: String,
    pub password: String,
}

impl OwnerCredentials {
    /// Read `OWNER_USERNAME` / `OWNER_PASSWORD`. Returns `None` unless both
    /// are set and non-empty.
    pub fn from_env() -> Option<Self> {
        let username = std::env::var("OWNER_USERNAME").ok()?.trim().to_string();
        let password = std::env::var("OWNER_PASSWORD").ok()?;
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self { username, password })
    }
}

/// Outcome of [`ensure_owner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// An account already existed; nothing was changed.
    AlreadyPresent,
    /// The owner account was created.
    Created,
    /// No account exists and no credentials were supplied.
    NoCredentials,
}

/// Create the owner account when the `users` table is empty.
///
/// Existing accounts are never modified, so rotating `OWNER_PASSWORD` after
/// the first start has no effect.
pub async fn ensure_owner(
    pool: &DbPool,
    credentials: Option<&OwnerCredentials>,
) -> AppResult<BootstrapOutcome> {
    if UserRepo::count(pool).await? > 0 {
        return Ok(BootstrapOutcome::AlreadyPresent);
    }
    let Some(credentials) = credentials else {
        return Ok(BootstrapOutcome::NoCredentials);
    };

    validate_password_strength(&credentials.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(format!("OWNER_PASSWORD: {msg}"))))?;

    let password_hash = hash_password(&credentials.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: credentials.username.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Owner account created");
    Ok(BootstrapOutcome::Created)
}
