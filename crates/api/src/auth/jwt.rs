//! Access and refresh tokens for the owner session.
//!
//! An access token is a short-lived HS256 JWT carrying [`Claims`]. A refresh
//! token is an opaque random string handed to the client once; the database
//! only ever sees its SHA-256 digest.

use chrono::{Duration, Utc};
use folio_core::types::DbId;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use rand::distr::{Alphanumeric, SampleString};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

const DEFAULT_ACCESS_MINUTES: i64 = 15;
const DEFAULT_REFRESH_DAYS: i64 = 7;
const REFRESH_TOKEN_LEN: usize = 48;

/// Payload of an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Owner id.
    pub sub: DbId,
    pub exp: i64,
    pub iat: i64,
    /// Random per-token id, so two tokens minted in the same second differ.
    pub jti: String,
}

/// Signing secret and token lifetimes.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("access_token_expiry_mins", &self.access_token_expiry_mins)
            .field("refresh_token_expiry_days", &self.refresh_token_expiry_days)
            .finish_non_exhaustive()
    }
}

impl JwtConfig {
    /// Read the token settings.
    ///
    /// | Env Var                   | Required | Default |
    /// |---------------------------|----------|---------|
    /// | `JWT_SECRET`              | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`  | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS` | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics when `JWT_SECRET` is missing or empty, or a lifetime is not an
    /// integer.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set and non-empty");

        Self {
            secret,
            access_token_expiry_mins: int_var("JWT_ACCESS_EXPIRY_MINS", DEFAULT_ACCESS_MINUTES),
            refresh_token_expiry_days: int_var("JWT_REFRESH_EXPIRY_DAYS", DEFAULT_REFRESH_DAYS),
        }
    }

    /// Access token lifetime in seconds, as reported to clients.
    pub fn access_ttl_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }

    /// Lifetime of a refresh session.
    pub fn refresh_ttl(&self) -> Duration {
        Duration::days(self.refresh_token_expiry_days)
    }
}

fn int_var(name: &str, default: i64) -> i64 {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be an integer, got '{raw}'")),
        Err(_) => default,
    }
}

/// Sign a fresh access token for `user_id`.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        exp: iat + config.access_ttl_secs(),
        iat,
        jti: Uuid::new_v4().to_string(),
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature and expiry of an access token.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

/// A newly minted refresh token.
pub struct RefreshToken {
    /// Returned to the client, never stored.
    pub plaintext: String,
    /// Stored in `user_sessions.refresh_token_hash`.
    pub hash: String,
}

impl RefreshToken {
    pub fn generate() -> Self {
        let plaintext = Alphanumeric.sample_string(&mut rand::rng(), REFRESH_TOKEN_LEN);
        let hash = hash_refresh_token(&plaintext);
        Self { plaintext, hash }
    }
}

/// Hex SHA-256 digest of a refresh token.
pub fn hash_refresh_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
