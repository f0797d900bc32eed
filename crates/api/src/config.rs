use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Default upload body limit (10 MiB).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have sensible defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted upload body in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Public page settings.
    pub site: SiteSettings,
    /// Where uploaded files go.
    pub storage: StorageConfig,
}

/// Settings used when rendering the public page, robots.txt and sitemap.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    /// Absolute base URL of the public site, without trailing slash.
    pub base_url: String,
    /// `<title>` of the public page.
    pub title: String,
}

/// Object storage backend selection.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// Files are written below `dir` and served at `/uploads`.
    Local { dir: PathBuf },
    /// Files are uploaded to an S3 (or S3-compatible) bucket.
    S3 {
        bucket: String,
        region: String,
        /// Custom endpoint for S3-compatible providers. Enables path-style
        /// addressing when set.
        endpoint: Option<String>,
        /// Base URL objects are publicly reachable under.
        public_url: String,
        /// Static key pair. When absent the default AWS credential chain is used.
        credentials: Option<S3Credentials>,
    },
}

/// Static access key for S3-compatible providers.
#[derive(Clone)]
pub struct S3Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl std::fmt::Debug for S3Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Credentials")
            .field("access_key_id", &self.access_key_id)
            .finish_non_exhaustive()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                 |
    /// | `SITE_BASE_URL`        | `http://localhost:3000`    |
    /// | `SITE_TITLE`           | `Portfolio`                |
    ///
    /// Storage and JWT settings are documented on [`StorageConfig::from_env`]
    /// and [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_BYTES.to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let site = SiteSettings {
            base_url: std::env::var("SITE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into())
                .trim_end_matches('/')
                .to_string(),
            title: std::env::var("SITE_TITLE").unwrap_or_else(|_| "Portfolio".into()),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            jwt: JwtConfig::from_env(),
            site,
            storage: StorageConfig::from_env(),
        }
    }
}

impl StorageConfig {
    /// Load the storage backend from environment variables.
    ///
    /// | Env Var                | Required    | Default           |
    /// |------------------------|-------------|-------------------|
    /// | `STORAGE_BACKEND`      | no          | `local`           |
    /// | `STORAGE_LOCAL_DIR`    | no          | `storage/uploads` |
    /// | `S3_BUCKET`            | for `s3`    | --                |
    /// | `S3_REGION`            | for `s3`    | --                |
    /// | `S3_ENDPOINT`          | no          | --                |
    /// | `S3_PUBLIC_URL`        | for `s3`    | --                |
    /// | `S3_ACCESS_KEY_ID`     | no          | AWS default chain |
    /// | `S3_SECRET_ACCESS_KEY` | with key id | --                |
    ///
    /// # Panics
    ///
    /// Panics on an unknown backend or a missing required S3 variable.
    pub fn from_env() -> Self {
        let backend = std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "local".into());
        match backend.as_str() {
            "local" => Self::Local {
                dir: std::env::var("STORAGE_LOCAL_DIR")
                    .unwrap_or_else(|_| "storage/uploads".into())
                    .into(),
            },
            "s3" => Self::S3 {
                bucket: required("S3_BUCKET"),
                region: required("S3_REGION"),
                endpoint: std::env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty()),
                public_url: required("S3_PUBLIC_URL").trim_end_matches('/').to_string(),
                credentials: std::env::var("S3_ACCESS_KEY_ID")
                    .ok()
                    .filter(|s| !s.is_empty())
                    .map(|access_key_id| S3Credentials {
                        access_key_id,
                        secret_access_key: required("S3_SECRET_ACCESS_KEY"),
                    }),
            },
            other => panic!("STORAGE_BACKEND must be 'local' or 's3', got '{other}'"),
        }
    }
}

fn required(name: &str) -> String {
    let value = std::env::var(name)
        .unwrap_or_else(|_| panic!("{name} must be set when STORAGE_BACKEND=s3"));
    assert!(!value.is_empty(), "{name} must not be empty");
    value
}
