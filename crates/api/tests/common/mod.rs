#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::ServiceExt;

use folio_api::auth::jwt::{generate_access_token, JwtConfig};
use folio_api::auth::password::hash_password;
use folio_api::config::{ServerConfig, SiteSettings, StorageConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_api::storage::{LocalStore, ObjectStore};
use folio_db::models::user::{CreateUser, User};
use folio_db::repositories::UserRepo;

pub const OWNER_USERNAME: &str = "owner";
pub const OWNER_PASSWORD: &str = "correct horse battery";
pub const BASE_URL: &str = "http://folio.test";

/// Build a test `ServerConfig` with safe defaults and local storage in `dir`.
pub fn test_config(dir: &std::path::Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: 64 * 1024,
        jwt: test_jwt(),
        site: SiteSettings {
            base_url: BASE_URL.to_string(),
            title: "Test Portfolio".to_string(),
        },
        storage: StorageConfig::Local {
            dir: dir.to_path_buf(),
        },
    }
}

pub fn test_jwt() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_token_expiry_mins: 15,
        refresh_token_expiry_days: 7,
    }
}

/// The application under test plus the directory local uploads land in.
///
/// The directory is removed when this value is dropped.
pub struct TestApp {
    pub router: Router,
    pub uploads: TempDir,
}

/// Build the full application router, with the production middleware stack,
/// against `pool` and a fresh temporary upload directory.
pub fn build_test_app(pool: PgPool) -> TestApp {
    let uploads = tempfile::tempdir().expect("temp dir");
    let config = test_config(uploads.path());
    let store = Arc::new(LocalStore::new(
        uploads.path().to_path_buf(),
        format!("{BASE_URL}/uploads"),
    ));
    let router = build_with_store(pool, &config, store);
    TestApp { router, uploads }
}

/// Build the router with a caller-supplied object store.
pub fn build_with_store(
    pool: PgPool,
    config: &ServerConfig,
    store: Arc<dyn ObjectStore>,
) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store,
    };
    build_app_router(state, config)
}

/// Insert the owner account directly.
pub async fn create_owner(pool: &PgPool) -> User {
    let password_hash = hash_password(OWNER_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: OWNER_USERNAME.to_string(),
            password_hash,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Create the owner and return a valid access token for them.
pub async fn owner_token(pool: &PgPool) -> String {
    let owner = create_owner(pool).await;
    generate_access_token(owner.id, &test_jwt()).expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("response body should be UTF-8")
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, None, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

const BOUNDARY: &str = "folio-test-boundary";

/// POST a multipart form with one `file` part and an optional `folder` part.
pub async fn multipart_upload(
    app: Router,
    token: Option<&str>,
    folder: Option<&str>,
    filename: &str,
    content_type: &str,
    contents: &[u8],
) -> Response {
    let mut body = Vec::new();
    if let Some(folder) = folder {
        let part = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"folder\"\r\n\r\n\
             {folder}\r\n"
        );
        body.extend_from_slice(part.as_bytes());
    }
    let header = format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
         Content-Type: {content_type}\r\n\r\n"
    );
    body.extend_from_slice(header.as_bytes());
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/uploads")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}
