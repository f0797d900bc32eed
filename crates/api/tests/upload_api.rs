//! HTTP-level tests for `POST /api/v1/uploads`.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{body_json, multipart_upload, owner_token, BASE_URL};
use folio_api::storage::{ObjectStore, StorageError};
use sqlx::PgPool;

const PDF: &[u8] = b"%PDF-1.4\n%test\n";

/// Store that only counts writes.
#[derive(Default)]
struct CountingStore {
    puts: AtomicUsize,
}

#[async_trait]
impl ObjectStore for CountingStore {
    async fn put(
        &self,
        _key: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("https://cdn.example.com/{key}")
    }
}

/// Store that always fails.
struct BrokenStore;

#[async_trait]
impl ObjectStore for BrokenStore {
    async fn put(
        &self,
        _key: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        Err(StorageError::Upload("bucket unreachable".into()))
    }

    fn public_url(&self, key: &str) -> String {
        key.to_string()
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_writes_file_and_returns_url(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = multipart_upload(
        app.router.clone(),
        Some(&token),
        Some("cv"),
        "Resume.PDF",
        "application/pdf",
        PDF,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let url = body_json(response).await["url"].as_str().unwrap().to_string();

    let prefix = format!("{BASE_URL}/uploads/cv/");
    assert!(url.starts_with(&prefix), "unexpected url {url}");
    assert!(url.ends_with(".pdf"));

    let key = url.trim_start_matches(&format!("{BASE_URL}/uploads/"));
    let stored = std::fs::read(app.uploads.path().join(key)).expect("file should exist");
    assert_eq!(stored, PDF);

    // Local uploads are served back by the API.
    let path = url.trim_start_matches(BASE_URL);
    let response = common::get(app.router, path).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_defaults_to_certificates(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let response =
        multipart_upload(app.router, Some(&token), None, "cert.pdf", "application/pdf", PDF).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let url = body_json(response).await["url"].as_str().unwrap().to_string();
    assert!(url.contains("/uploads/certificates/"));
}

/// A disallowed type is refused before the store is touched.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_wrong_type_never_reaches_the_store(pool: PgPool) {
    let token = owner_token(&pool).await;
    let uploads = tempfile::tempdir().unwrap();
    let config = common::test_config(uploads.path());
    let store = Arc::new(CountingStore::default());
    let app = common::build_with_store(pool, &config, store.clone());

    let response = multipart_upload(
        app.clone(),
        Some(&token),
        Some("certificates"),
        "photo.png",
        "image/png",
        b"\x89PNG",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    assert_eq!(store.puts.load(Ordering::SeqCst), 0);

    let response = multipart_upload(
        app,
        Some(&token),
        Some("projects"),
        "photo.png",
        "image/png",
        b"\x89PNG",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(store.puts.load(Ordering::SeqCst), 1);
    let url = body_json(response).await["url"].as_str().unwrap().to_string();
    assert!(url.starts_with("https://cdn.example.com/projects/"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_folder_is_rejected(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = multipart_upload(
        app.router,
        Some(&token),
        Some("../etc"),
        "cv.pdf",
        "application/pdf",
        PDF,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_oversized_upload_is_rejected(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    // The test configuration allows 64 KiB.
    let big = vec![b'a'; 128 * 1024];
    let response = multipart_upload(
        app.router,
        Some(&token),
        Some("cv"),
        "big.pdf",
        "application/pdf",
        &big,
    )
    .await;
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_storage_failure_is_bad_gateway(pool: PgPool) {
    let token = owner_token(&pool).await;
    let uploads = tempfile::tempdir().unwrap();
    let config = common::test_config(uploads.path());
    let app = common::build_with_store(pool, &config, Arc::new(BrokenStore));

    let response =
        multipart_upload(app, Some(&token), Some("cv"), "cv.pdf", "application/pdf", PDF).await;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(body_json(response).await["code"], "STORAGE_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_upload_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response =
        multipart_upload(app.router, None, Some("cv"), "cv.pdf", "application/pdf", PDF).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
