//! Tests for the server-rendered public pages and the health check.

mod common;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use common::{body_json, body_text, get, owner_token, post_json_auth, put_json_auth};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_reports_database(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.router, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_home_page_renders_with_empty_content(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
    let html = body_text(response).await;
    assert!(html.contains("<title>Test Portfolio</title>"));
    assert!(!html.contains("Download CV"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_home_page_shows_owner_content(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    put_json_auth(
        app.router.clone(),
        "/api/v1/site-config",
        json!({
            "role": "Backend Engineer",
            "about_me_content": "I like queues.\n\nAnd databases.",
            "cv_url": "https://cdn.example.com/cv/1-abc.pdf"
        }),
        &token,
    )
    .await;
    post_json_auth(
        app.router.clone(),
        "/api/v1/projects",
        json!({
            "project": { "name": "Ledger", "tech_stack": ["Rust"] },
            "images": [{ "url": "https://cdn.example.com/projects/ledger.png", "is_main": true }]
        }),
        &token,
    )
    .await;
    post_json_auth(
        app.router.clone(),
        "/api/v1/experience",
        json!({ "company": "Acme", "position": "Staff Engineer", "start_date": "2021-03-01" }),
        &token,
    )
    .await;

    let response = get(app.router, "/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Backend Engineer"));
    assert!(html.contains("<p>And databases.</p>"));
    assert!(html.contains("Download CV"));
    assert!(html.contains("Ledger"));
    assert!(html.contains("ledger.png"));
    assert!(html.contains("Staff Engineer"));
    assert!(html.contains("Mar 2021 - Present"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_robots_and_sitemap(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.router.clone(), "/robots.txt").await;
    assert_eq!(response.status(), StatusCode::OK);
    let robots = body_text(response).await;
    assert!(robots.contains("Disallow: /api/"));
    assert!(robots.contains("Sitemap: http://folio.test/sitemap.xml"));

    let response = get(app.router, "/sitemap.xml").await;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/xml"));
    let xml = body_text(response).await;
    assert!(xml.contains("<loc>http://folio.test/</loc>"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_path_is_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.router, "/wp-admin").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
