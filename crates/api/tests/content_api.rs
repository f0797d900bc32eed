//! HTTP-level tests for the content resources the owner edits: projects,
//! education, experience, contact links and the site configuration.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, delete, delete_auth, get, owner_token, post_json, post_json_auth, put_json,
    put_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_lifecycle(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = json!({
        "project": {
            "name": "Folio",
            "description": "Portfolio site",
            "tech_stack": ["Rust", "Postgres"],
            "repo_url": "https://github.com/ada/folio",
            "live_url": ""
        },
        "images": [
            { "url": "https://cdn.example.com/a.png", "is_main": false },
            { "url": "https://cdn.example.com/b.png", "is_main": true }
        ]
    });
    let response = post_json_auth(app.router.clone(), "/api/v1/projects", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Folio");
    assert_eq!(created["tech_stack"], json!(["Rust", "Postgres"]));
    assert!(created["live_url"].is_null(), "empty string must be stored as NULL");
    assert_eq!(created["images"].as_array().unwrap().len(), 2);
    assert_eq!(created["images"][1]["is_main"], true);
    assert_eq!(created["images"][1]["display_order"], 1);

    let response = get(app.router.clone(), &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["images"][0]["image_url"], "https://cdn.example.com/a.png");

    let response = get(app.router.clone(), "/api/v1/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["images"].as_array().unwrap().len(), 2);

    let response = delete_auth(app.router.clone(), &format!("/api/v1/projects/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app.router, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The admin panel's `projectData` envelope is accepted as well.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_create_accepts_project_data_alias(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = json!({
        "projectData": { "name": "Alias", "tech_stack": [] },
        "images": [{ "image_url": "https://cdn.example.com/x.png", "isMain": true }]
    });
    let response = post_json_auth(app.router, "/api/v1/projects", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["description"], "");
    assert_eq!(created["images"][0]["is_main"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_update_images(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = json!({
        "project": { "name": "Folio", "tech_stack": ["Rust"] },
        "images": [{ "url": "https://cdn.example.com/old.png", "is_main": true }]
    });
    let response = post_json_auth(app.router.clone(), "/api/v1/projects", body, &token).await;
    let created = body_json(response).await;
    let uri = format!("/api/v1/projects/{}", created["id"]);

    // No images in the body: the stored images are kept.
    let response = put_json_auth(
        app.router.clone(),
        &uri,
        json!({ "project": { "name": "Folio v2" } }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Folio v2");
    assert_eq!(updated["tech_stack"], json!(["Rust"]));
    assert_eq!(updated["images"][0]["image_url"], "https://cdn.example.com/old.png");

    // A non-empty list replaces them.
    let response = put_json_auth(
        app.router,
        &uri,
        json!({
            "project": { "repo_url": null },
            "images": [
                { "url": "https://cdn.example.com/new1.png" },
                { "url": "https://cdn.example.com/new2.png", "is_main": true }
            ]
        }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    let images = updated["images"].as_array().unwrap();
    assert_eq!(images.len(), 2);
    assert_eq!(images[0]["image_url"], "https://cdn.example.com/new1.png");
    assert!(updated["repo_url"].is_null());
}

/// Postgres rejects NUL bytes in text, so this image write always fails.
const UNSTORABLE_URL: &str = "bad\u{0}url";

/// A failed image write is logged; the saved project is still returned.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_image_failure_keeps_project(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = json!({
        "project": { "name": "Half saved" },
        "images": [{ "url": UNSTORABLE_URL }]
    });
    let response = post_json_auth(app.router.clone(), "/api/v1/projects", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(created["name"], "Half saved");
    assert_eq!(created["images"], json!([]));

    let uri = format!("/api/v1/projects/{}", created["id"]);
    let response = get(app.router.clone(), &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Give the project a real image, then fail a replacement.
    let body = json!({
        "images": [{ "url": "https://cdn.example.com/kept.png", "is_main": true }]
    });
    let response = put_json_auth(app.router.clone(), &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json!({
        "project": { "name": "Renamed" },
        "images": [{ "url": UNSTORABLE_URL }]
    });
    let response = put_json_auth(app.router.clone(), &uri, body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Renamed");
    let images = updated["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0]["image_url"], "https://cdn.example.com/kept.png");

    let stored = body_json(get(app.router, &uri).await).await;
    assert_eq!(stored["name"], "Renamed");
    assert_eq!(stored["images"][0]["image_url"], "https://cdn.example.com/kept.png");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_writes_require_auth(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.router.clone(),
        "/api/v1/projects",
        json!({ "project": { "name": "Nope" } }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = put_json(app.router.clone(), "/api/v1/projects/1", json!({})).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = delete(app.router, "/api/v1/projects/1").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_project_missing_name_is_bad_request(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    // "" becomes null, which a required field rejects.
    let response = post_json_auth(
        app.router,
        "/api/v1/projects",
        json!({ "project": { "name": "" } }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_project_is_not_found(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = put_json_auth(
        app.router,
        "/api/v1/projects/999999",
        json!({ "project": { "name": "Ghost" } }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Education / experience
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_education_lifecycle(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = json!({
        "institution": "University of London",
        "degree_or_course": "BSc Mathematics",
        "start_date": "2015-09-01",
        "end_date": "",
        "description": "",
        "certificate_url": "https://cdn.example.com/certificates/1-abc.pdf"
    });
    let response = post_json_auth(app.router.clone(), "/api/v1/education", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert!(created["end_date"].is_null());
    assert!(created["description"].is_null());
    let uri = format!("/api/v1/education/{}", created["id"]);

    let response = put_json_auth(
        app.router.clone(),
        &uri,
        json!({ "end_date": "2018-06-30", "certificate_url": "" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["end_date"], "2018-06-30");
    assert!(updated["certificate_url"].is_null());
    assert_eq!(updated["institution"], "University of London");

    let response = delete_auth(app.router.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete_auth(app.router, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_experience_list_is_newest_first(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    for (company, start) in [("Old Co", "2012-01-01"), ("New Co", "2020-05-01")] {
        let body = json!({ "company": company, "position": "Engineer", "start_date": start });
        let response = post_json_auth(app.router.clone(), "/api/v1/experience", body, &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get(app.router, "/api/v1/experience").await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list[0]["company"], "New Co");
    assert_eq!(list[1]["company"], "Old Co");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_experience_invalid_date_is_bad_request(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = json!({ "company": "Acme", "position": "Engineer", "start_date": "last spring" });
    let response = post_json_auth(app.router, "/api/v1/experience", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Contact links
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_contact_link_lifecycle(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = json!({
        "platform": "GitHub",
        "url": "https://github.com/ada",
        "icon_name": "github"
    });
    let response = post_json_auth(app.router.clone(), "/api/v1/contact-links", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let uri = format!("/api/v1/contact-links/{}", created["id"]);

    let body = json!({ "platform": "Email", "url": "mailto:ada@example.com" });
    let response = post_json_auth(app.router.clone(), "/api/v1/contact-links", body, &token).await;
    assert_eq!(body_json(response).await["icon_name"], "mail");

    let response =
        put_json_auth(app.router.clone(), &uri, json!({ "display_order": 5 }), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["display_order"], 5);

    let list = body_json(get(app.router, "/api/v1/contact-links").await).await;
    assert_eq!(list[0]["platform"], "Email");
    assert_eq!(list[1]["platform"], "GitHub");
}

// ---------------------------------------------------------------------------
// Site configuration
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_site_config_read_and_update(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app.router.clone(), "/api/v1/site-config").await;
    assert_eq!(response.status(), StatusCode::OK);
    let initial = body_json(response).await;
    assert_eq!(initial["id"], 1);
    assert!(initial["cv_url"].is_null());

    let body = json!({
        "role": "Backend Engineer",
        "headline": "I build dependable systems",
        "cv_url": "https://cdn.example.com/cv/1-abc.pdf"
    });
    let response = put_json_auth(app.router.clone(), "/api/v1/site-config", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["role"], "Backend Engineer");
    assert_eq!(updated["cv_url"], "https://cdn.example.com/cv/1-abc.pdf");

    let response = put_json_auth(
        app.router.clone(),
        "/api/v1/site-config",
        json!({ "cv_url": "" }),
        &token,
    )
    .await;
    let cleared = body_json(response).await;
    assert!(cleared["cv_url"].is_null());
    assert_eq!(cleared["role"], "Backend Engineer");

    let response = put_json(
        app.router,
        "/api/v1/site-config",
        json!({ "role": "Hacker" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Blank text fields are stored as empty strings, not ignored.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_site_config_text_fields_can_be_cleared(pool: PgPool) {
    let token = owner_token(&pool).await;
    let app = common::build_test_app(pool);

    let body = json!({
        "role": "Engineer",
        "headline": "Old headline",
        "about_me_content": "Old about"
    });
    let response = put_json_auth(app.router.clone(), "/api/v1/site-config", body, &token).await;
    assert_eq!(body_json(response).await["headline"], "Old headline");

    let body = json!({ "headline": "", "about_me_content": null });
    let response = put_json_auth(app.router.clone(), "/api/v1/site-config", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let cleared = body_json(response).await;
    assert_eq!(cleared["headline"], "");
    assert_eq!(cleared["about_me_content"], "");
    assert_eq!(cleared["role"], "Engineer");

    let stored = body_json(get(app.router, "/api/v1/site-config").await).await;
    assert_eq!(stored["headline"], "");
}
