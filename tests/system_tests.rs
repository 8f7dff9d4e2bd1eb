
use actix_web::http::StatusCode;
use serde_json::json;
use test_utils::*;

use portfolio_api::{db::seed::bootstrap, settings::AppEnvironment};

#[actix_rt::test]
async fn health_reports_database_status() {
    let app = TestApp::spawn().await;

    let res = app.get("/api/health", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "healthy");
    assert_eq!(res.body["database"], "OK");
    assert_eq!(res.body["version"], env!("CARGO_PKG_VERSION"));
    assert!(res.body["uptime"].is_string());
    assert!(res.body["startedAt"].is_string());
}

#[actix_rt::test]
async fn health_degrades_when_store_is_closed() {
    let app = TestApp::spawn().await;
    app.pool.close().await;

    let res = app.get("/api/health", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["database"], "Unavailable");
}

#[actix_rt::test]
async fn profile_comes_from_configuration() {
    let app = TestApp::spawn().await;

    let res = app.get("/api/profile", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "Jim Simon");
    assert_eq!(res.body["profilePicture"], "/assets/me.jpeg");
    assert!(res.body.get("bluesky").is_none());
}

#[actix_rt::test]
async fn root_serves_a_welcome_document() {
    let app = TestApp::spawn().await;

    let res = app.get("/", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["name"], "Portfolio-API Test");
    assert_eq!(res.body["status"], "Ok");
}

#[actix_rt::test]
async fn unknown_routes_are_404() {
    let app = TestApp::spawn().await;

    let res = app.get("/api/nothing-here", None).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn dev_token_is_ignored_in_production() {
    let mut config = test_config();
    config.env = AppEnvironment::Production;
    config.cors_allowed_origins = vec!["https://example.com".to_string()];
    assert!(config.validate().is_err());

    let app = TestApp::spawn_with(config).await;

    let res = app.get("/api/admin/blog", Some(ADMIN_TOKEN)).await;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body, json!({ "error": "Authentication required" }));

    let token = app.token_for(ADMIN_EMAIL, ADMIN_PASSWORD).await;
    assert_eq!(app.get("/api/admin/blog", Some(&token)).await.status, StatusCode::OK);
}

#[actix_rt::test]
async fn store_initialization_is_idempotent() {
    let mut config = test_config();
    config.seed_sample_projects = true;
    let app = TestApp::spawn_with(config).await;

    let seeded = app.get("/api/projects", None).await.body.as_array().unwrap().len();
    assert!(seeded > 0);

    bootstrap(&app.config, &app.pool).await.unwrap();
    bootstrap(&app.config, &app.pool).await.unwrap();

    let projects = app.get("/api/projects", None).await;
    assert_eq!(projects.body.as_array().unwrap().len(), seeded);
    assert!(projects.body.as_array().unwrap().iter().any(|p| p["name"] == "Open TCG Store" && p["featured"] == true));

    let (users,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(users, 1);
    assert_eq!(app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await.status, StatusCode::OK);
}
