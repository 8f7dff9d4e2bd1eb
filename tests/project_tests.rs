
use actix_web::http::StatusCode;
use serde_json::{json, Value};
use test_utils::*;

fn urls(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|p| p["url"].as_str().unwrap().to_string())
        .collect()
}

#[actix_rt::test]
async fn featured_projects_come_first() {
    let app = TestApp::spawn().await;
    app.create_project("https://example.com/a", true).await;
    app.create_project("https://example.com/b", false).await;
    app.create_project("https://example.com/c", true).await;

    let res = app.get("/api/projects", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(urls(&res.body), vec![
        "https://example.com/c",
        "https://example.com/a",
        "https://example.com/b",
    ]);

    let admin = app.get("/api/admin/projects", Some(ADMIN_TOKEN)).await;
    assert_eq!(admin.status, StatusCode::OK);
    assert_eq!(urls(&admin.body), urls(&res.body));
}

#[actix_rt::test]
async fn featured_listing_is_a_featured_subset() {
    let app = TestApp::spawn().await;
    app.create_project("https://example.com/a", true).await;
    app.create_project("https://example.com/b", false).await;
    app.create_project("https://example.com/c", true).await;

    let all = urls(&app.get("/api/projects", None).await.body);
    let featured = app.get("/api/projects/featured", None).await;
    assert_eq!(featured.status, StatusCode::OK);

    let list = featured.body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|p| p["featured"] == true));
    assert!(urls(&featured.body).iter().all(|url| all.contains(url)));
    assert_eq!(list[0]["url"], "https://example.com/c");
}

#[actix_rt::test]
async fn create_applies_defaults() {
    let app = TestApp::spawn().await;
    let mut body = project_body("https://example.com/plain", true);
    body.as_object_mut().unwrap().remove("featured");

    let res = app.post("/api/projects", &body, Some(ADMIN_TOKEN)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["featured"], false);
    assert_eq!(res.body["stars"], Value::Null);
    assert!(res.body["id"].as_i64().unwrap() > 0);
    assert!(res.body["createdAt"].is_string());
}

#[actix_rt::test]
async fn create_requires_every_field() {
    let app = TestApp::spawn().await;

    for missing in ["name", "description", "language", "url"] {
        let mut body = project_body("https://example.com/x", false);
        body.as_object_mut().unwrap().remove(missing);

        let res = app.post("/api/projects", &body, Some(ADMIN_TOKEN)).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "without {missing}");
        assert_eq!(res.body, json!({ "error": "Missing required fields" }));
    }
}

#[actix_rt::test]
async fn duplicate_url_is_rejected_and_original_kept() {
    let app = TestApp::spawn().await;
    let original = app.create_project("https://example.com/dup", true).await;

    let res = app.post("/api/projects", &project_body("https://example.com/dup", false), Some(ADMIN_TOKEN)).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.error(), "Failed to create project");

    let all = app.get("/api/projects", None).await;
    let list = all.body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], original["id"]);
    assert_eq!(list[0]["featured"], true);
}

#[actix_rt::test]
async fn stars_can_be_set_and_cleared() {
    let app = TestApp::spawn().await;
    let project = app.create_project("https://example.com/stars", false).await;
    let path = format!("/api/projects/{}", project["id"]);

    let res = app.put(&path, &json!({ "stars": 42 }), Some(ADMIN_TOKEN)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["stars"], 42);

    let res = app.put(&path, &json!({ "featured": true }), Some(ADMIN_TOKEN)).await;
    assert_eq!(res.body["stars"], 42);
    assert_eq!(res.body["featured"], true);

    let res = app.put(&path, &json!({ "stars": null }), Some(ADMIN_TOKEN)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["stars"], Value::Null);
    assert_eq!(res.body["name"], project["name"]);
}

#[actix_rt::test]
async fn empty_update_returns_current_row() {
    let app = TestApp::spawn().await;
    let project = app.create_project("https://example.com/same", true).await;

    let res = app.put(&format!("/api/projects/{}", project["id"]), &json!({}), Some(ADMIN_TOKEN)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, project);

    let res = app.put("/api/projects/12345", &json!({}), Some(ADMIN_TOKEN)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.error(), "Project not found");
}

#[actix_rt::test]
async fn update_to_taken_url_fails() {
    let app = TestApp::spawn().await;
    app.create_project("https://example.com/one", false).await;
    let two = app.create_project("https://example.com/two", false).await;

    let res = app.put(
        &format!("/api/projects/{}", two["id"]),
        &json!({ "url": "https://example.com/one" }),
        Some(ADMIN_TOKEN),
    ).await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.error(), "Failed to update project");
}

#[actix_rt::test]
async fn delete_reports_and_then_404s() {
    let app = TestApp::spawn().await;
    let project = app.create_project("https://example.com/gone", false).await;
    let path = format!("/api/projects/{}", project["id"]);

    let res = app.delete(&path, Some(ADMIN_TOKEN)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body, json!({ "message": "Project deleted successfully" }));

    let res = app.delete(&path, Some(ADMIN_TOKEN)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.error(), "Project not found");

    let res = app.delete("/api/projects/abc", Some(ADMIN_TOKEN)).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.error(), "Project not found");
}
