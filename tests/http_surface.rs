//! HTTP surface integration tests
//!
//! Tests for the landing page, static serving, and the 404/405 behavior of
//! the router.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use common::spawn_app;

#[tokio::test]
async fn test_index_serves_landing_page() {
    let app = spawn_app().await;

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("accountd"));
}

#[tokio::test]
async fn test_index_missing_asset_is_not_found() {
    let app = spawn_app().await;
    std::fs::remove_file(app.static_dir.path().join("index.html")).unwrap();

    let response = app.server.get("/").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "404 Not Found");
}

#[tokio::test]
async fn test_static_asset_is_served() {
    let app = spawn_app().await;
    std::fs::write(app.static_dir.path().join("style.css"), "body { margin: 0; }").unwrap();

    let response = app.server.get("/static/style.css").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("margin"));
}

#[tokio::test]
async fn test_missing_static_asset_is_json_404() {
    let app = spawn_app().await;

    let response = app.server.get("/static/missing.css").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "404 Not Found");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = spawn_app().await;

    let response = app.server.get("/no/such/route").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "404 Not Found");
}

#[tokio::test]
async fn test_wrong_method_is_json_405() {
    let app = spawn_app().await;

    let response = app.server.get("/register").await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "Method Not Allowed");

    let response = app.server.post("/logout").await;
    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_malformed_body_fails_closed() {
    let app = spawn_app().await;

    // Not JSON at all
    let response = app
        .server
        .post("/register")
        .content_type("application/json")
        .text("this is not json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body.get("error").is_some());
}
