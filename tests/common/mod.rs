//! Test fixtures shared by the integration tests
//!
//! Provides a fully wired application over an in-memory SQLite database and
//! a temporary static directory, served through `axum_test::TestServer`.

use std::sync::Arc;

use accountd::auth::sessions::SessionSigner;
use accountd::auth::store::AccountStore;
use accountd::routes::create_router;
use accountd::server::state::AppState;
use axum_test::{TestResponse, TestServer};
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;

/// Signing secret used by every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// A running application under test
pub struct TestApp {
    pub server: TestServer,
    pub store: AccountStore,
    /// Temporary static asset directory; dropped with the app
    pub static_dir: TempDir,
}

/// Spin up the full router over an in-memory database
///
/// A single pooled connection keeps the in-memory database alive and shared
/// across requests. The static dir contains a small index.html.
pub async fn spawn_app() -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");

    let store = AccountStore::new(pool);
    store.init_schema().await.expect("Failed to create schema");

    let static_dir = TempDir::new().expect("Failed to create static dir");
    std::fs::write(
        static_dir.path().join("index.html"),
        "<!DOCTYPE html><html><body><h1>accountd</h1></body></html>",
    )
    .expect("Failed to write index.html");

    let state = AppState {
        store: store.clone(),
        sessions: Arc::new(SessionSigner::new(TEST_SECRET, 3600)),
        static_dir: static_dir.path().to_path_buf(),
    };

    let server = TestServer::new(create_router(state)).expect("Failed to start test server");

    TestApp {
        server,
        store,
        static_dir,
    }
}

/// Register a user through the HTTP surface
pub async fn register(app: &TestApp, username: &str, password: &str) -> TestResponse {
    app.server
        .post("/register")
        .json(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .await
}

/// Log a user in through the HTTP surface
pub async fn login(app: &TestApp, username: &str, password: &str) -> TestResponse {
    app.server
        .post("/login")
        .json(&serde_json::json!({
            "username": username,
            "password": password,
        }))
        .await
}

/// Pull the `session=...` pair out of a login response's Set-Cookie header
pub fn session_cookie(response: &TestResponse) -> String {
    let value = response
        .headers()
        .get(axum::http::header::SET_COOKIE)
        .expect("missing Set-Cookie header")
        .clone();

    let raw = value.to_str().expect("Set-Cookie is not valid UTF-8");
    raw.split(';').next().unwrap().to_string()
}
