use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use unitconver_api::config::ServerConfig;
use unitconver_api::router::build_app_router;
use unitconver_api::snapshot::SnapshotStore;
use unitconver_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        snapshot_dir: std::env::temp_dir().join("unitconver-test-snapshots-missing"),
        snapshot_ttl_secs: 300,
        site_origin: "https://unitconver.com".to_string(),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and a snapshot directory that does not exist
/// (so only the db and raw-symbol name layers are active).
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_app(pool, config)
}

/// Like [`build_test_app`], but with snapshots served from `dir`.
pub fn build_test_app_with_snapshots(pool: PgPool, dir: &Path) -> Router {
    let mut config = test_config();
    config.snapshot_dir = dir.to_path_buf();
    build_app(pool, config)
}

fn build_app(pool: PgPool, config: ServerConfig) -> Router {
    let snapshots = Arc::new(SnapshotStore::new(
        config.snapshot_dir.clone(),
        Duration::from_secs(config.snapshot_ttl_secs),
    ));
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        snapshots,
    };
    build_app_router(state, &config)
}

/// Issue a GET request against the test app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the test app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into parsed JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a 200 response and return the `data` field of the envelope.
pub async fn data_of(response: Response<Body>) -> serde_json::Value {
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json.get("data").cloned().expect("response must use the data envelope")
}
