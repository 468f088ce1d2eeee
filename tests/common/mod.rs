//! Shared utilities for integration testing.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use doghouse::config::{AppConfig, StorageBackend};
use doghouse::storage::MemoryStore;
use doghouse::HttpServer;

/// Router over the standard fixture: two boxer images, one siberian husky
/// image.
pub fn seeded_router() -> Router {
    router_with_keys([
        "breeds/boxer/a.jpg",
        "breeds/boxer/b.jpg",
        "breeds/husky-siberian/c.jpg",
    ])
}

/// Router over an arbitrary set of object keys.
pub fn router_with_keys<I, S>(keys: I) -> Router
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = AppConfig::default();
    config.storage.backend = StorageBackend::Memory;
    let store = Arc::new(MemoryStore::new(keys));
    HttpServer::with_store(config, store).router()
}

/// Router over an empty bucket.
pub fn empty_router() -> Router {
    router_with_keys(Vec::<String>::new())
}

/// Drive one GET request through the router, returning status and JSON body.
pub async fn get(router: &Router, path: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}
