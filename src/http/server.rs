//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all API handler
//! - Wire up middleware (timeout, request ID, tracing)
//! - Construct the object-store backend once and share it read-only
//! - Dispatch requests through the ordered route table
//!
//! # Design Decisions
//! - The route table is matched by this crate, not by Axum: the API's
//!   first-match ordering contract lives in `routing`, so Axum only sees a
//!   catch-all
//! - The store handle is built once at startup and injected into state;
//!   handlers never construct clients

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::Request,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{AppConfig, StorageBackend};
use crate::http::request::UuidRequestId;
use crate::http::{handlers, response};
use crate::observability::metrics;
use crate::routing::{default_routes, match_route, Route};
use crate::storage::{MemoryStore, ObjectLister, S3ObjectStore};

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    /// Ordered route table; declaration order is part of the API contract.
    pub routes: Arc<Vec<Route>>,
    /// Shared read-only listing backend.
    pub store: Arc<dyn ObjectLister>,
}

/// HTTP server for the breed image API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration, constructing
    /// the configured storage backend.
    pub fn new(config: AppConfig) -> Self {
        let store: Arc<dyn ObjectLister> = match config.storage.backend {
            StorageBackend::S3 => Arc::new(S3ObjectStore::new(&config.storage)),
            StorageBackend::Memory => {
                Arc::new(MemoryStore::new(config.storage.seed_keys.clone()))
            }
        };
        Self::with_store(config, store)
    }

    /// Create a server around an injected store. Tests use this to run the
    /// full router against a seeded in-memory backend.
    pub fn with_store(config: AppConfig, store: Arc<dyn ObjectLister>) -> Self {
        let state = AppState {
            routes: Arc::new(default_routes()),
            store,
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", get(api_handler))
            .route("/", get(api_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            // Later layers wrap earlier ones: the request id is set before
            // propagation captures it, and tracing sees both.
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
            .layer(TraceLayer::new_for_http())
    }

    /// A clone of the composed router, for driving requests in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Main API handler: route match, parameter validation, endpoint dispatch.
async fn api_handler(State(state): State<AppState>, request: Request<Body>) -> impl IntoResponse {
    let start = Instant::now();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let path = request.uri().path().to_string();
    let method = request.method().to_string();

    // 1. Match Route
    let Some((route, raw_params)) = match_route(&path, &state.routes) else {
        tracing::debug!(request_id = %request_id, path = %path, "No route matched");
        metrics::record_request(&method, 404, "none", start);
        return response::route_not_found();
    };
    let endpoint = route.endpoint;

    // 2. Validate Params
    let params = match raw_params.validate() {
        Ok(params) => params,
        Err(e) => {
            tracing::debug!(
                request_id = %request_id,
                path = %path,
                error = %e,
                "Rejected request parameters"
            );
            metrics::record_request(&method, 400, endpoint.name(), start);
            return response::bad_request(&e.to_string());
        }
    };

    tracing::debug!(
        request_id = %request_id,
        endpoint = endpoint.name(),
        path = %path,
        "Dispatching request"
    );

    // 3. Dispatch
    let result: Response = match handlers::dispatch(endpoint, params, state.store.as_ref()).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                endpoint = endpoint.name(),
                error = %e,
                "Storage listing failed"
            );
            response::upstream_error()
        }
    };

    metrics::record_request(&method, result.status().as_u16(), endpoint.name(), start);
    result
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
