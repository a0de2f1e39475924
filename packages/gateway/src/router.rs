//! Assembles the Axum [`Router`] from all handler modules.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use dreamdb_api::paths;
use tower_http::trace::TraceLayer;

use crate::{
    backend::DatabaseBackend,
    config::GatewayConfig,
    handlers::{method_not_allowed, not_found, query, status, sync, AppState},
};

/// Build the complete application router with shared state.
///
/// Each path answers wrong methods with a JSON 405 before its handler runs,
/// so payloads are only inspected for requests with the right verb.
pub fn build_router(backend: Arc<dyn DatabaseBackend>, config: GatewayConfig) -> Router {
    let body_limit = config.max_body_bytes;
    let state = AppState { backend, config };

    Router::new()
        .route(
            paths::EXECUTE_QUERY,
            post(query::execute).fallback(method_not_allowed),
        )
        .route(
            paths::SYNC_DATABASES,
            post(sync::sync_databases).fallback(method_not_allowed),
        )
        .route(paths::STATUS, get(status::status).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
}
