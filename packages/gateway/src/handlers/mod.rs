//! HTTP request handlers for the gateway endpoints.
//!
//! Each submodule covers one endpoint. Handlers are async functions that
//! receive Axum extractors and return `Result<impl IntoResponse, AppError>`.
//! Method checks happen in the router before any handler runs; payload
//! validation happens here, never in the backend.

pub mod query;
pub mod status;
pub mod sync;

use std::sync::Arc;

use crate::{backend::DatabaseBackend, config::GatewayConfig, error::AppError};

/// Shared application state threaded through all Axum handlers via [`axum::extract::State`].
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn DatabaseBackend>,
    pub config: GatewayConfig,
}

/// Fallback for a known path reached with a method it does not serve.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Fallback for any path the gateway does not serve.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
