//! `dreamdb-gateway` — simulated database operations gateway.
//!
//! # Quick start
//!
//! ```sh
//! # Default port:
//! dreamdb-gateway
//!
//! # Custom bind address and name:
//! DREAMDB_BIND=127.0.0.1:8080 DREAMDB_NAME=staging dreamdb-gateway
//! ```
//!
//! # Environment variables
//!
//! See [`GatewayConfig::from_env`] for the full list. A `.env` file in the
//! working directory is honoured.

use std::sync::Arc;

use dreamdb_gateway::{build_router, DatabaseBackend, GatewayConfig, SimulatedBackend};

#[tokio::main]
async fn main() {
    let config = GatewayConfig::from_env()
        .unwrap_or_else(|e| panic!("invalid configuration: {e}"));

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "dreamdb_gateway=info,tower_http=debug".into()
            }),
        )
        .init();

    let backend: Arc<dyn DatabaseBackend> = Arc::new(SimulatedBackend::new());
    tracing::info!("backend: simulated (no database is contacted)");

    let bind_addr = config.bind_addr;
    let app = build_router(backend, config);

    tracing::info!("listening on {bind_addr}");
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
