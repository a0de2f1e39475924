//! Shared helpers for the dreamdb conformance test suite.
//!
//! Provides [`spawn_gateway`] — a function that binds a `TcpListener` on an
//! ephemeral port, wires up an in-process gateway backed by
//! [`SimulatedBackend`], and returns the local base URL.

use std::sync::Arc;

use dreamdb_gateway::{build_router, DatabaseBackend, GatewayConfig, SimulatedBackend};

/// Start an ephemeral in-process gateway with the simulated backend and
/// return its base URL, e.g. `http://127.0.0.1:51234`.
///
/// # Panics
///
/// Panics if the TCP listener cannot be bound or the gateway fails to start.
pub async fn spawn_gateway() -> String {
    spawn_gateway_with(Arc::new(SimulatedBackend::new())).await
}

/// Like [`spawn_gateway`], but serves the given backend.
pub async fn spawn_gateway_with(backend: Arc<dyn DatabaseBackend>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("get local addr");
    let base_url = format!("http://{addr}");

    let config = GatewayConfig {
        bind_addr: addr,
        max_body_bytes: GatewayConfig::DEFAULT_MAX_BODY_BYTES,
        name: "conformance-gateway".into(),
    };
    let router = build_router(backend, config);

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("conformance gateway error");
    });

    base_url
}
