//! Gateway status handler — `GET /api/db/status`.

use axum::{extract::State, Json};
use dreamdb_api::GatewayInfo;

use super::AppState;

/// `GET /api/db/status`
///
/// Returns the gateway's name, version, and served operations.
pub async fn status(State(state): State<AppState>) -> Json<GatewayInfo> {
    Json(GatewayInfo::simulated(
        &state.config.name,
        env!("CARGO_PKG_VERSION"),
    ))
}
