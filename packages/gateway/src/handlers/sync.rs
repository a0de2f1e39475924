//! Sync-databases handler — `POST /api/db/sync-databases`.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use dreamdb::parse_sync_body;
use dreamdb_api::SyncResponse;

use crate::error::AppError;

use super::AppState;

/// `POST /api/db/sync-databases` — synchronize tables between the endpoints.
///
/// Returns 400 if the body is not a JSON object or `tables` is missing or not
/// an array of strings. `direction` is echoed back as sent, whatever it is.
pub async fn sync_databases(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SyncResponse>, AppError> {
    let payload = parse_sync_body(&body?).map_err(|e| {
        tracing::warn!("sync-databases rejected: {e}");
        AppError::from(e)
    })?;
    let direction = payload.known_direction();
    let table_count = payload.tables.len();

    let report = state.backend.sync_tables(payload).await?;
    tracing::info!(
        ?direction,
        tables = table_count,
        synced_items = report.synced_items,
        "sync-databases completed"
    );
    Ok(Json(report.into()))
}
