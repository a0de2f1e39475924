//! Execute-query handler — `POST /api/db/execute-query`.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use dreamdb::parse_query_body;
use dreamdb_api::QueryResponse;

use crate::error::AppError;

use super::AppState;

/// `POST /api/db/execute-query` — run a query against the backend.
///
/// The body is read leniently: missing fields, wrongly typed fields and
/// non-JSON bodies all reach the backend as a default payload instead of
/// failing the request. Only a body over the size limit is refused (413).
pub async fn execute(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<QueryResponse>, AppError> {
    let payload = parse_query_body(&body?);
    tracing::debug!(
        query_len = payload.query.as_deref().map_or(0, str::len),
        params = payload.params.len(),
        "execute-query received"
    );

    let rows = state.backend.execute_query(&payload).await?;
    tracing::info!(rows = rows.len(), "execute-query completed");
    Ok(Json(rows.into()))
}
