//! Deterministic simulation of the two database operations.
//!
//! Nothing here touches a database. Each function is a pure function of its
//! payload and returns what a successful real operation would have reported.

use crate::types::{QueryPayload, QueryRow, SyncPayload, SyncReport};

/// Rows a simulated sync claims to copy for every table.
pub const SYNCED_ITEMS_PER_TABLE: u64 = 5;

/// The `id` of the single row a simulated query returns.
pub const SIMULATED_ROW_ID: u64 = 1;

/// Success message returned by every simulated query.
pub const QUERY_SUCCESS_MESSAGE: &str = "تم تنفيذ الاستعلام بنجاح (محاكاة)";

/// Success message for a simulated sync of `table_count` tables.
pub fn sync_success_message(table_count: usize) -> String {
    format!("تمت مزامنة {table_count} جداول بنجاح (محاكاة)")
}

/// Simulate executing a query.
///
/// The query text and parameters are ignored; the result is always a single
/// successful row.
pub fn simulate_query(_payload: &QueryPayload) -> Vec<QueryRow> {
    vec![QueryRow {
        id: SIMULATED_ROW_ID,
        success: true,
        message: QUERY_SUCCESS_MESSAGE.to_string(),
    }]
}

/// Simulate synchronizing `payload.tables`. The direction is echoed untouched.
pub fn simulate_sync(payload: SyncPayload) -> SyncReport {
    let count = payload.tables.len();
    SyncReport {
        direction: payload.direction,
        synced_items: count as u64 * SYNCED_ITEMS_PER_TABLE,
        message: sync_success_message(count),
        tables: payload.tables,
    }
}
