//! Sync-databases types — `POST /api/db/sync-databases`.

use dreamdb::{known_direction, SyncDirection, SyncReport};
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/db/sync-databases`.
///
/// The gateway accepts any `direction` value (or none); this type is the
/// shape clients using the well-known directions are expected to send.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyncRequest {
    pub direction: SyncDirection,

    /// Table names to synchronize, in order.
    pub tables: Vec<String>,
}

impl SyncRequest {
    pub fn new<I, S>(direction: SyncDirection, tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            direction,
            tables: tables.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response body for `POST /api/db/sync-databases`.
///
/// `direction` echoes whatever the request carried and is omitted when the
/// request had none.
///
/// # Example
///
/// ```json
/// {
///   "success": true,
///   "direction": "export",
///   "tables": ["users", "dreams"],
///   "syncedItems": 10,
///   "message": "تمت مزامنة 2 جداول بنجاح (محاكاة)"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<serde_json::Value>,
    pub tables: Vec<String>,
    pub synced_items: u64,
    pub message: String,
}

impl SyncResponse {
    /// The echoed direction as a [`SyncDirection`], if it is a well-known value.
    pub fn known_direction(&self) -> Option<SyncDirection> {
        known_direction(self.direction.as_ref())
    }
}

impl From<SyncReport> for SyncResponse {
    fn from(report: SyncReport) -> Self {
        Self {
            success: true,
            direction: report.direction,
            tables: report.tables,
            synced_items: report.synced_items,
            message: report.message,
        }
    }
}
