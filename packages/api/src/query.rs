//! Execute-query types — `POST /api/db/execute-query`.

use dreamdb::QueryRow;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/db/execute-query`.
///
/// The gateway accepts bodies with either field missing; this type is the
/// well-formed shape clients are expected to send.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct QueryRequest {
    pub query: String,

    #[serde(default)]
    pub params: Vec<serde_json::Value>,
}

impl QueryRequest {
    /// A parameterless query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            params: Vec::new(),
        }
    }
}

/// Response body for `POST /api/db/execute-query`: a bare JSON array of rows.
///
/// ```json
/// [{ "id": 1, "success": true, "message": "تم تنفيذ الاستعلام بنجاح (محاكاة)" }]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct QueryResponse(pub Vec<QueryRow>);

impl From<Vec<QueryRow>> for QueryResponse {
    fn from(rows: Vec<QueryRow>) -> Self {
        Self(rows)
    }
}
