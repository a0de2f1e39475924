//! Gateway status document — `GET /api/db/status`.

use serde::{Deserialize, Serialize};

/// The response body for `GET /api/db/status`.
///
/// Tells callers which operations the gateway serves and that results are
/// simulated rather than read from a real database.
///
/// # Example
///
/// ```json
/// {
///   "name": "dreamdb-gateway",
///   "version": "0.1.0",
///   "mode": "simulation",
///   "operations": ["execute-query", "sync-databases"]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GatewayInfo {
    pub name: String,
    pub version: String,
    pub mode: Mode,
    pub operations: Vec<Operation>,
}

impl GatewayInfo {
    /// A simulated gateway serving both operations.
    pub fn simulated(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            mode: Mode::Simulation,
            operations: vec![Operation::ExecuteQuery, Operation::SyncDatabases],
        }
    }
}

/// How the gateway produces its results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Results are canned; no database is contacted.
    Simulation,
}

/// Operations a gateway may serve, named by their path segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    ExecuteQuery,
    SyncDatabases,
}
