//! Core data types for the dreamdb gateway.
//!
//! [`QueryPayload`] and [`SyncPayload`] are the validated forms of the two
//! operation bodies; [`QueryRow`] and [`SyncReport`] are what a simulated
//! operation produces. Wire envelopes built on top of these live in the
//! `dreamdb-api` crate.

use serde::{Deserialize, Serialize};

/// The well-known ways a table synchronization runs between the two
/// database endpoints.
///
/// Serialises as a lowercase string (e.g. `"export"`). The gateway does not
/// restrict `direction` to these values; see [`SyncPayload::direction`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SyncDirection {
    /// Push local tables to the remote endpoint.
    Export,
    /// Pull remote tables into the local endpoint.
    Import,
    /// Reconcile both endpoints against each other.
    Bidirectional,
}

impl SyncDirection {
    /// The lowercase wire-format string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncDirection::Export => "export",
            SyncDirection::Import => "import",
            SyncDirection::Bidirectional => "bidirectional",
        }
    }
}

impl std::fmt::Display for SyncDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a [`SyncDirection`] from its lowercase wire-format string.
impl std::str::FromStr for SyncDirection {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "export" => Ok(SyncDirection::Export),
            "import" => Ok(SyncDirection::Import),
            "bidirectional" => Ok(SyncDirection::Bidirectional),
            _ => Err(format!(
                "unknown sync direction {s:?}; expected one of: export, import, bidirectional"
            )),
        }
    }
}

/// The body of an execute-query request after lenient extraction.
///
/// Neither field is required. The query text is never executed, so its
/// content is carried only for logging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryPayload {
    /// The SQL text, if the caller supplied a string.
    pub query: Option<String>,
    /// Positional parameters, passed through uninterpreted.
    pub params: Vec<serde_json::Value>,
}

/// The body of a sync-databases request after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncPayload {
    /// The caller's `direction` exactly as sent, or `None` when absent.
    /// Any JSON value is accepted and echoed back untouched.
    pub direction: Option<serde_json::Value>,
    /// Table names in the order the caller listed them. Duplicates are kept.
    pub tables: Vec<String>,
}

impl SyncPayload {
    /// The direction as a [`SyncDirection`], if it is one of the well-known values.
    pub fn known_direction(&self) -> Option<SyncDirection> {
        known_direction(self.direction.as_ref())
    }
}

/// One row of a simulated query result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryRow {
    pub id: u64,
    pub success: bool,
    pub message: String,
}

/// Summary of a simulated table synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub direction: Option<serde_json::Value>,
    pub tables: Vec<String>,
    /// Number of rows that would have been copied.
    pub synced_items: u64,
    pub message: String,
}

/// Interpret a raw `direction` value as a [`SyncDirection`] when possible.
pub fn known_direction(value: Option<&serde_json::Value>) -> Option<SyncDirection> {
    value?.as_str()?.parse().ok()
}
