//! Request and response types for the dreamdb gateway HTTP API.
//!
//! # Endpoints covered
//!
//! | Method | Path | Type |
//! |--------|------|------|
//! | POST | `/api/db/execute-query` | [`QueryRequest`] → [`QueryResponse`] |
//! | POST | `/api/db/sync-databases` | [`SyncRequest`] → [`SyncResponse`] |
//! | GET | `/api/db/status` | → [`GatewayInfo`] |
//!
//! Every error is an [`ErrorResponse`].

pub mod error;
pub mod query;
pub mod status;
pub mod sync;

pub use error::ErrorResponse;
pub use query::{QueryRequest, QueryResponse};
pub use status::{GatewayInfo, Mode, Operation};
pub use sync::{SyncRequest, SyncResponse};

/// Route paths served by the gateway.
pub mod paths {
    pub const EXECUTE_QUERY: &str = "/api/db/execute-query";
    pub const SYNC_DATABASES: &str = "/api/db/sync-databases";
    pub const STATUS: &str = "/api/db/status";
}
