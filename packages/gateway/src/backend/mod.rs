//! Backend abstraction for the gateway.
//!
//! The [`DatabaseBackend`] trait is the contract between the HTTP handler
//! layer and whatever actually carries out an operation. Handlers own method
//! checks and payload validation; a backend only ever sees typed payloads.
//!
//! # Implementations
//!
//! | Type | Behaviour |
//! |------|-----------|
//! | [`SimulatedBackend`] | Canned, deterministic results; no database contact |
//!
//! [`SimulatedBackend`]: simulated::SimulatedBackend

pub mod simulated;

use async_trait::async_trait;
use dreamdb::{QueryPayload, QueryRow, SyncPayload, SyncReport};

/// Errors that backend operations can return.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The database endpoint could not be reached.
    #[error("backend unavailable: {0}")]
    Unavailable(String),

    /// Any other failure inside the backend.
    #[error("internal backend error: {0}")]
    Internal(String),
}

/// Carries out gateway operations on behalf of the handlers.
#[async_trait]
pub trait DatabaseBackend: Send + Sync + 'static {
    /// Run a query and return its rows.
    async fn execute_query(&self, payload: &QueryPayload) -> Result<Vec<QueryRow>, BackendError>;

    /// Synchronize the listed tables between the two endpoints.
    async fn sync_tables(&self, payload: SyncPayload) -> Result<SyncReport, BackendError>;
}
