//! Simulated backend.
//!
//! Every call completes immediately with the deterministic result computed by
//! the `dreamdb` simulation functions. Holds no state, so one instance can be
//! shared by any number of concurrent requests.

use async_trait::async_trait;
use dreamdb::{simulate_query, simulate_sync, QueryPayload, QueryRow, SyncPayload, SyncReport};

use super::{BackendError, DatabaseBackend};

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedBackend;

impl SimulatedBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DatabaseBackend for SimulatedBackend {
    async fn execute_query(&self, payload: &QueryPayload) -> Result<Vec<QueryRow>, BackendError> {
        Ok(simulate_query(payload))
    }

    async fn sync_tables(&self, payload: SyncPayload) -> Result<SyncReport, BackendError> {
        Ok(simulate_sync(payload))
    }
}
