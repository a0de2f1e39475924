//! Public surface for the `dreamdb-gateway` crate.
//!
//! Exposes the router builder, config, and backend types so that external
//! crates (e.g. the conformance test suite) can spin up an in-process
//! gateway without spawning a subprocess.

pub mod backend;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;

pub use backend::{simulated::SimulatedBackend, BackendError, DatabaseBackend};
pub use config::{ConfigError, GatewayConfig};
pub use router::build_router;
