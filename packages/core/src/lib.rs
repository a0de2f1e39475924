//! Core library for the dreamdb database operations gateway.
//!
//! This crate holds everything about the two gateway operations that does
//! not depend on HTTP: the payload types, the validation that turns a raw
//! request body into a typed payload, and the deterministic simulation that
//! produces each operation's result.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`types`] | [`SyncDirection`], [`QueryPayload`], [`SyncPayload`], [`QueryRow`], [`SyncReport`] |
//! | [`validation`] | Body parsing via [`parse_query_body`] and [`parse_sync_body`] |
//! | [`simulation`] | [`simulate_query`] and [`simulate_sync`] |
//!
//! # Quick start
//!
//! ```rust
//! use dreamdb::{parse_sync_body, simulate_sync};
//!
//! let payload = parse_sync_body(br#"{"direction":"export","tables":["users","dreams"]}"#)
//!     .expect("payload should be valid");
//! let report = simulate_sync(payload);
//! assert_eq!(report.synced_items, 10);
//! ```

pub mod simulation;
pub mod types;
pub mod validation;

pub use simulation::{
    simulate_query, simulate_sync, sync_success_message, QUERY_SUCCESS_MESSAGE,
    SIMULATED_ROW_ID, SYNCED_ITEMS_PER_TABLE,
};
pub use types::{known_direction, QueryPayload, QueryRow, SyncDirection, SyncPayload, SyncReport};
pub use validation::{parse_query_body, parse_sync_body, ValidationError};
