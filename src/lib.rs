//! Blockfall (workspace facade crate).
//!
//! The engine, input mapping and terminal renderer live in dedicated crates
//! under `crates/` and are re-exported here as `blockfall::{core,input,term,types}`.
//! This package adds the host-side pieces the binary wires together:
//! configuration, the gravity timer and the optional event log.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub mod config;
pub mod event_log;
pub mod scheduler;
