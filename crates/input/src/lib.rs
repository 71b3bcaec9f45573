//! Terminal input module (engine-facing).
//!
//! Translates raw `crossterm` key events into the closed [`crate::types::Command`]
//! set the engine accepts, plus the host-level quit/restart keys. No engine state
//! is touched here; callers pass the resulting command to `apply_command`.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
