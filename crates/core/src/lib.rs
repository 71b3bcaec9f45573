//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has no dependencies on UI, timers, or I/O, making it:
//!
//! - **Deterministic**: Same seed (or scripted source) produces identical games
//! - **Testable**: Unit tests for every rule, integration tests in the facade crate
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: width x height grid with line clearing
//! - [`pieces`]: tetromino shape matrices and clockwise rotation
//! - [`collision`]: shape vs. board collision test
//! - [`rng`]: injected piece sources and the one-piece look-ahead queue
//! - [`scoring`]: line-clear points, levels and gravity intervals
//! - [`game_state`]: the engine (movement, rotation, gravity, lock, spawn)
//! - [`snapshot`]: read-only state copies for renderers
//!
//! # Game Rules
//!
//! - Pieces spawn on the top row, centred, and fall one row per tick
//! - Moves and rotations that would collide are silently rejected (no wall kicks)
//! - A piece that cannot fall locks immediately; full rows are removed
//! - Clearing `n` rows at once scores `100 * n^2`
//! - Every 10 lines raises the level and shortens the tick by 50ms (floor 100ms)
//! - The game ends when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, SequenceSource, TickResult};
//! use blockfall_types::{Command, PieceKind};
//!
//! let mut game = GameState::new(10, 20, SequenceSource::repeat(PieceKind::O));
//!
//! game.apply_command(Command::MoveLeft);
//! game.apply_command(Command::Rotate);
//! while game.tick() == TickResult::Fell {}
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! assert_eq!(game.score(), 0);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! The engine never reads a clock. Call [`GameState::tick`](game_state::GameState::tick)
//! every [`GameState::tick_interval`](game_state::GameState::tick_interval) and
//! reschedule when a `TickIntervalChanged` event is taken.

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::{spawn_anchor, GameState, Tetromino, TickResult};
pub use pieces::{template, Shape};
pub use rng::{BagSource, PieceQueue, SequenceSource, ShapeSource, UniformSource};
pub use scoring::{level_for_lines, line_clear_score, tick_interval_ms_for_level};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
