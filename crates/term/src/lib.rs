//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders a
//! [`core::GameSnapshot`] into a plain framebuffer which is then flushed to the
//! terminal with crossterm, redrawing only the cells that changed.
//!
//! - [`fb`]: framebuffer and cell styles (pure)
//! - [`game_view`]: snapshot to framebuffer layout: field, preview, status panel (pure)
//! - [`renderer`]: crossterm output, raw mode and the alternate screen (I/O)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
