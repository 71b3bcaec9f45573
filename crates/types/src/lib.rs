//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, event logging).
//!
//! # Board Dimensions
//!
//! The standard playfield is 10 columns by 20 rows. Row 0 is the top row and
//! gravity moves pieces towards higher row indices. Other sizes are accepted by
//! the engine, but the defaults below are what the terminal game starts with.
//!
//! # Speed Progression
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TICK_MS` | 500 | Gravity interval at level 1 |
//! | `TICK_STEP_MS` | 50 | Interval decrement per level-up |
//! | `MIN_TICK_MS` | 100 | Fastest gravity interval |
//! | `LINES_PER_LEVEL` | 10 | Lines needed per level |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Pos, DEFAULT_BOARD_WIDTH};
//!
//! let kind = PieceKind::T;
//! assert_eq!(kind.code(), 3);
//! assert_eq!(PieceKind::from_code(3), Some(kind));
//!
//! assert_eq!(Pos::new(0, 4).offset(1, 2), Pos::new(2, 5));
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! ```

use std::time::Duration;

/// Default board dimensions
pub const DEFAULT_BOARD_WIDTH: usize = 10;
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Gravity timing (milliseconds)
pub const INITIAL_TICK_MS: u32 = 500;
pub const TICK_STEP_MS: u32 = 50;
pub const MIN_TICK_MS: u32 = 100;

/// Lines required to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for a line clear, multiplied by the square of the lines cleared
pub const LINE_CLEAR_BASE_SCORE: u32 = 100;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in a fixed order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Non-zero occupancy code used in numeric board grids (1..=7)
    pub fn code(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::code`]; `0` and unknown codes map to `None`
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }
}

/// Discrete player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    Rotate,
}

/// Board coordinate. `row` grows downwards, `col` grows to the right.
///
/// Rows may be negative while a piece sits partially above the visible field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset by `dy` rows and `dx` columns
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            row: self.row + dy,
            col: self.col + dx,
        }
    }
}

/// State changes reported by the engine for UI, audio and scheduling hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// One or more rows were removed by a single lock
    LinesCleared(u32),
    /// The level increased; carries the new level
    LevelUp(u32),
    /// Gravity interval changed; the scheduler must replace its pending tick
    TickIntervalChanged(Duration),
    /// The freshly spawned piece collided; the game is over
    GameOver,
}

impl GameEvent {
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::LinesCleared(_) => "linesCleared",
            GameEvent::LevelUp(_) => "levelUp",
            GameEvent::TickIntervalChanged(_) => "tickIntervalChanged",
            GameEvent::GameOver => "gameOver",
        }
    }
}

/// Cell on the board (None = empty, Some = filled by a piece of that kind)
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_kind_codes_are_nonzero_and_unique() {
        let mut seen = [false; 8];
        for kind in PieceKind::ALL {
            let code = kind.code();
            assert!(code >= 1 && code <= 7);
            assert!(!seen[code as usize], "duplicate code {}", code);
            seen[code as usize] = true;
            assert_eq!(PieceKind::from_code(code), Some(kind));
        }
        assert_eq!(PieceKind::from_code(0), None);
        assert_eq!(PieceKind::from_code(8), None);
    }

    #[test]
    fn test_pos_offset() {
        let p = Pos::new(3, 4);
        assert_eq!(p.offset(-1, 0), Pos::new(3, 3));
        assert_eq!(p.offset(0, 1), Pos::new(4, 4));
    }

    #[test]
    fn test_event_names() {
        assert_eq!(GameEvent::LinesCleared(2).name(), "linesCleared");
        assert_eq!(GameEvent::LevelUp(2).name(), "levelUp");
        assert_eq!(
            GameEvent::TickIntervalChanged(Duration::from_millis(450)).name(),
            "tickIntervalChanged"
        );
        assert_eq!(GameEvent::GameOver.name(), "gameOver");
    }
}
