use crate::game_state::Tetromino;
use crate::pieces::Shape;
use crate::types::{PieceKind, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub anchor: Pos,
}

impl ActiveSnapshot {
    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        self.shape.cells_at(self.anchor)
    }
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            shape: value.shape,
            anchor: value.anchor,
        }
    }
}

/// Read-only copy of everything a renderer or status panel needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major occupancy grid: 0 = empty, otherwise [`PieceKind::code`]
    pub board: Vec<u8>,
    pub active: ActiveSnapshot,
    pub ghost_row: i32,
    pub next: Shape,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub tick_interval_ms: u32,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn new(active: ActiveSnapshot, next: Shape) -> Self {
        Self {
            width: 0,
            height: 0,
            board: Vec::new(),
            active,
            ghost_row: active.anchor.row,
            next,
            score: 0,
            level: 1,
            lines: 0,
            tick_interval_ms: 0,
            game_over: false,
        }
    }

    /// Occupancy code at (row, col); out of bounds reads as empty
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        if row >= self.height || col >= self.width {
            return 0;
        }
        self.board[row * self.width + col]
    }

    pub fn occupied_count(&self) -> usize {
        self.board.iter().filter(|&&c| c != 0).count()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
