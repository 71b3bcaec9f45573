//! Game state module - the engine
//!
//! [`GameState`] ties together the board, the active piece, the piece queue and
//! scoring. All mutation goes through [`GameState::apply_command`] and
//! [`GameState::tick`]; both are synchronous and never fail. Rejected moves are
//! silent no-ops, and once the game is over every call is a no-op.
//!
//! The engine does not own a clock. Hosts call `tick` at [`GameState::tick_interval`]
//! and watch for [`GameEvent::TickIntervalChanged`] to reschedule.

use std::time::Duration;

use crate::collision::collides;
use crate::pieces::{template, Shape};
use crate::rng::{PieceQueue, ShapeSource, UniformSource};
use crate::scoring::{level_for_lines, line_clear_score, next_tick_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;
use crate::Board;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub shape: Shape,
    /// Board position of the shape matrix's top-left corner
    pub anchor: Pos,
}

impl Tetromino {
    pub fn new(shape: Shape, anchor: Pos) -> Self {
        Self { shape, anchor }
    }

    pub fn kind(&self) -> PieceKind {
        self.shape.kind()
    }

    /// Absolute board positions of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = Pos> {
        self.shape.cells_at(self.anchor)
    }

    /// Check if the piece overlaps a wall, the floor or a filled cell
    pub fn collides(&self, board: &Board) -> bool {
        collides(&self.shape, self.anchor, board)
    }
}

/// Outcome of a gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// The piece moved down one row
    Fell,
    /// The piece could not fall, was locked, and the next piece spawned
    Locked,
    /// The game is over; nothing changed
    Halted,
}

/// Spawn anchor: top row, horizontally centred (column 4 on a 10-wide board)
pub fn spawn_anchor(board_width: usize) -> Pos {
    Pos::new(0, (board_width / 2).saturating_sub(1) as i32)
}

/// Complete game state
#[derive(Debug)]
pub struct GameState {
    board: Board,
    active: Tetromino,
    queue: PieceQueue,
    score: u32,
    lines: u32,
    level: u32,
    tick_interval_ms: u32,
    game_over: bool,
    /// Pieces spawned so far, including the first
    pieces_spawned: u32,
    /// Events not yet taken by the host
    events: Vec<GameEvent>,
}

impl GameState {
    /// Start a game on an empty `width` x `height` board
    pub fn new(width: usize, height: usize, source: impl ShapeSource + Send + 'static) -> Self {
        Self::with_board(Board::new(width, height), source)
    }

    /// Start a game on a standard board with a seeded uniform randomizer
    pub fn with_seed(seed: u64) -> Self {
        Self::new(
            DEFAULT_BOARD_WIDTH,
            DEFAULT_BOARD_HEIGHT,
            UniformSource::from_seed(seed),
        )
    }

    /// Start a game on a prepared board.
    ///
    /// The first piece spawns immediately; if it collides the game is over at once.
    pub fn with_board(board: Board, source: impl ShapeSource + Send + 'static) -> Self {
        let mut queue = PieceQueue::new(source);
        let active = Tetromino::new(*template(queue.draw()), spawn_anchor(board.width()));

        let mut state = Self {
            board,
            active,
            queue,
            score: 0,
            lines: 0,
            level: 1,
            tick_interval_ms: INITIAL_TICK_MS,
            game_over: false,
            pieces_spawned: 1,
            events: Vec::new(),
        };
        state.check_spawn();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.queue.peek()
    }

    /// Spawn-orientation shape of the next piece (for the preview panel)
    pub fn next_shape(&self) -> &'static Shape {
        template(self.queue.peek())
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    /// Current gravity interval
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms as u64)
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Pending events, oldest first
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take and clear all pending events
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Apply a player command. Returns true if the active piece changed.
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.move_piece(-1, 0),
            Command::MoveRight => self.move_piece(1, 0),
            Command::SoftDrop => self.move_piece(0, 1),
            Command::Rotate => self.rotate(),
        }
    }

    /// Try to shift the active piece by `dx` columns and `dy` rows
    pub fn move_piece(&mut self, dx: i32, dy: i32) -> bool {
        if self.game_over {
            return false;
        }

        let candidate = self.active.anchor.offset(dx, dy);
        if collides(&self.active.shape, candidate, &self.board) {
            return false;
        }

        self.active.anchor = candidate;
        true
    }

    /// Try to rotate the active piece clockwise in place (no wall kicks)
    pub fn rotate(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let candidate = self.active.shape.rotated_cw();
        if collides(&candidate, self.active.anchor, &self.board) {
            return false;
        }

        self.active.shape = candidate;
        true
    }

    /// Gravity step: fall one row, or lock and spawn the next piece
    pub fn tick(&mut self) -> TickResult {
        if self.game_over {
            return TickResult::Halted;
        }

        if self.move_piece(0, 1) {
            TickResult::Fell
        } else {
            self.lock_piece();
            TickResult::Locked
        }
    }

    /// Row the active piece would land on if dropped straight down
    pub fn ghost_row(&self) -> i32 {
        let mut anchor = self.active.anchor;
        while !collides(&self.active.shape, anchor.offset(0, 1), &self.board) {
            anchor = anchor.offset(0, 1);
        }
        anchor.row
    }

    /// Lock the active piece onto the board, clear lines and spawn the next piece
    fn lock_piece(&mut self) {
        let kind = self.active.kind();
        self.board.lock_cells(self.active.cells(), kind);
        self.clear_lines();
        self.spawn_next();
    }

    /// Remove full rows and apply score/level changes. Returns rows removed.
    fn clear_lines(&mut self) -> u32 {
        let cleared = self.board.clear_full_rows().len() as u32;
        self.lines += cleared;

        if cleared > 0 {
            self.score = self.score.saturating_add(line_clear_score(cleared));
            self.events.push(GameEvent::LinesCleared(cleared));
            self.update_level();
        }

        cleared
    }

    /// Raise the level if enough lines were cleared.
    ///
    /// The interval drops by a single step per call even if several levels
    /// were gained at once.
    fn update_level(&mut self) {
        let new_level = level_for_lines(self.lines);
        if new_level <= self.level {
            return;
        }

        self.level = new_level;
        self.events.push(GameEvent::LevelUp(new_level));

        let interval = next_tick_interval_ms(self.tick_interval_ms);
        if interval != self.tick_interval_ms {
            self.tick_interval_ms = interval;
            self.events
                .push(GameEvent::TickIntervalChanged(self.tick_interval()));
        }
    }

    /// Promote the look-ahead piece to active and generate a new look-ahead
    fn spawn_next(&mut self) {
        let kind = self.queue.draw();
        self.active = Tetromino::new(*template(kind), spawn_anchor(self.board.width()));
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.check_spawn();
    }

    fn check_spawn(&mut self) {
        if self.active.collides(&self.board) {
            self.game_over = true;
            self.events.push(GameEvent::GameOver);
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.width = self.board.width();
        out.height = self.board.height();
        out.active = ActiveSnapshot::from(self.active);
        out.ghost_row = self.ghost_row();
        out.next = *self.next_shape();
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.tick_interval_ms = self.tick_interval_ms;
        out.game_over = self.game_over;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::new(self.active.into(), *self.next_shape());
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
