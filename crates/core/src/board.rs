//! Board module - manages the game grid
//!
//! The board is a `width` x `height` grid where each cell is either empty or filled
//! with the kind of piece that was locked there.
//! Uses a flat vector (row-major) for cache locality; dimensions are fixed at
//! construction and never change afterwards.
//! Coordinates: (row, col) where row 0 is the top and row `height - 1` the bottom.

use crate::types::{Cell, PieceKind, Pos};

/// The game board, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Borrow a single row
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; a zero-width board has no cells anyway.
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Fill every cell of a row with `kind` (board setup helper)
    pub fn fill_row(&mut self, row: usize, kind: PieceKind) {
        if row >= self.height {
            return;
        }
        let start = row * self.width;
        self.cells[start..start + self.width].fill(Some(kind));
    }

    /// Remove all full rows, shifting the rows above down and inserting empty rows
    /// at the top. Returns the indices (pre-clear, top to bottom) of removed rows.
    ///
    /// Uses a two-pointer pass from the bottom so each row is copied at most once.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let mut cleared_rows = Vec::new();
        let width = self.width;
        let mut write_row = self.height;

        for read_row in (0..self.height).rev() {
            if self.is_row_full(read_row) {
                cleared_rows.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_row * width);
                }
            }
        }

        // Rows left above the write pointer become fresh empty rows.
        self.cells[..write_row * width].fill(None);

        cleared_rows.reverse();
        cleared_rows
    }

    /// Write `kind` into every in-bounds position. Returns how many cells were written;
    /// positions outside the grid (e.g. above the top) are skipped.
    pub fn lock_cells(
        &mut self,
        positions: impl IntoIterator<Item = Pos>,
        kind: PieceKind,
    ) -> usize {
        let mut written = 0;
        for pos in positions {
            if self.set(pos.row, pos.col, Some(kind)) {
                written += 1;
            }
        }
        written
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Write the numeric occupancy grid (0 = empty, 1..=7 = piece code) into `out`.
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|cell| cell.map_or(0, |kind| kind.code())));
    }
}
