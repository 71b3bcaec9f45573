//! Pieces module - tetromino shape matrices and rotation
//!
//! Each shape is a small boolean matrix (at most 4x4). The seven spawn templates
//! live in a static table and are handed out by reference; rotating a shape
//! always produces a new matrix and never touches the template.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Pos};

/// Largest matrix side length of any tetromino rotation
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a filled cell relative to the matrix's top-left corner, as (row, col)
pub type MinoOffset = (i32, i32);

/// Filled cells of a shape, in row-major order
pub type Minos = ArrayVec<MinoOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// One rotation state of a tetromino
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    kind: PieceKind,
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_ROWS: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const J_ROWS: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const L_ROWS: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];

/// Spawn orientation of every kind, indexed in `PieceKind::ALL` order
static TEMPLATES: [Shape; 7] = [
    Shape::from_rows(PieceKind::I, I_ROWS),
    Shape::from_rows(PieceKind::O, O_ROWS),
    Shape::from_rows(PieceKind::T, T_ROWS),
    Shape::from_rows(PieceKind::S, S_ROWS),
    Shape::from_rows(PieceKind::Z, Z_ROWS),
    Shape::from_rows(PieceKind::J, J_ROWS),
    Shape::from_rows(PieceKind::L, L_ROWS),
];

/// Get the spawn-orientation template for a piece kind
pub fn template(kind: PieceKind) -> &'static Shape {
    match kind {
        PieceKind::I => &TEMPLATES[0],
        PieceKind::O => &TEMPLATES[1],
        PieceKind::T => &TEMPLATES[2],
        PieceKind::S => &TEMPLATES[3],
        PieceKind::Z => &TEMPLATES[4],
        PieceKind::J => &TEMPLATES[5],
        PieceKind::L => &TEMPLATES[6],
    }
}

impl Shape {
    /// Build a shape from a row-major 0/1 matrix of at most 4x4.
    const fn from_rows(kind: PieceKind, rows: &[&[u8]]) -> Self {
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut cols = 0;
        let mut r = 0;
        while r < rows.len() {
            let row = rows[r];
            if row.len() > cols {
                cols = row.len();
            }
            let mut c = 0;
            while c < row.len() {
                bits[r][c] = row[c] != 0;
                c += 1;
            }
            r += 1;
        }
        Self {
            kind,
            rows: rows.len() as u8,
            cols: cols as u8,
            bits,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Matrix height
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Matrix width
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether matrix cell (row, col) is filled; out-of-matrix reads are empty
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits[row][col]
    }

    /// Filled cells as (row, col) offsets from the top-left corner
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for r in 0..self.rows() {
            for c in 0..self.cols() {
                if self.bits[r][c] {
                    out.push((r as i32, c as i32));
                }
            }
        }
        out
    }

    /// Absolute board positions of the filled cells when anchored at `anchor`
    pub fn cells_at(&self, anchor: Pos) -> impl Iterator<Item = Pos> {
        self.minos()
            .into_iter()
            .map(move |(dr, dc)| Pos::new(anchor.row + dr, anchor.col + dc))
    }

    /// Clockwise rotation: transpose of the row-reversed matrix.
    pub fn rotated_cw(&self) -> Self {
        let (rows, cols) = (self.rows(), self.cols());
        let mut bits = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, out_row) in bits.iter_mut().enumerate().take(cols) {
            for (c, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.bits[rows - 1 - c][r];
            }
        }
        Self {
            kind: self.kind,
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shape: &Shape) -> Vec<String> {
        (0..shape.rows())
            .map(|r| {
                (0..shape.cols())
                    .map(|c| if shape.is_filled(r, c) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_templates_have_four_minos() {
        for kind in PieceKind::ALL {
            let shape = template(kind);
            assert_eq!(shape.kind(), kind);
            assert_eq!(shape.minos().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_t_template_layout() {
        assert_eq!(render(template(PieceKind::T)), vec![".#.", "###"]);
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let rotated = template(PieceKind::T).rotated_cw();
        assert_eq!(rotated.rows(), 3);
        assert_eq!(rotated.cols(), 2);
        assert_eq!(render(&rotated), vec!["#.", "##", "#."]);
    }

    #[test]
    fn test_rotate_i_becomes_vertical() {
        let rotated = template(PieceKind::I).rotated_cw();
        assert_eq!(render(&rotated), vec!["#", "#", "#", "#"]);
    }

    #[test]
    fn test_rotate_l_clockwise() {
        let rotated = template(PieceKind::L).rotated_cw();
        assert_eq!(render(&rotated), vec!["#.", "#.", "##"]);
    }

    #[test]
    fn test_rotation_leaves_template_untouched() {
        let before = *template(PieceKind::S);
        let _ = template(PieceKind::S).rotated_cw();
        assert_eq!(*template(PieceKind::S), before);
    }

    #[test]
    fn test_cells_at_offsets_by_anchor() {
        let cells: Vec<Pos> = template(PieceKind::O).cells_at(Pos::new(5, 3)).collect();
        assert_eq!(
            cells,
            vec![
                Pos::new(5, 3),
                Pos::new(5, 4),
                Pos::new(6, 3),
                Pos::new(6, 4)
            ]
        );
    }
}
