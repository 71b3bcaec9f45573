//! Collision detection between a shape and the board.

use crate::board::Board;
use crate::pieces::Shape;
use crate::types::Pos;

/// Whether `shape` anchored at `anchor` hits a wall, the floor or a filled cell.
///
/// Cells above the top edge (negative row) only collide with the side walls,
/// so a piece may sit partially above the visible field.
pub fn collides(shape: &Shape, anchor: Pos, board: &Board) -> bool {
    let width = board.width() as i32;
    let height = board.height() as i32;
    shape.cells_at(anchor).any(|pos| {
        pos.col < 0
            || pos.col >= width
            || pos.row >= height
            || (pos.row >= 0 && board.is_occupied(pos.row, pos.col))
    })
}
