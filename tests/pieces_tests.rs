//! Shape template and rotation tests

use blockfall::core::{template, Shape};
use blockfall::types::{PieceKind, Pos};

fn minos(shape: &Shape) -> Vec<(i32, i32)> {
    shape.minos().into_iter().collect()
}

// ============== Templates ==============

#[test]
fn test_every_template_has_four_cells() {
    for kind in PieceKind::ALL {
        let shape = template(kind);
        assert_eq!(shape.kind(), kind);
        assert_eq!(shape.minos().len(), 4, "{:?}", kind);
    }
}

#[test]
fn test_template_dimensions() {
    let dims = |k| {
        let s = template(k);
        (s.rows(), s.cols())
    };
    assert_eq!(dims(PieceKind::I), (1, 4));
    assert_eq!(dims(PieceKind::O), (2, 2));
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(dims(kind), (2, 3), "{:?}", kind);
    }
}

#[test]
fn test_template_cells() {
    assert_eq!(minos(template(PieceKind::I)), [(0, 0), (0, 1), (0, 2), (0, 3)]);
    assert_eq!(minos(template(PieceKind::O)), [(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(minos(template(PieceKind::T)), [(0, 1), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(minos(template(PieceKind::S)), [(0, 1), (0, 2), (1, 0), (1, 1)]);
    assert_eq!(minos(template(PieceKind::Z)), [(0, 0), (0, 1), (1, 1), (1, 2)]);
    assert_eq!(minos(template(PieceKind::J)), [(0, 0), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(minos(template(PieceKind::L)), [(0, 2), (1, 0), (1, 1), (1, 2)]);
}

// ============== Rotation ==============

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let shape = template(kind);
        let rotated = shape.rotated_cw();
        assert_eq!(rotated.rows(), shape.cols());
        assert_eq!(rotated.cols(), shape.rows());
        assert_eq!(rotated.kind(), kind);
    }
}

#[test]
fn test_four_rotations_restore_template() {
    for kind in PieceKind::ALL {
        let shape = *template(kind);
        let back = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(back, shape, "{:?}", kind);
    }
}

#[test]
fn test_i_rotates_to_vertical() {
    let vertical = template(PieceKind::I).rotated_cw();
    assert_eq!(minos(&vertical), [(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_t_rotates_clockwise() {
    // .#.      #.
    // ###  ->  ##
    //          #.
    let rotated = template(PieceKind::T).rotated_cw();
    assert_eq!(minos(&rotated), [(0, 0), (1, 0), (1, 1), (2, 0)]);
}

#[test]
fn test_o_is_rotation_invariant() {
    let o = *template(PieceKind::O);
    assert_eq!(o.rotated_cw(), o);
}

#[test]
fn test_cells_at_offsets_from_anchor() {
    let cells: Vec<Pos> = template(PieceKind::O).cells_at(Pos::new(18, 8)).collect();
    assert_eq!(
        cells,
        vec![
            Pos::new(18, 8),
            Pos::new(18, 9),
            Pos::new(19, 8),
            Pos::new(19, 9)
        ]
    );
}
