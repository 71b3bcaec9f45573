//! End-to-end engine scenarios driven only through the public API

use std::time::Duration;

use blockfall::core::{Board, GameState, SequenceSource, TickResult, UniformSource};
use blockfall::types::{Command, GameEvent, PieceKind, Pos};

/// Tick until the active piece locks. Panics if it never does.
fn drop_to_lock(state: &mut GameState) {
    for _ in 0..100 {
        if state.tick() == TickResult::Locked {
            return;
        }
    }
    panic!("piece never locked");
}

fn shift(state: &mut GameState, dx: i32) {
    let command = if dx < 0 {
        Command::MoveLeft
    } else {
        Command::MoveRight
    };
    for _ in 0..dx.abs() {
        assert!(state.apply_command(command));
    }
}

#[test]
fn test_first_piece_spawns_centred() {
    let state = GameState::new(10, 20, SequenceSource::new(vec![PieceKind::T, PieceKind::S]));
    assert_eq!(state.active().kind(), PieceKind::T);
    assert_eq!(state.active().anchor, Pos::new(0, 4));
    assert_eq!(state.next_kind(), PieceKind::S);
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.lines(), 0);
    assert_eq!(state.tick_interval(), Duration::from_millis(500));
    assert!(!state.game_over());
    assert!(state.events().is_empty());
}

#[test]
fn test_lock_on_empty_board_scores_nothing() {
    let mut state = GameState::new(10, 20, SequenceSource::repeat(PieceKind::O));

    // O spawns on rows 0..=1 and falls 18 rows to the floor.
    for _ in 0..18 {
        assert_eq!(state.tick(), TickResult::Fell);
    }
    assert_eq!(state.tick(), TickResult::Locked);

    assert_eq!(state.board().occupied_count(), 4);
    assert_eq!(state.board().get(19, 4), Some(Some(PieceKind::O)));
    assert_eq!(state.board().get(18, 5), Some(Some(PieceKind::O)));
    assert_eq!(state.score(), 0);
    assert_eq!(state.pieces_spawned(), 2);
    assert_eq!(state.active().anchor, Pos::new(0, 4));
    assert!(state.take_events().is_empty());
}

#[test]
fn test_completing_bottom_row_clears_and_scores() {
    let mut state = GameState::new(
        10,
        20,
        SequenceSource::new(vec![PieceKind::I, PieceKind::I, PieceKind::O]),
    );

    // I across columns 0..=3
    shift(&mut state, -4);
    drop_to_lock(&mut state);
    // I across columns 4..=7
    drop_to_lock(&mut state);
    assert_eq!(state.score(), 0);
    assert_eq!(state.board().occupied_count(), 8);

    // O across columns 8..=9 completes row 19
    assert_eq!(state.active().kind(), PieceKind::O);
    shift(&mut state, 4);
    assert!(!state.apply_command(Command::MoveRight));
    drop_to_lock(&mut state);

    assert_eq!(state.lines(), 1);
    assert_eq!(state.score(), 100);
    assert_eq!(state.level(), 1);
    assert_eq!(state.take_events(), vec![GameEvent::LinesCleared(1)]);

    // The O's upper half dropped into the cleared row.
    assert_eq!(state.board().occupied_count(), 2);
    assert_eq!(state.board().get(19, 8), Some(Some(PieceKind::O)));
    assert_eq!(state.board().get(19, 9), Some(Some(PieceKind::O)));
    assert_eq!(state.board().get(18, 8), Some(None));
}

/// Board whose rows `from..height` are full except the last column.
fn well_board(width: usize, height: usize, from: usize) -> Board {
    let mut board = Board::new(width, height);
    for row in from..height {
        for col in 0..width - 1 {
            board.set(row as i32, col as i32, Some(PieceKind::Z));
        }
    }
    board
}

fn drop_vertical_i_into_well(state: &mut GameState) {
    assert_eq!(state.active().kind(), PieceKind::I);
    assert!(state.apply_command(Command::Rotate));
    shift(state, 5);
    drop_to_lock(state);
}

#[test]
fn test_tetrises_level_up_and_speed_up() {
    let mut state = GameState::with_board(
        well_board(10, 20, 8),
        SequenceSource::repeat(PieceKind::I),
    );

    drop_vertical_i_into_well(&mut state);
    assert_eq!(state.lines(), 4);
    assert_eq!(state.score(), 1600);
    assert_eq!(state.take_events(), vec![GameEvent::LinesCleared(4)]);

    drop_vertical_i_into_well(&mut state);
    assert_eq!(state.lines(), 8);
    assert_eq!(state.score(), 3200);
    assert_eq!(state.level(), 1);
    assert_eq!(state.take_events(), vec![GameEvent::LinesCleared(4)]);

    drop_vertical_i_into_well(&mut state);
    assert_eq!(state.lines(), 12);
    assert_eq!(state.score(), 4800);
    assert_eq!(state.level(), 2);
    assert_eq!(state.tick_interval_ms(), 450);
    assert_eq!(
        state.take_events(),
        vec![
            GameEvent::LinesCleared(4),
            GameEvent::LevelUp(2),
            GameEvent::TickIntervalChanged(Duration::from_millis(450)),
        ]
    );
    assert_eq!(state.board().occupied_count(), 0);
}

#[test]
fn test_blocked_spawn_ends_game() {
    let mut board = Board::new(10, 20);
    board.set(0, 5, Some(PieceKind::J));
    let mut state = GameState::with_board(board, SequenceSource::repeat(PieceKind::T));

    assert!(state.game_over());
    assert_eq!(state.take_events(), vec![GameEvent::GameOver]);

    let before = state.snapshot();
    for command in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::Rotate,
    ] {
        assert!(!state.apply_command(command));
    }
    assert_eq!(state.tick(), TickResult::Halted);
    assert_eq!(state.snapshot(), before);
    assert!(state.take_events().is_empty());
}

#[test]
fn test_stack_overflow_ends_game_after_lock() {
    // Narrow board: O pieces stack in the middle until the spawn is blocked.
    let mut state = GameState::new(4, 6, SequenceSource::repeat(PieceKind::O));
    let mut locks = 0;
    while !state.game_over() {
        drop_to_lock(&mut state);
        locks += 1;
        assert!(locks <= 3, "game should end within three locks");
    }
    assert_eq!(locks, 3);
    assert_eq!(state.take_events(), vec![GameEvent::GameOver]);
    assert_eq!(state.tick(), TickResult::Halted);
}

#[test]
fn test_moves_blocked_by_walls_and_stack() {
    let mut state = GameState::new(10, 20, SequenceSource::repeat(PieceKind::O));
    shift(&mut state, -4);
    assert!(!state.apply_command(Command::MoveLeft));
    assert_eq!(state.active().anchor, Pos::new(0, 0));

    for _ in 0..18 {
        assert!(state.apply_command(Command::SoftDrop));
    }
    assert!(!state.apply_command(Command::SoftDrop));
    // Soft drop never locks; only gravity does.
    assert_eq!(state.board().occupied_count(), 0);
    assert_eq!(state.tick(), TickResult::Locked);
    assert_eq!(state.board().occupied_count(), 4);
}

#[test]
fn test_ghost_row_tracks_landing_position() {
    let mut state = GameState::new(10, 20, SequenceSource::repeat(PieceKind::I));
    assert_eq!(state.ghost_row(), 19);
    assert!(state.apply_command(Command::Rotate));
    assert_eq!(state.ghost_row(), 16);

    let snap = state.snapshot();
    assert_eq!(snap.ghost_row, 16);
    assert_eq!(snap.next.kind(), PieceKind::I);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let mut a = GameState::with_seed(77);
    let mut b = GameState::with_seed(77);
    let script = [
        Command::MoveLeft,
        Command::Rotate,
        Command::SoftDrop,
        Command::MoveRight,
    ];
    for step in 0..400 {
        let command = script[step % script.len()];
        assert_eq!(a.apply_command(command), b.apply_command(command));
        assert_eq!(a.tick(), b.tick());
    }
    assert_eq!(a.snapshot(), b.snapshot());
    assert_eq!(a.pieces_spawned(), b.pieces_spawned());
}

#[test]
fn test_locks_conserve_cells_across_seeds_and_sizes() {
    let script = [
        Command::MoveLeft,
        Command::Rotate,
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::MoveRight,
        Command::MoveRight,
    ];
    for (width, height) in [(10, 20), (4, 6), (5, 8)] {
        for seed in 0..100u64 {
            let mut state = GameState::new(width, height, UniformSource::from_seed(seed));
            let mut step = seed as usize;
            while !state.game_over() && step < seed as usize + 2_000 {
                state.apply_command(script[step % script.len()]);
                step += 1;

                let before = state.board().occupied_count();
                if state.tick() != TickResult::Locked {
                    continue;
                }
                let cleared: usize = state
                    .take_events()
                    .iter()
                    .map(|event| match event {
                        GameEvent::LinesCleared(n) => *n as usize,
                        _ => 0,
                    })
                    .sum();
                let after = state.board().occupied_count();
                assert_eq!(
                    after + cleared * width,
                    before + 4,
                    "seed {} on {}x{}",
                    seed,
                    width,
                    height
                );
                assert_eq!(state.board().height(), height);
            }
        }
    }
}
