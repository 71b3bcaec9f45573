use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{collides, template, Board, GameState};
use blockfall::types::{Command, PieceKind, Pos};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state = GameState::with_seed(12345);
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20);
            for row in 16..20 {
                board.fill_row(row, PieceKind::I);
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut board = Board::new(10, 20);
    for row in 10..20 {
        board.set(row, 3, Some(PieceKind::Z));
    }
    let shape = template(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| collides(black_box(shape), black_box(Pos::new(8, 2)), &board))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);
    let mut left = true;

    c.bench_function("apply_command_move", |b| {
        b.iter(|| {
            let command = if left {
                Command::MoveLeft
            } else {
                Command::MoveRight
            };
            if !state.apply_command(command) {
                left = !left;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("apply_command_rotate", |b| {
        b.iter(|| {
            state.apply_command(Command::Rotate);
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::with_seed(12345);
    let mut snap = state.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collides,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
