use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flipside::ai::{actions, utility};
use flipside::core::{Board, Side};

fn eval_benchmark(c: &mut Criterion) {
    let board = Board::new(8, 8).unwrap();

    c.bench_function("actions", |b| {
        b.iter(|| actions(black_box(&board), black_box(Side::X)))
    });

    c.bench_function("has_legal_moves", |b| {
        b.iter(|| black_box(&board).has_legal_moves_remaining(black_box(Side::O)))
    });

    c.bench_function("utility", |b| {
        b.iter(|| utility(black_box(&board), black_box(Side::X)))
    });
}

criterion_group!(benches, eval_benchmark);
criterion_main!(benches);
