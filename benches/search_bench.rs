use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pprof::criterion::{Output, PProfProfiler};
use flipside::ai::search;
use flipside::core::{Board, Side};

fn search_benchmark(c: &mut Criterion) {
    let endgame = Board::from_fen(".XO.OO.X/.XXOOXXX/XXOXOOXX/XXXOOOO./XXXXOOOO/XXXXOXXX/XXXXXOX./X.XXXXXX").unwrap();
    let opening = Board::new(4, 4).unwrap();

    c.bench_function("search_8x8_endgame", |b| {
        b.iter(|| search(black_box(&endgame), black_box(Side::O)))
    });

    let mut group = c.benchmark_group("full_tree");
    group.sample_size(10);
    group.bench_function("search_4x4_opening", |b| {
        b.iter(|| search(black_box(&opening), black_box(Side::X)))
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = search_benchmark
}
criterion_main!(benches);
