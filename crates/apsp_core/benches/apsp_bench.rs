use std::hint::black_box;

use apsp_core::{
    engine::optimizer::optimize_block,
    layout::BlockLayout,
    matrix::{infinity::infinitize, padding::pad, transpose::transpose_into},
    params::ApspParams,
    shortest_paths,
};
use criterion::{Criterion, criterion_group, criterion_main};

#[path = "../tests/test_utils/mod.rs"]
mod test_utils;

use test_utils::random_graph;

const SEED: u64 = 10302011;

fn optimizer_benchmark(c: &mut Criterion) {
    let graph = random_graph(200, 0.05, SEED);
    let layout = BlockLayout::new(200, 1).unwrap();

    let mut matrix = pad(&graph, layout.padded());
    infinitize(layout.padded(), &mut matrix, layout.sentinel());
    let mut transposed = vec![0; layout.matrix_len()];
    let mut block = vec![0; layout.block_len()];

    c.bench_function("transpose 200", |b| {
        b.iter(|| transpose_into(layout.padded(), black_box(&matrix), &mut transposed))
    });

    transpose_into(layout.padded(), &matrix, &mut transposed);
    c.bench_function("optimize_block 200", |b| {
        b.iter(|| {
            optimize_block(
                &layout,
                0,
                black_box(&matrix),
                black_box(&transposed),
                &mut block,
            )
        })
    });
}

fn shortest_paths_benchmark(c: &mut Criterion) {
    let graph = random_graph(200, 0.05, SEED);

    for workers in [1, 2, 4] {
        let params = ApspParams::with_workers(workers);
        c.bench_function(&format!("shortest_paths 200 ({workers} workers)"), |b| {
            b.iter(|| shortest_paths(black_box(&graph), &params))
        });
    }
}

criterion_group!(benches, optimizer_benchmark, shortest_paths_benchmark);
criterion_main!(benches);
