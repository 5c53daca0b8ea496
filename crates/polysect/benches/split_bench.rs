//! Criterion benchmarks for self-intersection splitting.
//! Focus sizes: n in {8, 32, 128}; tangles use step 3.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polysect::geom2::rand::{draw_star, draw_tangle, ReplayToken, StarCfg, VertexCount};
use polysect::geom2::ClipCfg;
use polysect::split::split_polygon;

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");
    for &n in &[8usize, 32, 128] {
        let cfg = StarCfg {
            vertex_count: VertexCount::Fixed(n),
            ..StarCfg::default()
        };
        group.bench_with_input(BenchmarkId::new("simple_star", n), &n, |b, _| {
            b.iter_batched(
                || draw_star(cfg, ReplayToken { seed: 7, index: 0 }),
                |p| {
                    let _pieces = split_polygon(&p, ClipCfg::default());
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("tangle", n), &n, |b, _| {
            b.iter_batched(
                || draw_tangle(cfg, ReplayToken { seed: 7, index: 0 }, 3),
                |p| {
                    let _pieces = split_polygon(&p, ClipCfg::default());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_split);
criterion_main!(benches);
