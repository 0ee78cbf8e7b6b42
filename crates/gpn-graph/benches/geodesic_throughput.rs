use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use gpn_graph::{complete_bipartite, geodesic_path_count, seeded_connected};

fn bench_geodesic(c: &mut Criterion) {
    let mut group = c.benchmark_group("geodesic_path_count");
    for size in [4usize, 8, 12] {
        let complete = complete_bipartite(size, size).unwrap();
        group.bench_with_input(
            BenchmarkId::new("complete", size),
            &complete,
            |b, graph| b.iter(|| geodesic_path_count(graph, true)),
        );

        let sparse = seeded_connected(size, size, 3 * size).unwrap();
        group.bench_with_input(BenchmarkId::new("sparse", size), &sparse, |b, graph| {
            b.iter(|| geodesic_path_count(graph, true))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_geodesic);
criterion_main!(benches);
