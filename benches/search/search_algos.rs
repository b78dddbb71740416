use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gs_core::graph::AdjacencyGraph;
use gs_core::search::{bfs::Bfs, dfs::Dfs, dijkstra::Dijkstra};
use rand::{rngs::StdRng, Rng, SeedableRng};

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

/// Random directed graph with `n` vertices and roughly `4 * n` edges.
fn random_graph(n: u32) -> AdjacencyGraph<u32> {
    let mut rng = StdRng::seed_from_u64(20231113);
    let mut g = AdjacencyGraph::new();

    for v in 0..n {
        g.add_vertex(v);
    }
    for _ in 0..4 * n {
        let source = rng.gen_range(0..n);
        let target = rng.gen_range(0..n);
        g.add_edge(source, target, rng.gen_range(1..100) as f64);
    }

    g
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let graph = random_graph(10_000);
    let source = 0;
    let target = 9_999;

    c.bench_with_input(
        BenchmarkId::new("dfs", "random_10k"),
        &graph,
        |b, g| {
            b.iter(|| {
                let mut dfs = Dfs::new(g);
                dfs.search(&source, &target)
            })
        },
    );

    c.bench_with_input(
        BenchmarkId::new("bfs", "random_10k"),
        &graph,
        |b, g| {
            b.iter(|| {
                let mut bfs = Bfs::new(g);
                bfs.search(&source, &target)
            })
        },
    );

    c.bench_with_input(
        BenchmarkId::new("dijkstra", "random_10k"),
        &graph,
        |b, g| {
            b.iter(|| {
                let mut dijkstra = Dijkstra::new(g);
                dijkstra.search(&source, &target, |a, b| g.weight(a, b).unwrap())
            })
        },
    );
}
