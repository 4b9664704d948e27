use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use collabgraph::algo::{betweenness_centrality, label_propagation, page_rank};
use collabgraph::algo::{LabelPropagationConfig, PageRankConfig};
use collabgraph::graph::{Backing, GraphStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random interaction graph with roughly `degree` outgoing edges per vertex
fn random_graph(backing: Backing, n: usize, degree: usize) -> Box<dyn GraphStore> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut graph = backing.create(n);
    for u in 0..n {
        for _ in 0..degree {
            let v = rng.gen_range(0..n);
            graph.add_edge(u, v).unwrap();
        }
    }
    graph
}

/// Benchmark PageRank on both backings
fn bench_page_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_rank");
    let config = PageRankConfig::default();

    for size in [100, 500, 1000].iter() {
        for backing in [Backing::AdjacencyList, Backing::AdjacencyMatrix] {
            let graph = random_graph(backing, *size, 8);
            group.bench_with_input(BenchmarkId::new(backing.to_string(), size), size, |b, _| {
                b.iter(|| black_box(page_rank(&*graph, &config)));
            });
        }
    }
    group.finish();
}

/// Benchmark Brandes betweenness, sequential and parallel
fn bench_betweenness(c: &mut Criterion) {
    let mut group = c.benchmark_group("betweenness");
    group.sample_size(10);

    for size in [100, 400].iter() {
        let graph = random_graph(Backing::AdjacencyList, *size, 6);
        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| black_box(betweenness_centrality(&*graph, false)));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| black_box(betweenness_centrality(&*graph, true)));
        });
    }
    group.finish();
}

/// Benchmark seeded label propagation
fn bench_label_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_propagation");
    let config = LabelPropagationConfig {
        seed: Some(7),
        ..LabelPropagationConfig::default()
    };

    for size in [100, 1000].iter() {
        for backing in [Backing::AdjacencyList, Backing::AdjacencyMatrix] {
            let graph = random_graph(backing, *size, 4);
            group.bench_with_input(BenchmarkId::new(backing.to_string(), size), size, |b, _| {
                b.iter(|| black_box(label_propagation(&*graph, &config)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_page_rank, bench_betweenness, bench_label_propagation);
criterion_main!(benches);
