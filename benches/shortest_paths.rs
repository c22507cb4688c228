use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heap_sssp::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use heap_sssp::graph::generators::random_graph;
use heap_sssp::MinHeap;

fn bench_heap_churn(c: &mut Criterion) {
    c.bench_function("min_heap_push_pop_1k", |b| {
        b.iter(|| {
            let mut heap = MinHeap::with_capacity(1_000);
            for i in 0..1_000u32 {
                heap.push(black_box(i), (i * 7919) % 1_000);
            }
            while let Some(entry) = heap.pop() {
                black_box(entry);
            }
        })
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let graph = random_graph(10_000, 4.0);
    let dijkstra = Dijkstra::new();

    c.bench_function("dijkstra_10k_nodes", |b| {
        b.iter(|| {
            dijkstra
                .compute_shortest_paths(black_box(&graph), 0)
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_heap_churn, bench_dijkstra);
criterion_main!(benches);
