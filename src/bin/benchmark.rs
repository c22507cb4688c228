use heap_sssp::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use heap_sssp::graph::generators::random_graph;
use heap_sssp::graph::Graph;
use std::time::{Duration, Instant};

/// Times a single full run and reports the reachable node count
fn run_once(graph: &heap_sssp::DirectedGraph<u64>, source: usize) -> (Duration, usize) {
    let dijkstra = Dijkstra::new();

    let start = Instant::now();
    let result = dijkstra
        .compute_shortest_paths(graph, source)
        .expect("source node exists");
    let duration = start.elapsed();

    let reachable = result.distances.iter().filter(|d| d.is_some()).count();
    (duration, reachable)
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Average number of edges per node
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra with lazy-deletion binary heap");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = random_graph(size, edge_factor);
        let source = 0;

        println!(
            "Graph has {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        let (duration, reachable) = run_once(&graph, source);
        println!("  - Found {} reachable nodes in {:?}", reachable, duration);

        results.push((size, duration, reachable));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<10}", "Nodes", "Time (ms)", "Reachable");
    println!("-----------------------------------------------------");

    for (size, duration, reachable) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<10}",
            size,
            duration.as_secs_f64() * 1000.0,
            reachable
        );
    }
}
