use crate::graph::directed::DirectedGraph;
use rand::Rng;

/// Generates a random directed graph with `nodes` nodes and approximately
/// `edge_factor * nodes` edges with weights in `1..100`.
///
/// Self-loops are skipped; parallel edges may occur, which the shortest
/// path algorithms tolerate.
pub fn random_graph(nodes: usize, edge_factor: f64) -> DirectedGraph<u64> {
    assert!(nodes > 1, "need at least two nodes");

    let mut graph = DirectedGraph::with_nodes(nodes);
    let mut rng = rand::thread_rng();

    let target_edges = (edge_factor * nodes as f64) as usize;
    let mut added = 0;
    while added < target_edges {
        let u = rng.gen_range(0..nodes);
        let v = rng.gen_range(0..nodes);
        if u == v {
            continue;
        }
        let weight = rng.gen_range(1..100u64);
        graph
            .add_edge(u, v, weight)
            .expect("generated endpoints are in range");
        added += 1;
    }

    graph
}
