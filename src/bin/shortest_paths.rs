use anyhow::{Context, Result};
use clap::Parser;
use heap_sssp::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use heap_sssp::graph::{load_graph, DirectedGraph, Graph};

#[derive(Parser, Debug)]
#[command(name = "shortest_paths")]
#[command(about = "Load an edge-list graph file and run Dijkstra from a source node.", long_about = None)]
struct Cli {
    /// Path to the graph file: "<nodes> <edges>" followed by
    /// "<from> <to> <weight>" triples
    #[arg(short, long)]
    graph: String,

    /// Source node id to run from
    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// Include unreachable nodes in the output
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let graph: DirectedGraph<u64> =
        load_graph(&cli.graph).with_context(|| format!("loading {}", &cli.graph))?;

    println!(
        "Graph: {} nodes, {} directed edges",
        graph.node_count(),
        graph.edge_count()
    );

    let result = Dijkstra::new()
        .compute_shortest_paths(&graph, cli.source)
        .with_context(|| format!("running dijkstra from node {}", cli.source))?;

    for node in 0..graph.node_count() {
        match (result.cost(node), result.predecessor(node)) {
            (Some(cost), Some(prev)) => {
                println!("Cost to node {}: {} -- previous node {}", node, cost, prev);
            }
            _ if cli.include_unreachable => {
                println!("Cost to node {}: unreachable", node);
            }
            _ => {}
        }
    }

    let reachable = (0..graph.node_count())
        .filter(|&node| result.cost(node).is_some())
        .count();
    println!("Reachable from {}: {} nodes", cli.source, reachable);

    Ok(())
}
