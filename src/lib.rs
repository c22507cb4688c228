//! Single-source shortest paths over weighted directed graphs.
//!
//! This crate implements Dijkstra's algorithm on top of a hand-rolled
//! array-backed binary min-heap. The heap has no decrease-key operation:
//! when a node's best known distance improves, a fresh entry is pushed and
//! the stale one is discarded on extraction once the node has settled.
//! Every queue operation stays a single O(log n) pass, at the price of the
//! queue temporarily holding more entries than there are nodes.
//!
//! Edge weights are generic over any ordered type with an additive
//! identity (`u32`, `u64`, `OrderedFloat<f64>`, ...). Negative weights are
//! rejected at graph construction; the algorithm itself assumes they never
//! occur.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use data_structures::MinHeap;
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Edge endpoint out of range: {0} -> {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative weight on edge {0} -> {1}")]
    NegativeWeight(usize, usize),

    #[error("Source node not found in graph")]
    SourceNotFound,

    #[error("Malformed graph file: {0}")]
    MalformedGraph(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
