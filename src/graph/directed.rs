use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::Zero;
use std::fmt::Debug;

/// A directed graph over dense node ids, stored as adjacency lists.
///
/// Node ids are assigned densely from zero, which lets the shortest path
/// engine index its per-node state arrays directly. Edges are immutable
/// once added; self-loops and parallel edges are allowed and the
/// relaxation step naturally picks the cheapest.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Outgoing edges per node: `edges[u]` holds `(v, weight)` pairs
    edges: Vec<Vec<(usize, W)>>,
    edge_count: usize,
}

impl<W> DirectedGraph<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        DirectedGraph {
            edges: Vec::new(),
            edge_count: 0,
        }
    }

    /// Creates a graph with `nodes` nodes and no edges
    pub fn with_nodes(nodes: usize) -> Self {
        DirectedGraph {
            edges: vec![Vec::new(); nodes],
            edge_count: 0,
        }
    }

    /// Adds a node and returns its id
    pub fn add_node(&mut self) -> usize {
        self.edges.push(Vec::new());
        self.edges.len() - 1
    }

    /// Adds a directed edge from `from` to `to` with the given weight.
    ///
    /// Rejects endpoints outside `0..node_count()` and negative weights.
    /// Negative weights would silently break the shortest path algorithm,
    /// so they are refused here rather than checked during a run.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        if from >= self.edges.len() || to >= self.edges.len() {
            return Err(Error::InvalidEdge(from, to));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(from, to));
        }
        self.edges[from].push((to, weight));
        self.edge_count += 1;
        Ok(())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Copy + Ord + Zero + Debug,
{
    fn default() -> Self {
        DirectedGraph::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Copy + Ord + Zero + Debug,
{
    fn node_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.edges.get(node) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_node(&self, node: usize) -> bool {
        node < self.edges.len()
    }
}
