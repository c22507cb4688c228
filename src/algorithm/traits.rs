use crate::graph::Graph;
use crate::Result;
use num_traits::Zero;
use std::fmt::Debug;

/// Result of a shortest path run from a single source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Best distance from the source to each node; `None` means
    /// unreachable
    pub distances: Vec<Option<W>>,

    /// Predecessor of each node on one shortest path; `None` means no path
    /// was found. The source is its own predecessor.
    pub predecessors: Vec<Option<usize>>,

    /// Source node id
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Returns the cost of the shortest path to `node`, or `None` if the
    /// node is unreachable or unknown. Unreachable is a valid outcome, not
    /// an error.
    pub fn cost(&self, node: usize) -> Option<W> {
        self.distances.get(node).copied().flatten()
    }

    /// Returns the predecessor of `node` on a shortest path, or `None` if
    /// the node is unreachable or unknown
    pub fn predecessor(&self, node: usize) -> Option<usize> {
        self.predecessors.get(node).copied().flatten()
    }

    /// Reconstructs a shortest path from the source to `target` as a node
    /// sequence, ends included. Returns `None` for unreachable targets.
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.cost(target)?;

        let mut path = Vec::new();
        let mut current = target;
        while current != self.source {
            path.push(current);
            current = self.predecessors[current]?;
            // A well-formed result cannot loop, but a corrupted one must
            // not hang the caller
            if path.len() > self.predecessors.len() {
                return None;
            }
        }
        path.push(self.source);
        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Copy + Ord + Zero + Debug,
    G: Graph<W>,
{
    /// Computes shortest paths from `source` to every node of the graph
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Returns the name of the algorithm
    fn name(&self) -> &'static str;
}
