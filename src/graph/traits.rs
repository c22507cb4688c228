use num_traits::Zero;
use std::fmt::Debug;

/// Trait representing a weighted directed graph with dense node ids.
///
/// Nodes are identified by integers in `0..node_count()`. The graph is
/// read-only through this trait; shortest path runs never mutate it, so a
/// shared reference may back any number of concurrent runs as long as each
/// run owns its own queue and state.
pub trait Graph<W>: Debug
where
    W: Copy + Ord + Zero + Debug,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges of a node as
    /// `(destination, weight)` pairs, in insertion order. Unknown node ids
    /// yield an empty iterator.
    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the node id exists in the graph
    fn has_node(&self, node: usize) -> bool;
}
