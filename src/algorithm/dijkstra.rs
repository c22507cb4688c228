use log::debug;
use num_traits::Zero;
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazy decrease-key policy.
///
/// The frontier queue never updates an entry in place. Whenever a node's
/// best known distance improves, a fresh entry is pushed at the new
/// distance; the superseded entries stay behind and are dropped on
/// extraction because the node has settled by then. A node may therefore
/// sit in the queue several times with decreasing priorities, and the
/// queue can temporarily outgrow the node count.
///
/// Correctness requires non-negative edge weights. The engine performs no
/// check of its own; [`DirectedGraph::add_edge`](crate::DirectedGraph)
/// refuses negative weights at construction time.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Copy + Ord + Zero + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_node(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.node_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        // A settled node's distance is final and will not change again
        let mut settled = vec![false; n];

        distances[source] = Some(W::zero());
        predecessors[source] = Some(source);

        let mut frontier = MinHeap::new();
        frontier.push(source, W::zero());

        while let Some((u, _)) = frontier.pop() {
            // Stale entry for an already-settled node: a cheaper duplicate
            // was processed earlier
            if settled[u] {
                continue;
            }
            settled[u] = true;

            let dist_u = match distances[u] {
                Some(dist) => dist,
                // Queued nodes always carry a finite distance; skip
                // relaxation if that ever fails to hold
                None => continue,
            };

            for (v, weight) in graph.outgoing_edges(u) {
                let next = dist_u + weight;
                let improved = match distances[v] {
                    None => true,
                    Some(current) => next < current,
                };
                if improved {
                    distances[v] = Some(next);
                    predecessors[v] = Some(u);
                    frontier.push(v, next);
                }
            }
        }

        debug!(
            "dijkstra from {}: {} of {} nodes reachable",
            source,
            distances.iter().filter(|d| d.is_some()).count(),
            n
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
