use crate::graph::directed::DirectedGraph;
use crate::{Error, Result};
use log::debug;
use num_traits::Zero;
use std::fmt::Debug;
use std::path::Path;
use std::str::FromStr;

/// Parses a graph from the whitespace-separated edge-list format:
///
/// ```text
/// <node count> <edge count>
/// <from> <to> <weight>
/// ...
/// ```
///
/// Tokens may be split across lines however the producer likes; only their
/// order matters. Edges referencing nodes outside the declared range and
/// negative weights are rejected with the graph-construction errors.
pub fn parse_graph<W>(input: &str) -> Result<DirectedGraph<W>>
where
    W: Copy + Ord + Zero + Debug + FromStr,
{
    let mut tokens = input.split_whitespace();

    let node_count: usize = next_token(&mut tokens, "node count")?;
    let edge_count: usize = next_token(&mut tokens, "edge count")?;

    let mut graph = DirectedGraph::with_nodes(node_count);
    for i in 0..edge_count {
        let from = next_token(&mut tokens, &format!("edge {}: from node", i))?;
        let to = next_token(&mut tokens, &format!("edge {}: to node", i))?;
        let weight: W = next_token(&mut tokens, &format!("edge {}: weight", i))?;
        graph.add_edge(from, to, weight)?;
    }

    if tokens.next().is_some() {
        return Err(Error::MalformedGraph(format!(
            "trailing data after {} declared edges",
            edge_count
        )));
    }

    debug!(
        "parsed graph: {} nodes, {} edges",
        node_count, edge_count
    );
    Ok(graph)
}

/// Loads a graph from an edge-list file (see [`parse_graph`] for the
/// format).
pub fn load_graph<W, P>(path: P) -> Result<DirectedGraph<W>>
where
    W: Copy + Ord + Zero + Debug + FromStr,
    P: AsRef<Path>,
{
    let contents = std::fs::read_to_string(path)?;
    parse_graph(&contents)
}

fn next_token<'a, T, I>(tokens: &mut I, what: &str) -> Result<T>
where
    T: FromStr,
    I: Iterator<Item = &'a str>,
{
    let token = tokens
        .next()
        .ok_or_else(|| Error::MalformedGraph(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|_| Error::MalformedGraph(format!("invalid {}: {:?}", what, token)))
}
