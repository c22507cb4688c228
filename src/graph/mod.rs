pub mod directed;
pub mod generators;
pub mod loader;
pub mod traits;

pub use directed::DirectedGraph;
pub use loader::{load_graph, parse_graph};
pub use traits::Graph;
