pub mod adjacency;
pub mod directed;
pub mod edge;
pub mod flow;
pub mod generators;
pub mod symbol;
pub mod traits;
pub mod undirected;
pub mod weighted;

pub use directed::DirectedGraph;
pub use edge::{DirectedEdge, Edge, FlowEdge};
pub use flow::FlowNetwork;
pub use symbol::SymbolGraph;
pub use traits::{Graph, MutableGraph, Weight};
pub use undirected::UndirectedGraph;
pub use weighted::{EdgeWeightedDigraph, EdgeWeightedGraph};
