//! Graph Toolkit - composable graph data structures and algorithms
//!
//! The crate is organised bottom-up:
//!
//! - [`data_structures`]: union-find and priority queues the algorithms rely on
//!   for their asymptotic guarantees.
//! - [`graph`]: undirected, directed, edge-weighted and flow-network
//!   representations sharing one adjacency-list store.
//! - [`algorithm`]: traversal, connectivity, cycle detection, topological order,
//!   minimum spanning trees, shortest paths and maximum flow.
//!
//! Every algorithm borrows its graph immutably, computes eagerly at
//! construction and exposes the result through accessor queries.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    acyclic::AcyclicShortestPaths, bellman_ford::BellmanFord, dijkstra::Dijkstra,
    ShortestPathAlgorithm, ShortestPathTree,
};
/// Re-export main types for convenient use
pub use graph::{
    DirectedEdge, DirectedGraph, Edge, EdgeWeightedDigraph, EdgeWeightedGraph, FlowEdge,
    FlowNetwork, Graph, UndirectedGraph, Weight,
};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Vertex {vertex} is not an endpoint of this edge")]
    InvalidEndpoint { vertex: usize },

    #[error("Label not found")]
    LabelNotFound,

    #[error("Graph has a directed cycle")]
    CycleDetected,

    #[error("Negative edge weight on {from}->{to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Negative capacity on {from}->{to}")]
    NegativeCapacity { from: usize, to: usize },

    #[error("Capacity on {from}->{to} is not finite")]
    NonFiniteCapacity { from: usize, to: usize },

    #[error("Flow change towards {vertex} exceeds its residual capacity")]
    ResidualCapacityExceeded { vertex: usize },

    #[error("Source and sink are the same vertex: {0}")]
    SameSourceAndSink(usize),

    #[error("At least one source vertex is required")]
    NoSources,

    #[error("Relaxation limit of {0} exceeded before convergence")]
    RelaxationLimitExceeded(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
