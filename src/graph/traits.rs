use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::Result;

/// Numeric weight usable by every weighted algorithm: float arithmetic (with
/// `infinity()` as the unreachable distance) plus a total order for priority
/// queues. `ordered_float::OrderedFloat<f64>` is the usual choice.
pub trait Weight: Float + Zero + Debug + Copy + Ord {}

impl<W> Weight for W where W: Float + Zero + Debug + Copy + Ord {}

/// Read-only view of a graph with dense vertices `0..vertex_count()`.
///
/// Every representation stores, for each vertex, an ordered list of incident
/// edges of type [`Graph::Edge`]: the neighbour itself for unweighted graphs,
/// an edge record for weighted ones. Directed graphs list outgoing edges only.
pub trait Graph: Debug {
    /// Entry stored in an adjacency list
    type Edge: Copy + Debug;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edge insertions performed on the graph
    fn edge_count(&self) -> usize;

    /// Returns the adjacency list of a vertex.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    fn adj(&self, vertex: usize) -> &[Self::Edge];

    /// Returns the vertex reached when following `edge` away from `from`
    fn head(&self, edge: &Self::Edge, from: usize) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Number of entries in the adjacency list of `vertex`
    fn degree(&self, vertex: usize) -> usize {
        self.adj(vertex).len()
    }

    /// Iterates over the vertices adjacent to `vertex`
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.adj(vertex).iter().map(move |e| self.head(e, vertex)))
    }
}

/// Unweighted graphs that can be built edge by edge, used by adapters that
/// construct either flavour (see [`crate::graph::SymbolGraph`])
pub trait MutableGraph: Graph + Sized {
    /// Creates a graph with `vertices` isolated vertices
    fn with_vertices(vertices: usize) -> Self;

    /// Inserts an edge between two existing vertices
    fn insert_edge(&mut self, from: usize, to: usize) -> Result<()>;
}
