use std::fmt::{self, Display};

use crate::graph::adjacency::Adjacency;
use crate::graph::traits::{Graph, MutableGraph};
use crate::Result;

/// An unweighted directed graph using adjacency lists of outgoing edges
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph {
    /// Outgoing neighbours for each vertex
    adj: Adjacency<usize>,

    /// Number of incoming edges for each vertex
    indegree: Vec<usize>,
}

impl DirectedGraph {
    /// Creates a digraph with `vertices` isolated vertices
    pub fn new(vertices: usize) -> Self {
        DirectedGraph {
            adj: Adjacency::new(vertices),
            indegree: vec![0; vertices],
        }
    }

    /// Adds the edge from->to
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.adj.validate(from)?;
        self.adj.validate(to)?;
        self.adj.push(from, to);
        self.indegree[to] += 1;
        self.adj.count_edge();
        Ok(())
    }

    /// Number of edges pointing out of `vertex`
    pub fn outdegree(&self, vertex: usize) -> usize {
        self.degree(vertex)
    }

    /// Number of edges pointing into `vertex`
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn indegree(&self, vertex: usize) -> usize {
        self.adj.assert_vertex(vertex);
        self.indegree[vertex]
    }

    /// Returns a copy of the digraph with every edge reversed
    pub fn reverse(&self) -> DirectedGraph {
        let mut reversed = DirectedGraph::new(self.vertex_count());
        for v in 0..self.vertex_count() {
            for &w in self.adj(v) {
                reversed.adj.push(w, v);
                reversed.indegree[v] += 1;
                reversed.adj.count_edge();
            }
        }
        reversed
    }
}

impl Graph for DirectedGraph {
    type Edge = usize;

    fn vertex_count(&self) -> usize {
        self.adj.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.adj.edge_count()
    }

    fn adj(&self, vertex: usize) -> &[usize] {
        self.adj.get(vertex)
    }

    fn head(&self, edge: &usize, _from: usize) -> usize {
        *edge
    }
}

impl MutableGraph for DirectedGraph {
    fn with_vertices(vertices: usize) -> Self {
        Self::new(vertices)
    }

    fn insert_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.add_edge(from, to)
    }
}

impl Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count())?;
        for v in 0..self.vertex_count() {
            write!(f, "{}:", v)?;
            for w in self.adj(v) {
                write!(f, " {}", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
