use std::fmt::{self, Display};

use crate::graph::adjacency::Adjacency;
use crate::graph::traits::{Graph, MutableGraph};
use crate::Result;

/// An unweighted undirected graph using adjacency lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph {
    adj: Adjacency<usize>,
}

impl UndirectedGraph {
    /// Creates a graph with `vertices` isolated vertices
    pub fn new(vertices: usize) -> Self {
        UndirectedGraph {
            adj: Adjacency::new(vertices),
        }
    }

    /// Adds the edge v-w. It is recorded in both adjacency lists but counted
    /// once; a self-loop appears twice in its vertex's list.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        self.adj.validate(v)?;
        self.adj.validate(w)?;
        self.adj.push(v, w);
        self.adj.push(w, v);
        self.adj.count_edge();
        Ok(())
    }
}

impl Graph for UndirectedGraph {
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

impl MutableGraph for UndirectedGraph {
    fn with_vertices(vertices: usize) -> Self {
        Self::new(vertices)
    }

    fn insert_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.add_edge(from, to)
    }
}

impl Display for UndirectedGraph {
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
