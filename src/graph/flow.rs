use std::fmt::{self, Display};

use crate::graph::adjacency::Adjacency;
use crate::graph::edge::FlowEdge;
use crate::graph::traits::Weight;
use crate::Result;

/// A capacitated network. Edges live in one table and each endpoint's
/// adjacency list holds the edge's id, so both directions of residual
/// traversal see the same edge.
#[derive(Debug, Clone)]
pub struct FlowNetwork<W>
where
    W: Weight,
{
    adj: Adjacency<usize>,
    edges: Vec<FlowEdge<W>>,
}

impl<W> FlowNetwork<W>
where
    W: Weight,
{
    /// Creates a network with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        FlowNetwork {
            adj: Adjacency::new(vertices),
            edges: Vec::new(),
        }
    }

    /// Adds an edge from->to with the given capacity and returns its id
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: W) -> Result<usize> {
        self.adj.validate(from)?;
        self.adj.validate(to)?;
        let edge = FlowEdge::new(from, to, capacity)?;
        let id = self.edges.len();
        self.edges.push(edge);
        self.adj.push(from, id);
        if to != from {
            self.adj.push(to, id);
        }
        self.adj.count_edge();
        Ok(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.edge_count()
    }

    /// Ids of the edges incident to `vertex`, in either direction
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is out of range.
    pub fn adj(&self, vertex: usize) -> &[usize] {
        self.adj.get(vertex)
    }

    /// Edge with the given id
    pub fn edge(&self, id: usize) -> Option<&FlowEdge<W>> {
        self.edges.get(id)
    }

    /// Every edge in insertion order; an edge's id is its position
    pub fn edges(&self) -> &[FlowEdge<W>] {
        &self.edges
    }
}

impl<W> Display for FlowNetwork<W>
where
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count())?;
        for v in 0..self.vertex_count() {
            write!(f, "{}:", v)?;
            for &id in self.adj(v) {
                if self.edges[id].from() == v {
                    write!(f, "  {}", self.edges[id])?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
