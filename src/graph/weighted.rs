use std::fmt::{self, Display};

use crate::graph::adjacency::Adjacency;
use crate::graph::edge::{DirectedEdge, Edge};
use crate::graph::traits::{Graph, Weight};
use crate::Result;

/// An edge-weighted undirected graph. Each edge is stored in the adjacency
/// lists of both endpoints.
#[derive(Debug, Clone)]
pub struct EdgeWeightedGraph<W>
where
    W: Weight,
{
    adj: Adjacency<Edge<W>>,

    /// Every edge once, in insertion order
    edges: Vec<Edge<W>>,
}

impl<W> EdgeWeightedGraph<W>
where
    W: Weight,
{
    /// Creates a graph with `vertices` isolated vertices
    pub fn new(vertices: usize) -> Self {
        EdgeWeightedGraph {
            adj: Adjacency::new(vertices),
            edges: Vec::new(),
        }
    }

    /// Adds the edge v-w with the given weight
    pub fn add_edge(&mut self, v: usize, w: usize, weight: W) -> Result<()> {
        self.add(Edge::new(v, w, weight))
    }

    /// Adds an existing edge record
    pub fn add(&mut self, edge: Edge<W>) -> Result<()> {
        let v = edge.either();
        let w = edge.opposite(v);
        self.adj.validate(v)?;
        self.adj.validate(w)?;
        self.adj.push(v, edge);
        self.adj.push(w, edge);
        self.adj.count_edge();
        self.edges.push(edge);
        Ok(())
    }

    /// Every edge of the graph once, in insertion order
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

impl<W> Graph for EdgeWeightedGraph<W>
where
    W: Weight,
{
    type Edge = Edge<W>;

    fn vertex_count(&self) -> usize {
        self.adj.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.adj.edge_count()
    }

    fn adj(&self, vertex: usize) -> &[Edge<W>] {
        self.adj.get(vertex)
    }

    fn head(&self, edge: &Edge<W>, from: usize) -> usize {
        edge.opposite(from)
    }
}

impl<W> Display for EdgeWeightedGraph<W>
where
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count())?;
        for v in 0..self.vertex_count() {
            write!(f, "{}:", v)?;
            for e in self.adj(v) {
                write!(f, "  {}", e)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// An edge-weighted directed graph using adjacency lists of outgoing edges
#[derive(Debug, Clone)]
pub struct EdgeWeightedDigraph<W>
where
    W: Weight,
{
    adj: Adjacency<DirectedEdge<W>>,
}

impl<W> EdgeWeightedDigraph<W>
where
    W: Weight,
{
    /// Creates a digraph with `vertices` isolated vertices
    pub fn new(vertices: usize) -> Self {
        EdgeWeightedDigraph {
            adj: Adjacency::new(vertices),
        }
    }

    /// Adds the edge from->to with the given weight
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<()> {
        self.add(DirectedEdge::new(from, to, weight))
    }

    /// Adds an existing edge record
    pub fn add(&mut self, edge: DirectedEdge<W>) -> Result<()> {
        self.adj.validate(edge.from())?;
        self.adj.validate(edge.to())?;
        self.adj.push(edge.from(), edge);
        self.adj.count_edge();
        Ok(())
    }

    /// Iterates over every edge, grouped by origin vertex
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge<W>> + '_ {
        (0..self.vertex_count()).flat_map(move |v| self.adj.get(v).iter())
    }

    /// Returns true if some edge carries a negative weight
    pub fn has_negative_weight(&self) -> bool {
        self.edges().any(|e| e.weight() < W::zero())
    }
}

impl<W> Graph for EdgeWeightedDigraph<W>
where
    W: Weight,
{
    type Edge = DirectedEdge<W>;

    fn vertex_count(&self) -> usize {
        self.adj.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.adj.edge_count()
    }

    fn adj(&self, vertex: usize) -> &[DirectedEdge<W>] {
        self.adj.get(vertex)
    }

    fn head(&self, edge: &DirectedEdge<W>, _from: usize) -> usize {
        edge.to()
    }
}

impl<W> Display for EdgeWeightedDigraph<W>
where
    W: Weight + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count())?;
        for v in 0..self.vertex_count() {
            write!(f, "{}:", v)?;
            for e in self.adj(v) {
                write!(f, "  {}", e)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
