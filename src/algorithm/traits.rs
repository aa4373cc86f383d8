use crate::graph::{DirectedEdge, EdgeWeightedDigraph, Graph, Weight};
use crate::Result;

/// Shortest-path tree from a single source, as produced by every shortest
/// path algorithm.
///
/// Distances start at infinity (zero at the source) and only ever decrease
/// through [`ShortestPathTree::relax`].
#[derive(Debug, Clone)]
pub struct ShortestPathTree<W>
where
    W: Weight,
{
    /// Distances from source to each vertex
    dist_to: Vec<W>,

    /// Last edge on the best known path to each vertex
    edge_to: Vec<Option<DirectedEdge<W>>>,

    /// Source vertex ID
    source: usize,

    /// Negative cycle reachable from the source, if one was found
    negative_cycle: Option<Vec<DirectedEdge<W>>>,
}

impl<W> ShortestPathTree<W>
where
    W: Weight,
{
    /// Creates the initial tree: only the source is reachable
    pub fn new(vertex_count: usize, source: usize) -> Self {
        let mut dist_to = vec![W::infinity(); vertex_count];
        dist_to[source] = W::zero();
        ShortestPathTree {
            dist_to,
            edge_to: vec![None; vertex_count],
            source,
            negative_cycle: None,
        }
    }

    /// Relaxes `edge`: if going through it is strictly shorter, adopt it as
    /// the new last edge to its target. Returns true if the target improved.
    pub fn relax(&mut self, edge: &DirectedEdge<W>) -> bool {
        let (v, w) = (edge.from(), edge.to());
        if self.dist_to[v] == W::infinity() {
            return false;
        }
        let candidate = self.dist_to[v] + edge.weight();
        if self.dist_to[w] > candidate {
            self.dist_to[w] = candidate;
            self.edge_to[w] = Some(*edge);
            true
        } else {
            false
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    pub fn vertex_count(&self) -> usize {
        self.dist_to.len()
    }

    /// Distance from the source, infinity if unreachable
    pub fn dist_to(&self, v: usize) -> W {
        self.dist_to[v]
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to[v] < W::infinity()
    }

    /// Last edge on the shortest path to `v`
    pub fn edge_to(&self, v: usize) -> Option<&DirectedEdge<W>> {
        self.edge_to[v].as_ref()
    }

    /// Edges of the shortest path from the source to `v`, in travel order.
    /// The path to the source itself is empty.
    pub fn path_to(&self, v: usize) -> Option<Vec<DirectedEdge<W>>> {
        if !self.has_path_to(v) {
            return None;
        }
        let mut path = Vec::new();
        let mut current = v;
        while let Some(edge) = self.edge_to[current] {
            path.push(edge);
            current = edge.from();
            // A predecessor chain longer than V means a cycle in edge_to
            if path.len() > self.dist_to.len() {
                log::warn!("cycle in predecessor edges while walking back from {}", v);
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Vertices of the shortest path from the source to `v`
    pub fn vertex_path_to(&self, v: usize) -> Option<Vec<usize>> {
        let edges = self.path_to(v)?;
        let mut vertices = Vec::with_capacity(edges.len() + 1);
        vertices.push(self.source);
        vertices.extend(edges.iter().map(|e| e.to()));
        Some(vertices)
    }

    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.is_some()
    }

    /// Edges of the negative cycle, in cycle order
    pub fn negative_cycle(&self) -> Option<&[DirectedEdge<W>]> {
        self.negative_cycle.as_deref()
    }

    pub(crate) fn set_negative_cycle(&mut self, cycle: Vec<DirectedEdge<W>>) {
        self.negative_cycle = Some(cycle);
    }

    /// Current predecessor edges, one per reached vertex other than the source
    pub(crate) fn tree_edges(&self) -> impl Iterator<Item = &DirectedEdge<W>> + '_ {
        self.edge_to.iter().flatten()
    }

    /// Certifies the optimality conditions against `graph`: the source has
    /// distance zero, no edge can be relaxed further, and every tree edge is
    /// tight. Always false when a negative cycle was found.
    pub fn check_optimality(&self, graph: &EdgeWeightedDigraph<W>) -> bool {
        if self.has_negative_cycle() || self.dist_to.len() != graph.vertex_count() {
            return false;
        }
        if self.dist_to[self.source] != W::zero() || self.edge_to[self.source].is_some() {
            return false;
        }
        for e in graph.edges() {
            let (v, w) = (e.from(), e.to());
            if self.has_path_to(v) && self.dist_to[v] + e.weight() < self.dist_to[w] {
                return false;
            }
        }
        for w in 0..self.dist_to.len() {
            if let Some(e) = self.edge_to[w] {
                if self.dist_to[e.from()] + e.weight() != self.dist_to[w] {
                    return false;
                }
            }
        }
        true
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W>
where
    W: Weight,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(
        &self,
        graph: &EdgeWeightedDigraph<W>,
        source: usize,
    ) -> Result<ShortestPathTree<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
