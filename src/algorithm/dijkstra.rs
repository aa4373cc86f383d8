use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::IndexedPriorityQueue;
use crate::graph::{EdgeWeightedDigraph, Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation for nonnegative edge weights
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &EdgeWeightedDigraph<W>,
        source: usize,
    ) -> Result<ShortestPathTree<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        if let Some(e) = graph.edges().find(|e| e.weight() < W::zero()) {
            return Err(Error::NegativeWeight {
                from: e.from(),
                to: e.to(),
            });
        }

        let n = graph.vertex_count();
        let mut tree = ShortestPathTree::new(n, source);

        // Each vertex holds at most one entry, keyed by its current distance
        let mut queue = IndexedPriorityQueue::with_capacity(n);
        queue.enqueue(W::zero(), source);

        let mut settled = 0usize;
        while let Some(v) = queue.dequeue() {
            settled += 1;
            for e in graph.adj(v) {
                if tree.relax(e) {
                    queue.update(tree.dist_to(e.to()), e.to());
                }
            }
        }

        log::debug!("Dijkstra settled {} of {} vertices from {}", settled, n, source);
        Ok(tree)
    }
}
