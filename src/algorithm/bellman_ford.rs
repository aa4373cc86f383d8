use std::collections::VecDeque;

use crate::algorithm::cycle::DirectedCycle;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::graph::{DirectedEdge, EdgeWeightedDigraph, Graph, Weight};
use crate::{Error, Result};

/// Queue-based Bellman–Ford shortest paths, allowing negative weights.
///
/// A vertex is queued whenever its distance improves (at most once at a time).
/// After every `V` vertex passes the predecessor edges are assembled into a
/// digraph and searched for a cycle; a cycle there is a negative cycle
/// reachable from the source, and relaxation stops. That outcome is reported
/// through [`ShortestPathTree::has_negative_cycle`], not as an error.
#[derive(Debug, Default)]
pub struct BellmanFord {
    /// Maximum number of vertex passes before giving up
    relaxation_limit: Option<usize>,
}

impl BellmanFord {
    /// Creates a new Bellman–Ford instance without a pass limit
    pub fn new() -> Self {
        BellmanFord {
            relaxation_limit: None,
        }
    }

    /// Caps the number of vertex passes; reaching the cap before the queue
    /// drains fails with [`Error::RelaxationLimitExceeded`]
    pub fn with_relaxation_limit(mut self, limit: usize) -> Self {
        self.relaxation_limit = Some(limit);
        self
    }

    fn find_negative_cycle<W: Weight>(tree: &ShortestPathTree<W>) -> Option<Vec<DirectedEdge<W>>> {
        let mut spt = EdgeWeightedDigraph::new(tree.vertex_count());
        for e in tree.tree_edges() {
            // tree edges come from a graph with the same vertex count
            if spt.add(*e).is_err() {
                return None;
            }
        }
        DirectedCycle::new(&spt).cycle_edges().map(<[_]>::to_vec)
    }
}

impl<W> ShortestPathAlgorithm<W> for BellmanFord
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(
        &self,
        graph: &EdgeWeightedDigraph<W>,
        source: usize,
    ) -> Result<ShortestPathTree<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let n = graph.vertex_count();
        let mut tree = ShortestPathTree::new(n, source);
        let mut on_queue = vec![false; n];
        let mut queue = VecDeque::with_capacity(n);
        queue.push_back(source);
        on_queue[source] = true;

        let mut passes = 0usize;
        while let Some(v) = queue.pop_front() {
            on_queue[v] = false;
            for e in graph.adj(v) {
                if tree.relax(e) && !on_queue[e.to()] {
                    queue.push_back(e.to());
                    on_queue[e.to()] = true;
                }
            }

            passes += 1;
            if passes % n == 0 {
                if let Some(cycle) = Self::find_negative_cycle(&tree) {
                    log::debug!(
                        "Bellman-Ford found a negative cycle of {} edges after {} passes",
                        cycle.len(),
                        passes
                    );
                    tree.set_negative_cycle(cycle);
                    return Ok(tree);
                }
            }

            if let Some(limit) = self.relaxation_limit {
                if passes >= limit && !queue.is_empty() {
                    log::warn!("Bellman-Ford stopped after {} passes", passes);
                    return Err(Error::RelaxationLimitExceeded(limit));
                }
            }
        }

        log::debug!("Bellman-Ford converged after {} passes", passes);
        Ok(tree)
    }
}
