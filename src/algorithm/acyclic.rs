use crate::algorithm::topological::Topological;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathTree};
use crate::graph::{EdgeWeightedDigraph, Graph, Weight};
use crate::{Error, Result};

/// Shortest paths in an edge-weighted DAG.
///
/// Relaxing the outgoing edges of each vertex in topological order finalises
/// every distance in one linear pass, negative weights included.
#[derive(Debug, Default)]
pub struct AcyclicShortestPaths;

impl AcyclicShortestPaths {
    pub fn new() -> Self {
        AcyclicShortestPaths
    }
}

impl<W> ShortestPathAlgorithm<W> for AcyclicShortestPaths
where
    W: Weight,
{
    fn name(&self) -> &'static str {
        "acyclic shortest paths"
    }

    fn compute_shortest_paths(
        &self,
        graph: &EdgeWeightedDigraph<W>,
        source: usize,
    ) -> Result<ShortestPathTree<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }
        let topological = Topological::new(graph);
        let order = topological.order().ok_or(Error::CycleDetected)?;

        let mut tree = ShortestPathTree::new(graph.vertex_count(), source);
        for &v in order {
            for e in graph.adj(v) {
                tree.relax(e);
            }
        }
        Ok(tree)
    }
}
