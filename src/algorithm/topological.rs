use crate::algorithm::cycle::DirectedCycle;
use crate::algorithm::dfs::DepthFirstOrder;
use crate::graph::Graph;

/// Topological order of a directed graph, present iff the graph is acyclic.
///
/// The order is the reverse postorder of a full depth-first traversal. Check
/// [`Topological::has_order`] before relying on `order` or `rank`.
#[derive(Debug, Clone)]
pub struct Topological {
    order: Option<Vec<usize>>,
    /// Position of each vertex in `order`
    rank: Vec<usize>,
}

impl Topological {
    pub fn new<G: Graph>(graph: &G) -> Self {
        if DirectedCycle::new(graph).has_cycle() {
            return Topological {
                order: None,
                rank: Vec::new(),
            };
        }

        let order = DepthFirstOrder::new(graph).reverse_postorder();
        let mut rank = vec![0; graph.vertex_count()];
        for (position, &v) in order.iter().enumerate() {
            rank[v] = position;
        }
        Topological {
            order: Some(order),
            rank,
        }
    }

    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Position of `v` in the topological order
    pub fn rank(&self, v: usize) -> Option<usize> {
        self.order.as_ref().map(|_| self.rank[v])
    }
}
