use std::ops::ControlFlow;

use crate::algorithm::dfs::{depth_first_walk, DepthFirstOrder, DfsEvent};
use crate::graph::{DirectedGraph, Graph};

/// Connected components of an undirected graph.
///
/// One depth-first pass assigns every vertex a component id; afterwards
/// `connected` is a constant-time id comparison.
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    id: Vec<usize>,
    /// Size of each component, indexed by component id
    sizes: Vec<usize>,
}

impl ConnectedComponents {
    pub fn new<G: Graph>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let (id, sizes) = label_trees(graph, 0..n);
        log::debug!("found {} connected components among {} vertices", sizes.len(), n);
        ConnectedComponents { id, sizes }
    }

    /// Component id of `v`, in `0..count()`
    pub fn id(&self, v: usize) -> usize {
        self.id[v]
    }

    /// Number of vertices in the component containing `v`
    pub fn size(&self, v: usize) -> usize {
        self.sizes[self.id[v]]
    }

    /// Number of components
    pub fn count(&self) -> usize {
        self.sizes.len()
    }

    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.id[v] == self.id[w]
    }

    /// Vertices of each component, indexed by component id
    pub fn components(&self) -> Vec<Vec<usize>> {
        group_by_id(&self.id, self.count())
    }
}

/// Strongly connected components of a digraph (Kosaraju–Sharir).
///
/// Vertices are visited in reverse postorder of the reversed digraph; each
/// depth-first tree of the forward pass is then exactly one strong component.
#[derive(Debug, Clone)]
pub struct KosarajuSharirScc {
    id: Vec<usize>,
    count: usize,
}

impl KosarajuSharirScc {
    pub fn new(graph: &DirectedGraph) -> Self {
        let order = DepthFirstOrder::new(&graph.reverse()).reverse_postorder();
        let (id, sizes) = label_trees(graph, order);
        log::debug!(
            "found {} strongly connected components among {} vertices",
            sizes.len(),
            graph.vertex_count()
        );
        KosarajuSharirScc {
            id,
            count: sizes.len(),
        }
    }

    /// Component id of `v`, in `0..count()`
    pub fn id(&self, v: usize) -> usize {
        self.id[v]
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// True iff `v` and `w` are mutually reachable
    pub fn strongly_connected(&self, v: usize, w: usize) -> bool {
        self.id[v] == self.id[w]
    }

    /// Vertices of each component, indexed by component id
    pub fn components(&self) -> Vec<Vec<usize>> {
        group_by_id(&self.id, self.count)
    }
}

/// Runs a depth-first walk from each unmarked root in order, giving every tree
/// its own id. Returns the id of each vertex and the size of each tree.
fn label_trees<G, I>(graph: &G, roots: I) -> (Vec<usize>, Vec<usize>)
where
    G: Graph,
    I: IntoIterator<Item = usize>,
{
    let n = graph.vertex_count();
    let mut marked = vec![false; n];
    let mut id = vec![0; n];
    let mut sizes = Vec::new();

    for root in roots {
        if marked[root] {
            continue;
        }
        let component = sizes.len();
        let mut size = 0;
        let _ = depth_first_walk(graph, root, &mut marked, |event| {
            if let DfsEvent::Discover(v) = event {
                id[v] = component;
                size += 1;
            }
            ControlFlow::Continue(())
        });
        sizes.push(size);
    }
    (id, sizes)
}

fn group_by_id(id: &[usize], count: usize) -> Vec<Vec<usize>> {
    let mut groups = vec![Vec::new(); count];
    for (v, &c) in id.iter().enumerate() {
        groups[c].push(v);
    }
    groups
}
