use crate::graph::{
    DirectedGraph, EdgeWeightedDigraph, EdgeWeightedGraph, FlowNetwork, UndirectedGraph,
};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates an undirected graph with `v` vertices and `e` uniformly random
/// edges (self-loops and parallel edges possible)
pub fn random_graph(v: usize, e: usize, seed: u64) -> UndirectedGraph {
    assert!(v > 0, "v must be positive");
    let mut graph = UndirectedGraph::new(v);
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..e {
        let a = rng.gen_range(0..v);
        let b = rng.gen_range(0..v);
        // endpoints are in range by construction
        let _ = graph.add_edge(a, b);
    }
    graph
}

/// Generates a directed graph with `v` vertices and `e` uniformly random edges
pub fn random_digraph(v: usize, e: usize, seed: u64) -> DirectedGraph {
    assert!(v > 0, "v must be positive");
    let mut graph = DirectedGraph::new(v);
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..e {
        let a = rng.gen_range(0..v);
        let b = rng.gen_range(0..v);
        let _ = graph.add_edge(a, b);
    }
    graph
}

/// Generates a directed acyclic graph: edges always point forward in a hidden
/// random permutation of the vertices
pub fn random_dag(v: usize, e: usize, seed: u64) -> DirectedGraph {
    assert!(v > 1, "v must be at least 2");
    let mut graph = DirectedGraph::new(v);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut order: Vec<usize> = (0..v).collect();
    order.shuffle(&mut rng);
    for _ in 0..e {
        let (a, b) = forward_pair(&mut rng, v);
        let _ = graph.add_edge(order[a], order[b]);
    }
    graph
}

/// Generates a connected edge-weighted graph: a random spanning tree followed
/// by `extra` random edges, all weights in `[0, 1)`
pub fn random_weighted_graph(
    v: usize,
    extra: usize,
    seed: u64,
) -> EdgeWeightedGraph<OrderedFloat<f64>> {
    assert!(v > 0, "v must be positive");
    let mut graph = EdgeWeightedGraph::new(v);
    let mut rng = StdRng::seed_from_u64(seed);

    // Spanning tree: attach each vertex to a random earlier one
    for w in 1..v {
        let parent = rng.gen_range(0..w);
        let weight = OrderedFloat(rng.gen::<f64>());
        let _ = graph.add_edge(parent, w, weight);
    }

    for _ in 0..extra {
        let a = rng.gen_range(0..v);
        let b = rng.gen_range(0..v);
        if a != b {
            let weight = OrderedFloat(rng.gen::<f64>());
            let _ = graph.add_edge(a, b, weight);
        }
    }
    graph
}

/// Generates an edge-weighted digraph with weights in `[0, max_weight)`
pub fn random_weighted_digraph(
    v: usize,
    e: usize,
    max_weight: f64,
    seed: u64,
) -> EdgeWeightedDigraph<OrderedFloat<f64>> {
    assert!(v > 0, "v must be positive");
    let mut graph = EdgeWeightedDigraph::new(v);
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..e {
        let a = rng.gen_range(0..v);
        let b = rng.gen_range(0..v);
        let weight = OrderedFloat(rng.gen_range(0.0..max_weight));
        let _ = graph.add_edge(a, b, weight);
    }
    graph
}

/// Generates an edge-weighted DAG whose vertex numbering is already a
/// topological order, with weights in `[min_weight, max_weight)`
pub fn random_weighted_dag(
    v: usize,
    e: usize,
    min_weight: f64,
    max_weight: f64,
    seed: u64,
) -> EdgeWeightedDigraph<OrderedFloat<f64>> {
    assert!(v > 1, "v must be at least 2");
    assert!(min_weight < max_weight, "weight range must be non-empty");
    let mut graph = EdgeWeightedDigraph::new(v);
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..e {
        let (a, b) = forward_pair(&mut rng, v);
        let weight = OrderedFloat(rng.gen_range(min_weight..max_weight));
        let _ = graph.add_edge(a, b, weight);
    }
    graph
}

/// Generates a `width` x `height` grid network with integral capacities in
/// `1..=max_capacity`. Edges point right and down, so vertex 0 (top-left) is
/// the natural source and the last vertex (bottom-right) the sink.
pub fn grid_flow_network(
    width: usize,
    height: usize,
    max_capacity: u32,
    seed: u64,
) -> FlowNetwork<OrderedFloat<f64>> {
    assert!(width > 0 && height > 0, "grid must be non-empty");
    assert!(max_capacity > 0, "max_capacity must be positive");
    let mut network = FlowNetwork::new(width * height);
    let mut rng = StdRng::seed_from_u64(seed);
    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                let capacity = OrderedFloat(rng.gen_range(1..=max_capacity) as f64);
                let _ = network.add_edge(vertex, vertex + 1, capacity);
            }
            if y + 1 < height {
                let capacity = OrderedFloat(rng.gen_range(1..=max_capacity) as f64);
                let _ = network.add_edge(vertex, vertex + width, capacity);
            }
        }
    }
    network
}

/// Random pair `a < b` of vertex positions
fn forward_pair(rng: &mut StdRng, v: usize) -> (usize, usize) {
    let a = rng.gen_range(0..v - 1);
    let b = rng.gen_range(a + 1..v);
    (a, b)
}
