use graph_toolkit::algorithm::{Cycle, DirectedCycle, Topological};
use graph_toolkit::graph::generators::{random_dag, random_weighted_dag};
use graph_toolkit::graph::{DirectedGraph, EdgeWeightedDigraph, Graph, UndirectedGraph};
use ordered_float::OrderedFloat;

// tinyDAG from the classic textbook
fn tiny_dag() -> DirectedGraph {
    let edges = [
        (2, 3), (0, 6), (0, 1), (2, 0), (11, 12), (9, 12), (9, 10), (9, 11),
        (3, 5), (8, 7), (5, 4), (0, 5), (6, 4), (6, 9), (7, 6),
    ];
    let mut g = DirectedGraph::new(13);
    for (v, w) in edges {
        g.add_edge(v, w).unwrap();
    }
    g
}

fn assert_closed_walk<G: Graph>(g: &G, cycle: &[usize]) {
    assert!(cycle.len() >= 2, "a cycle needs at least one edge");
    assert_eq!(cycle.first(), cycle.last(), "cycle must start and end at the same vertex");
    for pair in cycle.windows(2) {
        assert!(
            g.neighbors(pair[0]).any(|w| w == pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_tree_has_no_undirected_cycle() {
    let mut g = UndirectedGraph::new(5);
    for (v, w) in [(0, 1), (0, 2), (2, 3), (2, 4)] {
        g.add_edge(v, w).unwrap();
    }
    let finder = Cycle::new(&g);
    assert!(!finder.has_cycle());
    assert_eq!(finder.cycle(), None);
}

#[test]
fn test_undirected_triangle_is_found() {
    let mut g = UndirectedGraph::new(5);
    for (v, w) in [(0, 1), (3, 4), (1, 2), (2, 0)] {
        g.add_edge(v, w).unwrap();
    }
    let finder = Cycle::new(&g);
    let cycle = finder.cycle().unwrap();
    assert_eq!(cycle.len(), 4);
    assert_closed_walk(&g, cycle);
}

#[test]
fn test_parallel_edges_and_self_loops_are_cycles() {
    let mut parallel = UndirectedGraph::new(2);
    parallel.add_edge(0, 1).unwrap();
    parallel.add_edge(1, 0).unwrap();
    let finder = Cycle::new(&parallel);
    assert_eq!(finder.cycle().map(<[usize]>::len), Some(3));

    let mut looped = UndirectedGraph::new(3);
    looped.add_edge(0, 1).unwrap();
    looped.add_edge(1, 1).unwrap();
    assert_eq!(Cycle::new(&looped).cycle(), Some(&[1, 1][..]));
}

#[test]
fn test_directed_cycle_on_tiny_digraph() {
    let mut g = DirectedGraph::new(6);
    for (v, w) in [(0, 1), (1, 2), (2, 3), (3, 1), (4, 5)] {
        g.add_edge(v, w).unwrap();
    }
    let finder = DirectedCycle::new(&g);
    assert!(finder.has_cycle());
    let cycle = finder.cycle().unwrap();
    assert_closed_walk(&g, cycle);
    assert_eq!(cycle.len(), 4);
    assert_eq!(finder.cycle_edges().map(<[usize]>::len), Some(3));
}

#[test]
fn test_directed_edges_in_both_directions_form_a_cycle() {
    let mut g = DirectedGraph::new(2);
    g.add_edge(0, 1).unwrap();
    assert!(!DirectedCycle::new(&g).has_cycle());
    g.add_edge(1, 0).unwrap();
    assert!(DirectedCycle::new(&g).has_cycle());
}

#[test]
fn test_weighted_directed_cycle_reports_edges() {
    let mut g = EdgeWeightedDigraph::new(4);
    g.add_edge(0, 1, OrderedFloat(1.0)).unwrap();
    g.add_edge(1, 2, OrderedFloat(2.0)).unwrap();
    g.add_edge(2, 0, OrderedFloat(3.0)).unwrap();
    g.add_edge(2, 3, OrderedFloat(4.0)).unwrap();

    let finder = DirectedCycle::new(&g);
    let edges = finder.cycle_edges().unwrap();
    assert_eq!(edges.len(), 3);
    for pair in edges.windows(2) {
        assert_eq!(pair[0].to(), pair[1].from(), "cycle edges must chain");
    }
    assert_eq!(edges[edges.len() - 1].to(), edges[0].from());
    let total: f64 = edges.iter().map(|e| e.weight().into_inner()).sum();
    assert_eq!(total, 6.0);
}

#[test]
fn test_topological_order_on_tiny_dag() {
    let g = tiny_dag();
    let topo = Topological::new(&g);
    assert!(topo.has_order());
    let order = topo.order().unwrap();
    assert_eq!(order.len(), 13);

    for v in 0..13 {
        for &w in g.adj(v) {
            assert!(
                topo.rank(v).unwrap() < topo.rank(w).unwrap(),
                "{} must come before {}",
                v,
                w
            );
        }
        assert_eq!(order[topo.rank(v).unwrap()], v);
    }
}

#[test]
fn test_topological_order_absent_with_cycle() {
    let mut g = tiny_dag();
    g.add_edge(4, 2).unwrap();
    let topo = Topological::new(&g);
    assert!(!topo.has_order());
    assert_eq!(topo.order(), None);
    assert_eq!(topo.rank(0), None);
}

#[test]
fn test_topological_order_on_random_dags() {
    for seed in 0..10 {
        let g = random_dag(40, 120, seed);
        assert!(!DirectedCycle::new(&g).has_cycle());
        let topo = Topological::new(&g);
        for v in 0..40 {
            for &w in g.adj(v) {
                assert!(topo.rank(v) < topo.rank(w), "seed {}", seed);
            }
        }

        let weighted = random_weighted_dag(40, 120, -1.0, 1.0, seed);
        let topo = Topological::new(&weighted);
        for e in weighted.edges() {
            assert!(topo.rank(e.from()) < topo.rank(e.to()));
        }
    }
}
