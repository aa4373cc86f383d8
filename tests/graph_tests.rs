use graph_toolkit::graph::{
    DirectedEdge, DirectedGraph, Edge, EdgeWeightedDigraph, EdgeWeightedGraph, FlowEdge,
    FlowNetwork, Graph, SymbolGraph, UndirectedGraph,
};
use graph_toolkit::Error;
use ordered_float::OrderedFloat;

#[test]
fn test_undirected_edge_count_counts_each_insertion_once() {
    let mut g = UndirectedGraph::new(4);
    g.add_edge(0, 1).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(2, 0).unwrap();
    g.add_edge(2, 3).unwrap();
    g.add_edge(0, 1).unwrap();

    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 5);
    let entries: usize = (0..4).map(|v| g.degree(v)).sum();
    assert_eq!(entries, 10, "every undirected edge sits in two lists");
    assert_eq!(g.adj(0), &[1, 2, 1]);
    assert_eq!(g.neighbors(3).collect::<Vec<_>>(), vec![2]);
}

#[test]
fn test_directed_edge_count_and_reverse() {
    let mut g = DirectedGraph::new(3);
    g.add_edge(0, 1).unwrap();
    g.add_edge(0, 2).unwrap();
    g.add_edge(1, 2).unwrap();

    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.outdegree(0), 2);
    assert_eq!(g.indegree(2), 2);

    let r = g.reverse();
    assert_eq!(r.edge_count(), 3);
    assert_eq!(r.adj(2), &[0, 1]);
    assert_eq!(r.indegree(0), 2);
    assert!(r.adj(0).is_empty());
}

#[test]
fn test_out_of_range_insertion_fails() {
    let mut g = UndirectedGraph::new(3);
    assert_eq!(g.add_edge(0, 3), Err(Error::InvalidVertex(3)));
    assert_eq!(g.edge_count(), 0, "failed insertion must not count");

    let mut d = EdgeWeightedDigraph::new(2);
    assert_eq!(
        d.add_edge(7, 0, OrderedFloat(1.0)),
        Err(Error::InvalidVertex(7))
    );
}

#[test]
#[should_panic(expected = "Invalid vertex ID: 9")]
fn test_adjacency_of_missing_vertex_panics() {
    let g = DirectedGraph::new(3);
    let _ = g.adj(9);
}

#[test]
fn test_weighted_graphs_store_edges() {
    let mut g = EdgeWeightedGraph::new(3);
    g.add_edge(0, 1, OrderedFloat(0.5)).unwrap();
    g.add_edge(1, 2, OrderedFloat(0.25)).unwrap();
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edges().len(), 2);
    assert_eq!(g.adj(1).len(), 2);
    assert_eq!(g.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);

    let mut d = EdgeWeightedDigraph::new(3);
    d.add_edge(0, 1, OrderedFloat(-2.0)).unwrap();
    d.add(DirectedEdge::new(1, 2, OrderedFloat(3.0))).unwrap();
    assert_eq!(d.edge_count(), 2);
    assert_eq!(d.edges().count(), 2);
    assert!(d.has_negative_weight());
    assert_eq!(d.adj(0)[0].to(), 1);
}

#[test]
fn test_edge_other_endpoint() {
    let e = Edge::new(3, 8, OrderedFloat(1.5));
    let v = e.either();
    assert_eq!(e.other(v), Ok(8));
    assert_eq!(e.other(8), Ok(3));
    assert_eq!(e.other(5), Err(Error::InvalidEndpoint { vertex: 5 }));
    assert_eq!(e.weight(), OrderedFloat(1.5));
}

#[test]
fn test_flow_edge_residual_bookkeeping() {
    let mut e = FlowEdge::new(0, 1, OrderedFloat(10.0)).unwrap();
    assert_eq!(e.residual_capacity_to(1), Ok(OrderedFloat(10.0)));
    assert_eq!(e.residual_capacity_to(0), Ok(OrderedFloat(0.0)));

    e.add_residual_flow_to(1, OrderedFloat(4.0)).unwrap();
    assert_eq!(e.flow(), OrderedFloat(4.0));
    assert_eq!(e.residual_capacity_to(1), Ok(OrderedFloat(6.0)));
    assert_eq!(e.residual_capacity_to(0), Ok(OrderedFloat(4.0)));

    e.add_residual_flow_to(0, OrderedFloat(3.0)).unwrap();
    assert_eq!(e.flow(), OrderedFloat(1.0));

    assert_eq!(e.other(2), Err(Error::InvalidEndpoint { vertex: 2 }));
    assert_eq!(
        e.add_residual_flow_to(2, OrderedFloat(1.0)),
        Err(Error::InvalidEndpoint { vertex: 2 })
    );
    assert_eq!(
        FlowEdge::new(0, 1, OrderedFloat(-1.0)),
        Err(Error::NegativeCapacity { from: 0, to: 1 })
    );
}

#[test]
fn test_flow_network_shares_edges_between_endpoints() {
    let mut net = FlowNetwork::new(3);
    let a = net.add_edge(0, 1, OrderedFloat(2.0)).unwrap();
    let b = net.add_edge(1, 2, OrderedFloat(1.0)).unwrap();
    assert_eq!((a, b), (0, 1));
    assert_eq!(net.edge_count(), 2);
    assert_eq!(net.adj(1), &[0, 1]);
    assert_eq!(net.edge(b).map(|e| e.to()), Some(2));
    assert_eq!(net.add_edge(0, 5, OrderedFloat(1.0)), Err(Error::InvalidVertex(5)));
}

#[test]
fn test_symbol_graph_maps_names_to_indices() {
    let routes = ["JFK MCO ATL ORD", "ORD DEN HOU", "DEN PHX LAS", "LAS PHX"];
    let sg: SymbolGraph<UndirectedGraph> = SymbolGraph::from_adjacency_lines(routes, " ").unwrap();

    assert!(sg.contains("LAS"));
    assert!(!sg.contains("LAX"));
    assert_eq!(sg.index_of("JFK"), Ok(0));
    assert_eq!(sg.name_of(1), Ok("MCO"));
    assert_eq!(sg.index_of("SFO"), Err(Error::LabelNotFound));

    let g = sg.graph();
    assert_eq!(g.vertex_count(), 8);
    assert_eq!(g.edge_count(), 8);
    let ord = sg.index_of("ORD").unwrap();
    let names: Vec<&str> = g
        .neighbors(ord)
        .map(|v| sg.name_of(v).unwrap())
        .collect();
    assert_eq!(names, vec!["JFK", "DEN", "HOU"]);
}

#[test]
fn test_symbol_digraph_keeps_direction() {
    let lines = ["a,b,c", "b,c", ""];
    let sg: SymbolGraph<DirectedGraph> = SymbolGraph::from_adjacency_lines(lines, ",").unwrap();
    let g = sg.graph();
    assert_eq!(g.vertex_count(), 3);
    assert_eq!(g.edge_count(), 3);
    assert!(g.adj(sg.index_of("c").unwrap()).is_empty());
}

#[test]
#[should_panic(expected = "Invalid vertex ID: 4")]
fn test_indegree_of_missing_vertex_panics() {
    let g = DirectedGraph::new(4);
    let _ = g.indegree(4);
}

#[test]
fn test_flow_edge_rejects_non_finite_capacity() {
    assert_eq!(
        FlowEdge::new(0, 1, OrderedFloat(f64::INFINITY)),
        Err(Error::NonFiniteCapacity { from: 0, to: 1 })
    );
    assert_eq!(
        FlowEdge::new(2, 3, OrderedFloat(f64::NAN)),
        Err(Error::NonFiniteCapacity { from: 2, to: 3 })
    );

    let mut net = FlowNetwork::new(2);
    assert_eq!(
        net.add_edge(0, 1, OrderedFloat(f64::INFINITY)),
        Err(Error::NonFiniteCapacity { from: 0, to: 1 })
    );
    assert_eq!(net.edge_count(), 0, "rejected edge must not be stored");
    assert!(net.adj(0).is_empty());
}

#[test]
fn test_flow_edge_rejects_flow_beyond_residual() {
    let mut e = FlowEdge::new(0, 1, OrderedFloat(5.0)).unwrap();
    assert_eq!(
        e.add_residual_flow_to(1, OrderedFloat(6.0)),
        Err(Error::ResidualCapacityExceeded { vertex: 1 })
    );
    assert_eq!(e.flow(), OrderedFloat(0.0), "failed push leaves the flow alone");

    assert_eq!(
        e.add_residual_flow_to(0, OrderedFloat(1.0)),
        Err(Error::ResidualCapacityExceeded { vertex: 0 }),
        "cannot cancel flow that is not there"
    );
    assert_eq!(
        e.add_residual_flow_to(1, OrderedFloat(-1.0)),
        Err(Error::ResidualCapacityExceeded { vertex: 1 })
    );

    e.add_residual_flow_to(1, OrderedFloat(5.0)).unwrap();
    assert_eq!(e.flow(), e.capacity());
    assert_eq!(e.residual_capacity_to(1), Ok(OrderedFloat(0.0)));
    e.add_residual_flow_to(0, OrderedFloat(5.0)).unwrap();
    assert_eq!(e.flow(), OrderedFloat(0.0));
}

#[test]
fn test_flow_edge_saturates_exactly_with_inexact_capacities() {
    let mut e = FlowEdge::new(0, 1, OrderedFloat(0.3)).unwrap();
    e.add_residual_flow_to(1, OrderedFloat(0.1)).unwrap();
    let rest = e.residual_capacity_to(1).unwrap();
    e.add_residual_flow_to(1, rest).unwrap();
    assert_eq!(e.flow(), OrderedFloat(0.3));
    assert_eq!(e.residual_capacity_to(1), Ok(OrderedFloat(0.0)));
}
