use graph_toolkit::algorithm::{
    BreadthFirstPaths, DepthFirstOrder, DepthFirstPaths, DepthFirstSearch,
};
use graph_toolkit::graph::generators::{random_digraph, random_graph};
use graph_toolkit::graph::{DirectedGraph, Graph, UndirectedGraph};
use graph_toolkit::Error;

// tinyG from the classic textbook: three components
fn tiny_graph() -> UndirectedGraph {
    let edges = [
        (0, 5), (4, 3), (0, 1), (9, 12), (6, 4), (5, 4), (0, 2),
        (11, 12), (9, 10), (0, 6), (7, 8), (9, 11), (5, 3),
    ];
    let mut g = UndirectedGraph::new(13);
    for (v, w) in edges {
        g.add_edge(v, w).unwrap();
    }
    g
}

// Unweighted distances by repeated edge relaxation, independent of BFS
fn reference_distances<G: Graph>(graph: &G, sources: &[usize]) -> Vec<Option<usize>> {
    let n = graph.vertex_count();
    let mut dist = vec![None; n];
    for &s in sources {
        dist[s] = Some(0);
    }
    loop {
        let mut changed = false;
        for v in 0..n {
            let Some(dv) = dist[v] else { continue };
            for w in graph.neighbors(v) {
                if dist[w].map_or(true, |dw| dv + 1 < dw) {
                    dist[w] = Some(dv + 1);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

#[test]
fn test_dfs_reachability() {
    let g = tiny_graph();
    let search = DepthFirstSearch::new(&g, 0).unwrap();
    let reached: Vec<usize> = (0..13).filter(|&v| search.marked(v)).collect();
    assert_eq!(reached, vec![0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(search.count(), 7);
    assert!(!search.is_connected());

    let search = DepthFirstSearch::new(&g, 9).unwrap();
    assert_eq!(search.count(), 4);
}

#[test]
fn test_dfs_multi_source_reachability() {
    let mut g = DirectedGraph::new(6);
    for (v, w) in [(0, 1), (1, 2), (3, 4), (5, 3)] {
        g.add_edge(v, w).unwrap();
    }
    let search = DepthFirstSearch::from_sources(&g, &[0, 3]).unwrap();
    let reached: Vec<usize> = (0..6).filter(|&v| search.marked(v)).collect();
    assert_eq!(reached, vec![0, 1, 2, 3, 4]);

    assert_eq!(
        DepthFirstSearch::from_sources(&g, &[]).unwrap_err(),
        Error::NoSources
    );
    assert_eq!(
        DepthFirstSearch::new(&g, 6).unwrap_err(),
        Error::InvalidVertex(6)
    );
}

#[test]
fn test_dfs_paths_follow_existing_edges() {
    let g = tiny_graph();
    let paths = DepthFirstPaths::new(&g, 0).unwrap();
    assert_eq!(paths.source(), 0);

    for v in 0..13 {
        match paths.path_to(v) {
            Some(path) => {
                assert_eq!(path[0], 0, "path should start at source");
                assert_eq!(*path.last().unwrap(), v, "path should end at target");
                for pair in path.windows(2) {
                    assert!(g.adj(pair[0]).contains(&pair[1]), "path should only use existing edges");
                }
            }
            None => assert!(v >= 7, "{} is in the source's component", v),
        }
    }
    assert_eq!(paths.path_to(0), Some(vec![0]));
}

#[test]
fn test_depth_first_order() {
    let mut g = DirectedGraph::new(4);
    for (v, w) in [(0, 1), (1, 2), (0, 3)] {
        g.add_edge(v, w).unwrap();
    }
    let order = DepthFirstOrder::new(&g);
    assert_eq!(order.preorder(), &[0, 1, 2, 3]);
    assert_eq!(order.postorder(), &[2, 1, 3, 0]);
    assert_eq!(order.reverse_postorder(), vec![0, 3, 1, 2]);
    for v in 0..4 {
        assert_eq!(order.preorder()[order.pre(v)], v);
        assert_eq!(order.postorder()[order.post(v)], v);
    }
}

#[test]
fn test_deep_path_does_not_exhaust_the_stack() {
    let n = 200_000;
    let mut g = DirectedGraph::new(n);
    for v in 0..n - 1 {
        g.add_edge(v, v + 1).unwrap();
    }
    let paths = DepthFirstPaths::new(&g, 0).unwrap();
    assert_eq!(paths.path_to(n - 1).map(|p| p.len()), Some(n));

    let order = DepthFirstOrder::new(&g);
    assert_eq!(order.postorder()[0], n - 1);
}

#[test]
fn test_bfs_shortest_paths_on_tiny_graph() {
    let g = tiny_graph();
    let bfs = BreadthFirstPaths::new(&g, 0).unwrap();
    assert_eq!(bfs.dist_to(0), Some(0));
    assert_eq!(bfs.dist_to(3), Some(2));
    assert_eq!(bfs.dist_to(4), Some(2));
    assert_eq!(bfs.dist_to(7), None);
    assert!(!bfs.has_path_to(9));

    let path = bfs.path_to(3).unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path[0], 0);
    assert_eq!(path[2], 3);
}

#[test]
fn test_bfs_matches_reference_distances() {
    for seed in 0..10 {
        let g = random_graph(30, 40, seed);
        let bfs = BreadthFirstPaths::new(&g, 0).unwrap();
        let expected = reference_distances(&g, &[0]);
        for v in 0..30 {
            assert_eq!(bfs.dist_to(v), expected[v], "vertex {} (seed {})", v, seed);
            if let Some(path) = bfs.path_to(v) {
                assert_eq!(Some(path.len() - 1), expected[v]);
            }
        }

        let d = random_digraph(30, 60, seed);
        let bfs = BreadthFirstPaths::new(&d, 5).unwrap();
        let expected = reference_distances(&d, &[5]);
        for v in 0..30 {
            assert_eq!(bfs.dist_to(v), expected[v], "digraph vertex {} (seed {})", v, seed);
        }
    }
}

#[test]
fn test_multi_source_bfs_uses_nearest_source() {
    // 0 - 1 - 2 - 3 - 4 - 5 - 6
    let mut g = UndirectedGraph::new(7);
    for v in 0..6 {
        g.add_edge(v, v + 1).unwrap();
    }
    let bfs = BreadthFirstPaths::from_sources(&g, &[0, 6]).unwrap();
    let dist: Vec<Option<usize>> = (0..7).map(|v| bfs.dist_to(v)).collect();
    assert_eq!(
        dist,
        vec![Some(0), Some(1), Some(2), Some(3), Some(2), Some(1), Some(0)]
    );
    assert_eq!(bfs.path_to(5), Some(vec![6, 5]));

    for seed in 0..5 {
        let g = random_graph(40, 45, seed);
        let sources = [1, 17, 33];
        let bfs = BreadthFirstPaths::from_sources(&g, &sources).unwrap();
        let expected = reference_distances(&g, &sources);
        for v in 0..40 {
            assert_eq!(bfs.dist_to(v), expected[v]);
        }
    }
}
