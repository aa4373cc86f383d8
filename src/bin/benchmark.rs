use std::time::{Duration, Instant};

use graph_toolkit::algorithm::{
    EagerPrimMst, KruskalMst, LazyPrimMst, ShortestPathAlgorithm, SpanningForest,
};
use graph_toolkit::graph::generators::{random_weighted_digraph, random_weighted_graph};
use graph_toolkit::graph::{EdgeWeightedDigraph, Graph};
use graph_toolkit::{BellmanFord, Dijkstra};
use ordered_float::OrderedFloat;

type W = OrderedFloat<f64>;

// Function to benchmark a shortest path algorithm on a graph
fn benchmark_shortest_paths<A>(algorithm: &A, graph: &EdgeWeightedDigraph<W>, source: usize) -> Duration
where
    A: ShortestPathAlgorithm<W>,
{
    let start = Instant::now();
    let result = match algorithm.compute_shortest_paths(graph, source) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("  - {} failed: {}", algorithm.name(), e);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    // Count reachable vertices
    let reachable = (0..graph.vertex_count())
        .filter(|&v| result.has_path_to(v))
        .count();
    println!(
        "  - {}: {} reachable vertices in {:?}",
        algorithm.name(),
        reachable,
        duration
    );
    duration
}

// Function to time one spanning forest construction
fn benchmark_mst<F, M>(build: F) -> (Duration, W, &'static str)
where
    F: FnOnce() -> M,
    M: SpanningForest<W>,
{
    let start = Instant::now();
    let forest = build();
    let duration = start.elapsed();
    (duration, forest.weight(), forest.name())
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4;

    println!("=====================================================");
    println!("Benchmark: shortest paths and minimum spanning trees");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new();

    let mut results = Vec::new();

    for (seed, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graphs with {} vertices...", size);
        let digraph = random_weighted_digraph(size, size * edge_factor, 100.0, seed as u64);
        let graph = random_weighted_graph(size, size * (edge_factor - 1), seed as u64);

        let dijkstra_time = benchmark_shortest_paths(&dijkstra, &digraph, 0);
        let bellman_ford_time = benchmark_shortest_paths(&bellman_ford, &digraph, 0);

        let mst_runs = [
            benchmark_mst(|| KruskalMst::new(&graph)),
            benchmark_mst(|| LazyPrimMst::new(&graph)),
            benchmark_mst(|| EagerPrimMst::new(&graph)),
        ];
        for (duration, weight, name) in &mst_runs {
            println!("  - {}: weight {:.5} in {:?}", name, weight, duration);
        }
        if mst_runs.iter().any(|(_, weight, _)| (weight.0 - mst_runs[0].1 .0).abs() > 1e-9) {
            eprintln!("  ! spanning forest weights disagree");
        }

        results.push((size, dijkstra_time, bellman_ford_time, mst_runs.map(|(d, _, _)| d)));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<13} | {:<13} | {:<12} | {:<12} | {:<12}",
        "Vertices", "Dijkstra (ms)", "B-Ford (ms)", "Kruskal (ms)", "LazyPrim (ms)", "EagerPrim (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, bellman_ford_time, mst_times) in &results {
        println!(
            "{:<10} | {:<13} | {:<13} | {:<12} | {:<12} | {:<12}",
            size,
            dijkstra_time.as_millis(),
            bellman_ford_time.as_millis(),
            mst_times[0].as_millis(),
            mst_times[1].as_millis(),
            mst_times[2].as_millis()
        );
    }
}
