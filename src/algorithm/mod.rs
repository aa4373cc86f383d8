pub mod acyclic;
pub mod bellman_ford;
pub mod bfs;
pub mod connectivity;
pub mod cycle;
pub mod dfs;
pub mod dijkstra;
pub mod max_flow;
pub mod mst;
pub mod topological;
pub mod traits;

pub use bfs::BreadthFirstPaths;
pub use connectivity::{ConnectedComponents, KosarajuSharirScc};
pub use cycle::{Cycle, DirectedCycle};
pub use dfs::{DepthFirstOrder, DepthFirstPaths, DepthFirstSearch};
pub use max_flow::FordFulkerson;
pub use mst::{EagerPrimMst, KruskalMst, LazyPrimMst, SpanningForest};
pub use topological::Topological;
pub use traits::{ShortestPathAlgorithm, ShortestPathTree};
