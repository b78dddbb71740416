//! Re-exports of the most commonly used items in `gs_core`.
pub use crate::constants::Weight;
pub use crate::graph::AdjacencyGraph;
pub use crate::graph::Graph;
pub use crate::graph::Vertex;
pub use crate::path::GPath;

pub use crate::search::bfs::Bfs;
pub use crate::search::dfs::Dfs;
pub use crate::search::dijkstra::Dijkstra;

pub use crate::util::test_graphs::generate_simple_graph;
