//! Generic graph-search engine.
//!
//! The engine knows nothing about the graph it searches: a provider
//! implements [`Graph`] by answering "which vertices are one edge away from
//! this one", and in return gets reachability enumeration, depth-first
//! search, breadth-first search and Dijkstra shortest paths, all producing
//! the same [`GPath`] result shape.
//!
//! # Basic usage
//! ```
//! use gs_core::prelude::*;
//!
//! let mut g = AdjacencyGraph::new();
//! g.add_edge(0u32, 1, 1.0);
//! g.add_edge(1, 2, 1.0);
//!
//! let mut bfs = Bfs::new(&g);
//! let path = bfs.search(&0, &2).expect("target is reachable");
//! assert_eq!(path.vertices, vec![0, 1, 2]);
//! ```
//!
//! [`Graph`]: crate::graph::Graph
//! [`GPath`]: crate::path::GPath
pub mod constants;
pub mod graph;
pub mod path;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
