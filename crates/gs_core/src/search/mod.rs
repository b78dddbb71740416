//! The three search algorithms sharing the [`GPath`] result shape.
//!
//! [`GPath`]: crate::path::GPath
use rustc_hash::FxHashMap;

use crate::graph::Vertex;

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

/// Walks the parent pointers from `from` back to the root (the vertex whose
/// parent entry is `None`) and returns the path in start-to-target order.
pub(crate) fn trace_parents<V: Vertex>(from: &V, parents: &FxHashMap<V, Option<V>>) -> Vec<V> {
    let mut path = vec![from.clone()];

    let mut current = from;
    while let Some(Some(previous)) = parents.get(current) {
        path.push(previous.clone());
        current = previous;
    }

    path.reverse();
    path
}

#[cfg(test)]
pub(crate) fn assert_path<V: Vertex>(
    expected_vertices: Vec<V>,
    expected_weight: crate::constants::Weight,
    path: Option<crate::path::GPath<V>>,
) {
    let path = path.expect("expected a path");
    assert_eq!(expected_vertices, path.vertices);
    assert_eq!(expected_weight, path.total_weight);
}

#[cfg(test)]
pub(crate) fn assert_no_path<V: Vertex>(path: Option<crate::path::GPath<V>>) {
    assert!(path.is_none(), "expected no path, got {:?}", path);
}
