use crate::constants::Weight;
use anyhow::Context;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::{fmt, fmt::Write as _, hash::Hash, path::Path};

/// Capability every vertex type must provide: identity comparison and
/// hashing. Blanket-implemented, so any suitable type qualifies.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug {}

impl<V: Clone + Eq + Hash + fmt::Debug> Vertex for V {}

/// The neighbour-lookup contract a graph provider implements.
///
/// For a directed graph `neighbours` follows the outgoing edges of `from`.
/// Repeated calls for the same vertex during one search must yield the same
/// list; the returned order is the expansion order used by every search.
pub trait Graph {
    type Vertex: Vertex;

    fn neighbours(&self, from: &Self::Vertex) -> Vec<Self::Vertex>;

    /// All vertices reachable from `start`, directly or indirectly,
    /// including `start` itself. Uses an explicit stack so arbitrarily deep
    /// graphs cannot exhaust the call stack.
    fn all_reachable(&self, start: &Self::Vertex) -> FxHashSet<Self::Vertex> {
        let mut visited = FxHashSet::default();
        let mut stack = vec![start.clone()];

        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            // Reversed push keeps the visit order of the recursive form
            for neighbour in self.neighbours(&current).into_iter().rev() {
                if !visited.contains(&neighbour) {
                    stack.push(neighbour);
                }
            }
        }

        visited
    }

    /// Formats the adjacency list of the subgraph reachable from `start`,
    /// one `vertex: [n1, n2, ...]` line per vertex, in pre-order over a
    /// spanning tree rooted at `start`. A vertex is never listed twice as an
    /// expansion root, though it may appear inside other neighbour lists.
    fn format_adjacency(&self, start: &Self::Vertex) -> String {
        let mut out = String::new();
        let mut listed = FxHashSet::default();
        let mut stack = vec![start.clone()];

        while let Some(current) = stack.pop() {
            if !listed.insert(current.clone()) {
                continue;
            }
            let neighbours = self.neighbours(&current);
            let _ = writeln!(out, "{:?}: {:?}", current, neighbours);

            for neighbour in neighbours.into_iter().rev() {
                if !listed.contains(&neighbour) {
                    stack.push(neighbour);
                }
            }
        }

        out
    }
}

/// A concrete graph provider backed by insertion-ordered adjacency lists.
///
/// The engine itself never requires this type; it exists for callers that
/// want a ready-made directed, weighted graph and for the test graphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdjacencyGraph<V: Vertex> {
    edges_out: FxHashMap<V, Vec<(V, Weight)>>,
    num_edges: usize,
}

impl<V: Vertex> AdjacencyGraph<V> {
    pub fn new() -> Self {
        Self {
            edges_out: FxHashMap::default(),
            num_edges: 0,
        }
    }

    /// Adds a vertex without any edges. A no-op if it already exists.
    pub fn add_vertex(&mut self, vertex: V) {
        self.edges_out.entry(vertex).or_default();
    }

    /// Adds a directed edge from `source` to `target`. Both endpoints are
    /// created on demand. A duplicate edge keeps the lower weight, like the
    /// parallel-edge handling of the underlying road graphs this engine was
    /// modelled on.
    pub fn add_edge(&mut self, source: V, target: V, weight: Weight) {
        self.edges_out.entry(target.clone()).or_default();

        let out = self.edges_out.entry(source).or_default();
        for (existing, old_weight) in out.iter_mut() {
            if *existing == target {
                if weight < *old_weight {
                    *old_weight = weight;
                }
                return;
            }
        }

        out.push((target, weight));
        self.num_edges += 1;
    }

    /// Adds the edge in both directions.
    pub fn add_edge_bidir(&mut self, a: V, b: V, weight: Weight) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    pub fn num_vertices(&self) -> usize {
        self.edges_out.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Returns an iterator over all vertices of the graph
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.edges_out.keys()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.edges_out.contains_key(vertex)
    }

    /// Out-degree of `vertex`; zero for unknown vertices.
    pub fn degree(&self, vertex: &V) -> usize {
        self.edges_out.get(vertex).map_or(0, Vec::len)
    }

    /// Weight of the edge from `source` to `target`, if present.
    pub fn weight(&self, source: &V, target: &V) -> Option<Weight> {
        self.edges_out
            .get(source)?
            .iter()
            .find(|(v, _)| v == target)
            .map(|(_, w)| *w)
    }
}

impl<V: Vertex> Graph for AdjacencyGraph<V> {
    type Vertex = V;

    fn neighbours(&self, from: &V) -> Vec<V> {
        self.edges_out
            .get(from)
            .map(|out| out.iter().map(|(v, _)| v.clone()).collect())
            .unwrap_or_default()
    }
}

impl<V: Vertex> Default for AdjacencyGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    source: u32,
    target: u32,
    weight: Weight,
}

impl AdjacencyGraph<u32> {
    /// Builds a graph from a CSV edge list with a `source,target,weight`
    /// header.
    pub fn from_csv(path_to_edges: &Path) -> anyhow::Result<Self> {
        let mut g = AdjacencyGraph::new();

        let mut reader = csv::Reader::from_path(path_to_edges)?;
        for result in reader.deserialize() {
            let record: EdgeRecord = result.context("Failed to parse edge")?;
            g.add_edge(record.source, record.target, record.weight);
        }

        debug!(
            "Read {} vertices and {} edges from {:?}",
            g.num_vertices(),
            g.num_edges(),
            path_to_edges
        );
        Ok(g)
    }

    /// Writes the edge list back out in the same CSV format `from_csv`
    /// accepts.
    pub fn export_csv(&self, path_to_edges: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(path_to_edges)?;

        for (source, out) in &self.edges_out {
            for (target, weight) in out {
                wtr.serialize(EdgeRecord {
                    source: *source,
                    target: *target,
                    weight: *weight,
                })?;
            }
        }

        wtr.flush()?;
        Ok(())
    }
}
