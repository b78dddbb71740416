use crate::constants::Weight;
use crate::graph::Vertex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading and trailing vertices shown before a long path is
/// elided in its text representation.
const DISPLAY_CUT: usize = 10;

/// A directed path of connected vertices, the uniform result of every
/// search.
///
/// Representation invariants:
/// 1. every adjacent pair in `vertices` is connected by an edge of the
///    searched graph,
/// 2. a path is never empty; a single-vertex path has equal start and
///    target.
///
/// `total_weight` is zero by convention for unweighted searches until
/// [`recalculate_total_weight`] is called. `visited` records every vertex
/// touched while searching and exists for diagnostics only.
///
/// [`recalculate_total_weight`]: GPath::recalculate_total_weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GPath<V: Vertex> {
    pub vertices: Vec<V>,
    pub total_weight: Weight,
    pub visited: FxHashSet<V>,
}

impl<V: Vertex> GPath<V> {
    pub fn new(vertices: Vec<V>, total_weight: Weight, visited: FxHashSet<V>) -> Self {
        debug_assert!(!vertices.is_empty(), "a path holds at least its start");
        GPath {
            vertices,
            total_weight,
            visited,
        }
    }

    pub fn start(&self) -> Option<&V> {
        self.vertices.first()
    }

    pub fn target(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Number of edges, one less than the number of vertices.
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Cost of the vertex sequence under `weight`, without touching the
    /// stored `total_weight`. Lets a path built by an unweighted search be
    /// scored after the fact.
    pub fn weight_with(&self, weight: impl Fn(&V, &V) -> Weight) -> Weight {
        self.vertices
            .windows(2)
            .map(|pair| weight(&pair[0], &pair[1]))
            .sum()
    }

    /// Stores the recomputed cost in `total_weight`. The only mutation a
    /// path sees after a search returns it.
    pub fn recalculate_total_weight(&mut self, weight: impl Fn(&V, &V) -> Weight) {
        self.total_weight = self.weight_with(weight);
    }
}

impl<V: Vertex> fmt::Display for GPath<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Weight={:.2} Length={} Visited={} (",
            self.total_weight,
            self.vertices.len(),
            self.visited.len()
        )?;

        let tail_cut = self.vertices.len() as i64 - 1 - DISPLAY_CUT as i64;
        let mut separator = "";
        for (count, vertex) in self.vertices.iter().enumerate() {
            // limit the text representation of long paths
            if count < DISPLAY_CUT || count as i64 > tail_cut {
                write!(f, "{}{:?}", separator, vertex)?;
                separator = ", ";
            } else if count == DISPLAY_CUT {
                write!(f, "{}...", separator)?;
            }
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(vertices: Vec<u32>) -> GPath<u32> {
        let visited = vertices.iter().copied().collect();
        GPath::new(vertices, 0.0, visited)
    }

    #[test]
    fn accessors() {
        let p = path_of(vec![1, 2, 3]);

        assert_eq!(p.start(), Some(&1));
        assert_eq!(p.target(), Some(&3));
        assert_eq!(p.edge_count(), 2);

        let single = path_of(vec![9]);
        assert_eq!(single.start(), single.target());
        assert_eq!(single.edge_count(), 0);
    }

    #[test]
    fn weight_recalculation_is_pure() {
        let mut p = path_of(vec![0, 1, 2, 3]);

        assert_eq!(p.weight_with(|_, _| 2.0), 6.0);
        assert_eq!(p.total_weight, 0.0);

        p.recalculate_total_weight(|a, b| (a + b) as Weight);
        assert_eq!(p.total_weight, 1.0 + 3.0 + 5.0);
    }

    #[test]
    fn display_shows_short_paths_in_full() {
        let p = path_of(vec![1, 2, 3]);
        let text = format!("{}", p);

        assert!(text.starts_with("Weight=0.00 Length=3 Visited=3 ("));
        assert!(text.contains("1, 2, 3"));
        assert!(!text.contains("..."));
    }

    #[test]
    fn display_elides_long_paths() {
        let p = path_of((0..40).collect());
        let text = format!("{}", p);

        assert!(text.contains("..."));
        assert!(text.contains("0, 1,"));
        assert!(text.contains("39"));
        // the elided middle never shows up
        assert!(!text.contains("20"));
    }
}
