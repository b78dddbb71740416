//! Depth-first search returning the first discovered path.
use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::Graph;
use crate::path::GPath;
use crate::search::trace_parents;
use crate::statistics::SearchStats;

/// A vertex, once expanded, is never expanded again, not even along a
/// different branch; the search therefore finds *some* path, not a shortest
/// one, touching every vertex at most once. The recursion of the textbook
/// formulation is replaced by an explicit stack with identical visit order,
/// so path depth is not limited by the call stack.
pub struct Dfs<'a, G: Graph> {
    pub stats: SearchStats,
    g: &'a G,
}

impl<'a, G: Graph> Dfs<'a, G> {
    pub fn new(g: &'a G) -> Self {
        Dfs {
            g,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, source: &G::Vertex, target: &G::Vertex) -> Option<GPath<G::Vertex>> {
        self.stats.init();

        let mut visited = FxHashSet::default();
        let mut parents: FxHashMap<G::Vertex, Option<G::Vertex>> = FxHashMap::default();

        let mut stack = vec![(source.clone(), None)];

        while let Some((current, parent)) = stack.pop() {
            if visited.contains(&current) {
                continue;
            }
            visited.insert(current.clone());
            parents.insert(current.clone(), parent);
            self.stats.vertices_settled += 1;

            if current == *target {
                let vertices = trace_parents(&current, &parents);
                self.stats.finish();
                let path = GPath::new(vertices, 0.0, visited);
                debug!("Path found: {:?}", path.vertices);
                info!("{}", self.stats);
                return Some(path);
            }

            // Reversed push keeps the expansion order of the recursive form:
            // the first neighbour's whole subtree is explored first.
            for neighbour in self.g.neighbours(&current).into_iter().rev() {
                if !visited.contains(&neighbour) {
                    stack.push((neighbour, Some(current.clone())));
                }
            }
        }

        self.stats.finish();
        info!("No path found, {}", self.stats);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{assert_no_path, assert_path};
    use crate::util::test_graphs::{generate_cycle_graph, generate_weighted_grid_graph};

    #[test]
    fn follows_first_neighbour_branch() {
        //      7 -> 8 -> 9
        //      |         |
        // 0 -> 5 -> 6 -  |
        // |         |  \ |
        // 1 -> 2 -> 3 -> 4
        let g = generate_weighted_grid_graph();

        // 1 is inserted before 5 for vertex 0, so the lower chain wins
        assert_path(vec![0, 1, 2, 3, 4], 0.0, Dfs::new(&g).search(&0, &4));
        assert_path(vec![4], 0.0, Dfs::new(&g).search(&4, &4));
        assert_no_path(Dfs::new(&g).search(&4, &0));
    }

    #[test]
    fn walks_around_a_cycle() {
        // A -> B -> C -> D -> A
        let g = generate_cycle_graph();

        assert_path(vec!['A', 'B', 'C'], 0.0, Dfs::new(&g).search(&'A', &'C'));
        assert_path(
            vec!['D', 'A', 'B', 'C'],
            0.0,
            Dfs::new(&g).search(&'D', &'C'),
        );
    }

    #[test]
    fn records_every_touched_vertex() {
        let g = generate_weighted_grid_graph();

        let mut dfs = Dfs::new(&g);
        let path = dfs.search(&0, &4).unwrap();

        // the whole lower chain was expanded, nothing beyond it
        assert_eq!(path.visited.len(), dfs.stats.vertices_settled);
        for v in &path.vertices {
            assert!(path.visited.contains(v));
        }
    }

    #[test]
    fn unknown_vertex_has_no_path() {
        let g = generate_cycle_graph();

        assert_no_path(Dfs::new(&g).search(&'A', &'Z'));
        // an unknown source still trivially reaches itself
        assert_path(vec!['Z'], 0.0, Dfs::new(&g).search(&'Z', &'Z'));
    }
}
