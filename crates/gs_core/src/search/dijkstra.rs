//! Dijkstra shortest-path search with edge-weight relaxation.
use std::collections::hash_map::Entry;

use log::{debug, info};
use priority_queue::PriorityQueue;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::constants::Weight;
use crate::graph::Graph;
use crate::path::GPath;
use crate::statistics::SearchStats;

/// Per-vertex record of the spanning tree grown by the search: predecessor
/// on the currently best path, sum of weights along it, and whether that
/// sum is final.
#[derive(Debug)]
struct MstNode<V> {
    parent: Option<V>,
    weight_sum_to: Weight,
    settled: bool,
}

/// Priority wrapper ordering the max-heap queue by ascending weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MinWeight(pub(crate) Weight);

impl Eq for MinWeight {}

impl PartialOrd for MinWeight {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        other.0.partial_cmp(&self.0)
    }
}

impl Ord for MinWeight {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .0
            .partial_cmp(&self.0)
            .unwrap_or(std::cmp::Ordering::Equal)
    }
}

/// Minimum-total-weight search driven by an indexed priority queue with
/// decrease-key updates, so every vertex is extracted at most once. Edge
/// weights come from a caller-supplied function and must be non-negative;
/// negative weights are out of contract.
pub struct Dijkstra<'a, G: Graph> {
    pub stats: SearchStats,
    g: &'a G,
}

impl<'a, G: Graph> Dijkstra<'a, G> {
    pub fn new(g: &'a G) -> Self {
        Dijkstra {
            g,
            stats: SearchStats::default(),
        }
    }

    pub fn search(
        &mut self,
        source: &G::Vertex,
        target: &G::Vertex,
        weight: impl Fn(&G::Vertex, &G::Vertex) -> Weight,
    ) -> Option<GPath<G::Vertex>> {
        self.stats.init();

        let mut visited = FxHashSet::default();
        visited.insert(source.clone());

        if source == target {
            self.stats.vertices_settled += 1;
            self.stats.finish();
            return Some(GPath::new(vec![source.clone()], 0.0, visited));
        }

        let mut tree: FxHashMap<G::Vertex, MstNode<G::Vertex>> = FxHashMap::default();
        tree.insert(
            source.clone(),
            MstNode {
                parent: None,
                weight_sum_to: 0.0,
                settled: false,
            },
        );

        let mut queue = PriorityQueue::new();
        queue.push(source.clone(), MinWeight(0.0));

        while let Some((current, MinWeight(weight_sum))) = queue.pop() {
            self.stats.vertices_settled += 1;
            visited.insert(current.clone());
            if let Some(node) = tree.get_mut(&current) {
                node.settled = true;
            }

            if current == *target {
                let path = self.reconstruct(&current, &tree, visited, &weight);
                self.stats.finish();
                debug!("Path found: {:?}", path.vertices);
                info!("{}, weight: {}", self.stats, path.total_weight);
                return Some(path);
            }

            for neighbour in self.g.neighbours(&current) {
                if tree.get(&neighbour).map_or(false, |node| node.settled) {
                    continue;
                }

                let candidate = weight_sum + weight(&current, &neighbour);
                match tree.entry(neighbour.clone()) {
                    Entry::Vacant(entry) => {
                        entry.insert(MstNode {
                            parent: Some(current.clone()),
                            weight_sum_to: candidate,
                            settled: false,
                        });
                        queue.push(neighbour, MinWeight(candidate));
                    }
                    Entry::Occupied(mut entry) => {
                        let node = entry.get_mut();
                        if candidate < node.weight_sum_to {
                            node.weight_sum_to = candidate;
                            node.parent = Some(current.clone());
                            queue.change_priority(&neighbour, MinWeight(candidate));
                        }
                    }
                }
            }
        }

        self.stats.finish();
        info!("No path found, {}", self.stats);
        None
    }

    fn reconstruct(
        &self,
        target: &G::Vertex,
        tree: &FxHashMap<G::Vertex, MstNode<G::Vertex>>,
        visited: FxHashSet<G::Vertex>,
        weight: &impl Fn(&G::Vertex, &G::Vertex) -> Weight,
    ) -> GPath<G::Vertex> {
        let mut vertices = vec![target.clone()];

        let mut walk = tree.get(target).and_then(|node| node.parent.clone());
        while let Some(vertex) = walk {
            walk = tree.get(&vertex).and_then(|node| node.parent.clone());
            vertices.push(vertex);
        }
        vertices.reverse();

        let mut path = GPath::new(vertices, 0.0, visited);
        path.recalculate_total_weight(weight);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{assert_no_path, assert_path};
    use crate::util::test_graphs::{
        generate_cycle_graph, generate_detour_graph, generate_weighted_grid_graph,
    };

    fn init_log() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn simple_path() {
        //      7 -> 8 -> 9
        //      |         |
        // 0 -> 5 -> 6 -  |
        // |         |  \ |
        // 1 -> 2 -> 3 -> 4
        init_log();
        let g = generate_weighted_grid_graph();
        let w = |a: &u32, b: &u32| g.weight(a, b).unwrap();

        let mut d = Dijkstra::new(&g);

        assert_no_path(d.search(&4, &0, w)); // Cannot be reached
        assert_path(vec![0, 5, 7, 8, 9, 4], 13.0, d.search(&0, &4, w));
        assert_path(vec![6, 3], 20.0, d.search(&6, &3, w));
        assert_path(vec![4], 0.0, d.search(&4, &4, w));
        assert_path(vec![1, 2, 3, 4], 22.0, d.search(&1, &4, w));
    }

    #[test]
    fn disconnected_graph() {
        // 0 -> 1 -> 2
        // 3 -> 4 -> 5
        init_log();
        let mut g = crate::graph::AdjacencyGraph::new();
        g.add_edge(0u32, 1, 1.0);
        g.add_edge(1, 2, 1.0);
        g.add_edge(3, 4, 3.0);
        g.add_edge(4, 5, 1.0);
        let w = |a: &u32, b: &u32| g.weight(a, b).unwrap();

        let mut d = Dijkstra::new(&g);

        assert_no_path(d.search(&0, &3, w));
        assert_no_path(d.search(&3, &0, w));
        assert_path(vec![0, 1, 2], 2.0, d.search(&0, &2, w));
        assert_path(vec![3, 4, 5], 4.0, d.search(&3, &5, w));
    }

    #[test]
    fn go_around() {
        // A -> B direct is heavier than the detour through C
        init_log();
        let g = generate_detour_graph();
        let w = |a: &char, b: &char| g.weight(a, b).unwrap();

        let mut d = Dijkstra::new(&g);

        assert_path(vec!['A', 'C', 'B'], 2.0, d.search(&'A', &'B', w));
    }

    #[test]
    fn unit_weights_on_a_cycle() {
        // A -> B -> C -> D -> A
        init_log();
        let g = generate_cycle_graph();

        let path = Dijkstra::new(&g)
            .search(&'A', &'C', |_, _| 1.0)
            .unwrap();
        assert_eq!(path.vertices, vec!['A', 'B', 'C']);
        assert_eq!(path.total_weight, 2.0);
    }

    #[test]
    fn visited_holds_settled_vertices() {
        let g = generate_weighted_grid_graph();
        let w = |a: &u32, b: &u32| g.weight(a, b).unwrap();

        let mut d = Dijkstra::new(&g);
        let path = d.search(&0, &4, w).unwrap();

        assert_eq!(path.visited.len(), d.stats.vertices_settled);
        assert!(path.visited.contains(&0));
        assert!(path.visited.contains(&4));
    }
}
