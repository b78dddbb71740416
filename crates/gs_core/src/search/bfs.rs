//! Breadth-first search returning a minimum-edge-count path.
use std::collections::VecDeque;

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::graph::Graph;
use crate::path::GPath;
use crate::search::trace_parents;
use crate::statistics::SearchStats;

/// Layer-by-layer exploration over a FIFO frontier with parent-pointer path
/// reconstruction. The search stops the instant the target turns up among a
/// dequeued vertex's neighbours, so the last frontier layer is only
/// partially expanded. Every examined neighbour lands in the visited set,
/// discovered or not.
pub struct Bfs<'a, G: Graph> {
    pub stats: SearchStats,
    g: &'a G,
}

impl<'a, G: Graph> Bfs<'a, G> {
    pub fn new(g: &'a G) -> Self {
        Bfs {
            g,
            stats: SearchStats::default(),
        }
    }

    pub fn search(&mut self, source: &G::Vertex, target: &G::Vertex) -> Option<GPath<G::Vertex>> {
        self.stats.init();

        let mut visited = FxHashSet::default();
        visited.insert(source.clone());

        if source == target {
            self.stats.finish();
            return Some(GPath::new(vec![source.clone()], 0.0, visited));
        }

        let mut frontier = VecDeque::new();
        let mut parents: FxHashMap<G::Vertex, Option<G::Vertex>> = FxHashMap::default();

        frontier.push_back(source.clone());
        parents.insert(source.clone(), None);

        while let Some(current) = frontier.pop_front() {
            self.stats.vertices_settled += 1;

            for neighbour in self.g.neighbours(&current) {
                visited.insert(neighbour.clone());

                if neighbour == *target {
                    let mut vertices = trace_parents(&current, &parents);
                    vertices.push(neighbour);
                    self.stats.finish();
                    let path = GPath::new(vertices, 0.0, visited);
                    debug!("Path found: {:?}", path.vertices);
                    info!("{}", self.stats);
                    return Some(path);
                }

                if !parents.contains_key(&neighbour) {
                    parents.insert(neighbour.clone(), Some(current.clone()));
                    frontier.push_back(neighbour);
                }
            }
        }

        self.stats.finish();
        info!("No path found, {}", self.stats);
        None
    }
}
