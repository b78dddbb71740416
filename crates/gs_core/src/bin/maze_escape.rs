//! Escape a randomized maze with all three searches.
//!
//! The maze is an external graph provider built on top of the engine: cells
//! are vertices, opened passages are edges, and travel time between two
//! cells is their Manhattan distance.
use gs_core::constants::Weight;
use gs_core::graph::Graph;
use gs_core::search::{bfs::Bfs, dfs::Dfs, dijkstra::Dijkstra};
use gs_core::util::cli;
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rustc_hash::{FxHashMap, FxHashSet};

type Cell = (usize, usize);

struct Maze {
    width: usize,
    height: usize,
    // opened passages, symmetric
    passages: FxHashMap<Cell, Vec<Cell>>,
    entry: Cell,
    exit: Cell,
}

impl Maze {
    fn new(width: usize, height: usize) -> Self {
        Maze {
            width,
            height,
            passages: FxHashMap::default(),
            entry: (width / 2, height / 2),
            exit: (0, height / 2),
        }
    }

    /// Randomized Prim: grow a spanning tree of passages from the entry
    /// cell, always opening a random frontier wall.
    fn generate_randomized_prim(&mut self, rng: &mut StdRng) {
        let start = self.entry;
        let mut in_maze = FxHashSet::default();
        in_maze.insert(start);

        let mut walls: Vec<(Cell, Cell)> = self
            .grid_neighbours(start)
            .into_iter()
            .map(|to| (start, to))
            .collect();

        while !walls.is_empty() {
            let pick = rng.gen_range(0..walls.len());
            let (from, to) = walls.swap_remove(pick);

            if in_maze.insert(to) {
                self.open_passage(from, to);
                for next in self.grid_neighbours(to) {
                    if !in_maze.contains(&next) {
                        walls.push((to, next));
                    }
                }
            }
        }
    }

    /// Opens up to `count` additional random walls, introducing cycles so
    /// the three searches stop agreeing on a single route.
    fn remove_random_walls(&mut self, rng: &mut StdRng, count: usize) {
        let mut removed = 0;
        let mut attempts = 0;

        while removed < count && attempts < count * 20 {
            attempts += 1;
            let cell = (rng.gen_range(0..self.width), rng.gen_range(0..self.height));
            let around = self.grid_neighbours(cell);
            if around.is_empty() {
                continue;
            }
            let to = around[rng.gen_range(0..around.len())];

            let open = self.passages.get(&cell).map_or(false, |p| p.contains(&to));
            if !open {
                self.open_passage(cell, to);
                removed += 1;
            }
        }
    }

    fn open_passage(&mut self, a: Cell, b: Cell) {
        self.passages.entry(a).or_default().push(b);
        self.passages.entry(b).or_default().push(a);
    }

    fn grid_neighbours(&self, (x, y): Cell) -> Vec<Cell> {
        let mut around = Vec::with_capacity(4);
        if x > 0 {
            around.push((x - 1, y));
        }
        if x + 1 < self.width {
            around.push((x + 1, y));
        }
        if y > 0 {
            around.push((x, y - 1));
        }
        if y + 1 < self.height {
            around.push((x, y + 1));
        }
        around
    }
}

impl Graph for Maze {
    type Vertex = Cell;

    fn neighbours(&self, from: &Cell) -> Vec<Cell> {
        self.passages.get(from).cloned().unwrap_or_default()
    }
}

fn manhattan_time(from: &Cell, to: &Cell) -> Weight {
    let dx = from.0.abs_diff(to.0);
    let dy = from.1.abs_diff(to.1);
    (dx + dy) as Weight
}

fn main() {
    env_logger::init();

    let cfg = cli::parse();
    let mut rng = StdRng::seed_from_u64(cfg.seed);

    let mut maze = Maze::new(cfg.width, cfg.height);
    maze.generate_randomized_prim(&mut rng);
    maze.remove_random_walls(&mut rng, cfg.remove_walls);

    info!(
        "Generated {}x{} maze, seed {}, {} extra walls removed",
        cfg.width, cfg.height, cfg.seed, cfg.remove_walls
    );

    let reachable = maze.all_reachable(&maze.entry);
    println!(
        "Escape from {:?} to {:?}, {} reachable cells",
        maze.entry,
        maze.exit,
        reachable.len()
    );

    if cfg.width * cfg.height <= 36 {
        println!("{}", maze.format_adjacency(&maze.entry));
    }

    let mut dfs = Dfs::new(&maze);
    if let Some(mut path) = dfs.search(&maze.entry, &maze.exit) {
        path.recalculate_total_weight(manhattan_time);
        println!("DFS:      {} ({})", path, dfs.stats);
    }

    let mut bfs = Bfs::new(&maze);
    if let Some(mut path) = bfs.search(&maze.entry, &maze.exit) {
        path.recalculate_total_weight(manhattan_time);
        println!("BFS:      {} ({})", path, bfs.stats);
    }

    let mut dijkstra = Dijkstra::new(&maze);
    if let Some(path) = dijkstra.search(&maze.entry, &maze.exit, manhattan_time) {
        println!("Dijkstra: {} ({})", path, dijkstra.stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_maze() -> Maze {
        let mut rng = StdRng::seed_from_u64(20231113);
        let mut maze = Maze::new(20, 20);
        maze.generate_randomized_prim(&mut rng);
        maze.remove_random_walls(&mut rng, 40);
        maze
    }

    #[test]
    fn every_cell_is_reachable() {
        let maze = escape_maze();
        assert_eq!(maze.all_reachable(&maze.entry).len(), 20 * 20);
    }

    #[test]
    fn searches_escape_the_maze() {
        let maze = escape_maze();

        let mut dfs_path = Dfs::new(&maze)
            .search(&maze.entry, &maze.exit)
            .expect("DFS escapes");
        let mut bfs_path = Bfs::new(&maze)
            .search(&maze.entry, &maze.exit)
            .expect("BFS escapes");
        let dijkstra_path = Dijkstra::new(&maze)
            .search(&maze.entry, &maze.exit, manhattan_time)
            .expect("Dijkstra escapes");

        dfs_path.recalculate_total_weight(manhattan_time);
        bfs_path.recalculate_total_weight(manhattan_time);

        // unit grid: fewest edges and least weight coincide
        assert_eq!(bfs_path.total_weight, dijkstra_path.total_weight);
        assert!(dfs_path.total_weight >= bfs_path.total_weight);
        assert!(bfs_path.edge_count() <= dfs_path.edge_count());

        for path in [&dfs_path, &bfs_path, &dijkstra_path] {
            assert_eq!(path.start(), Some(&maze.entry));
            assert_eq!(path.target(), Some(&maze.exit));
        }
    }
}
