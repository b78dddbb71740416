//! Interactive shell around the graph-search engine. Loads an edge CSV and
//! answers search queries against it.
use std::path::{Path, PathBuf};

use gs_core::graph::{AdjacencyGraph, Graph};
use gs_core::path::GPath;
use gs_core::search::{bfs::Bfs, dfs::Dfs, dijkstra::Dijkstra};
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};

struct Context {
    graph: AdjacencyGraph<u32>,
}

impl Context {
    fn new(graph: AdjacencyGraph<u32>) -> Self {
        Self { graph }
    }
}

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} vertices and {} edges",
        context.graph.num_vertices(),
        context.graph.num_edges()
    )))
}

fn format_path(path: Option<GPath<u32>>) -> Option<String> {
    match path {
        Some(path) => Some(format!("{}", path)),
        None => Some("No path found".to_string()),
    }
}

fn run_dfs(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<u32>("src").unwrap();
    let dst = *args.get_one::<u32>("dst").unwrap();

    Ok(format_path(Dfs::new(&context.graph).search(&src, &dst)))
}

fn run_bfs(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<u32>("src").unwrap();
    let dst = *args.get_one::<u32>("dst").unwrap();

    Ok(format_path(Bfs::new(&context.graph).search(&src, &dst)))
}

fn run_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<u32>("src").unwrap();
    let dst = *args.get_one::<u32>("dst").unwrap();

    let g = &context.graph;
    let mut dijkstra = Dijkstra::new(g);
    let sp = dijkstra.search(&src, &dst, |a, b| g.weight(a, b).unwrap_or(f64::INFINITY));

    match sp {
        Some(sp) => Ok(Some(format!("{}\nTook: {:?}", sp, dijkstra.stats.duration))),
        None => Ok(Some("No path found".to_string())),
    }
}

fn measure_dijkstra(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    let g = &context.graph;
    let vertices: Vec<u32> = g.vertices().copied().collect();
    if vertices.is_empty() {
        return Ok(Some("Graph is empty".to_string()));
    }

    // Select n random start and end vertices
    let mut rng = rand::thread_rng();
    let src_nodes: Vec<u32> = (0..n)
        .map(|_| vertices[rng.gen_range(0..vertices.len())])
        .collect();
    let dst_nodes: Vec<u32> = (0..n)
        .map(|_| vertices[rng.gen_range(0..vertices.len())])
        .collect();

    let mut res = String::new();
    // Run Dijkstra for each pair of vertices
    for (src, dst) in src_nodes.iter().zip(dst_nodes.iter()) {
        let mut dijkstra = Dijkstra::new(g);
        let sp = dijkstra.search(src, dst, |a, b| g.weight(a, b).unwrap_or(f64::INFINITY));
        if sp.is_none() {
            continue;
        }
        res.push_str(&format!(
            "{} -> {}: {:?}\n",
            src, dst, dijkstra.stats.duration
        ));
    }

    Ok(Some(res))
}

fn reachable(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<u32>("src").unwrap();

    let reachable = context.graph.all_reachable(&src);
    Ok(Some(format!(
        "{} vertices reachable from {}",
        reachable.len(),
        src
    )))
}

fn adjacency(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<u32>("src").unwrap();

    Ok(Some(context.graph.format_adjacency(&src)))
}

fn src_dst_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("src")
                .value_parser(value_parser!(u32))
                .required(true)
                .help("ID of source vertex"),
        )
        .arg(
            Arg::new("dst")
                .value_parser(value_parser!(u32))
                .required(true)
                .help("ID of destination vertex"),
        )
}

fn main() -> Result<()> {
    env_logger::init();

    let path_to_edges = std::env::args().nth(1).expect("No path to edge CSV given");
    let graph = AdjacencyGraph::from_csv(Path::new(&path_to_edges)).expect("Failed to load graph");
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to test graph search algorithms")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(".history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            src_dst_args(Command::new("dfs")).about("Find a path using depth-first search"),
            run_dfs,
        )
        .with_command(
            src_dst_args(Command::new("bfs"))
                .about("Find a fewest-edges path using breadth-first search"),
            run_bfs,
        )
        .with_command(
            src_dst_args(Command::new("dijk"))
                .about("Calculate shortest path using Dijkstra's algorithm"),
            run_dijkstra,
        )
        .with_command(
            Command::new("dijkm")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random shortest paths to calculate"),
                )
                .about("Measure `n` random shortest paths calculations"),
            measure_dijkstra,
        )
        .with_command(
            Command::new("reach")
                .arg(
                    Arg::new("src")
                        .value_parser(value_parser!(u32))
                        .required(true)
                        .help("ID of source vertex"),
                )
                .about("Count the vertices reachable from a vertex"),
            reachable,
        )
        .with_command(
            Command::new("adj")
                .arg(
                    Arg::new("src")
                        .value_parser(value_parser!(u32))
                        .required(true)
                        .help("ID of root vertex"),
                )
                .about("Print the adjacency listing of the reachable subgraph"),
            adjacency,
        );

    repl.run()
}
