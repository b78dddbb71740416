//! Small fixed graphs shared by tests, benches and examples.
use crate::graph::AdjacencyGraph;

/// Undirected weighted graph with eleven lettered vertices (A = 0 .. K = 10).
pub fn generate_complex_graph() -> AdjacencyGraph<u32> {
    let mut graph = AdjacencyGraph::new();

    let (a, b, c, d, e) = (0, 1, 2, 3, 4);
    let (f, g, h, i, j, k) = (5, 6, 7, 8, 9, 10);

    graph.add_edge_bidir(a, b, 3.0);
    graph.add_edge_bidir(a, c, 5.0);
    graph.add_edge_bidir(a, k, 3.0);

    graph.add_edge_bidir(b, d, 5.0);
    graph.add_edge_bidir(b, c, 3.0);

    graph.add_edge_bidir(c, d, 2.0);
    graph.add_edge_bidir(c, j, 2.0);

    graph.add_edge_bidir(d, j, 4.0);
    graph.add_edge_bidir(d, e, 7.0);

    graph.add_edge_bidir(e, j, 3.0);
    graph.add_edge_bidir(e, f, 6.0);

    graph.add_edge_bidir(f, h, 2.0);
    graph.add_edge_bidir(f, g, 4.0);

    graph.add_edge_bidir(g, h, 3.0);
    graph.add_edge_bidir(g, i, 5.0);

    graph.add_edge_bidir(h, i, 3.0);
    graph.add_edge_bidir(h, j, 2.0);

    graph.add_edge_bidir(i, j, 4.0);
    graph.add_edge_bidir(i, k, 6.0);

    graph.add_edge_bidir(j, k, 3.0);

    graph
}

/// ```text
///           B
///           |
/// E -> A -> C
///      |  /
///      D
/// ```
pub fn generate_simple_graph() -> AdjacencyGraph<u32> {
    let mut g = AdjacencyGraph::new();

    let (a, b, c, d, e) = (0, 1, 2, 3, 4);

    g.add_edge(a, c, 1.0);
    g.add_edge(a, d, 1.0);
    g.add_edge(e, a, 1.0);
    g.add_edge_bidir(c, b, 1.0);
    g.add_edge_bidir(c, d, 1.0);

    g
}

/// ```text
///      7 -> 8 -> 9
///      |         |
/// 0 -> 5 -> 6 -  |
/// |         |  \ |
/// 1 -> 2 -> 3 -> 4
/// ```
pub fn generate_weighted_grid_graph() -> AdjacencyGraph<u32> {
    let mut g = AdjacencyGraph::new();

    g.add_edge(0, 1, 1.0);
    g.add_edge(1, 2, 1.0);
    g.add_edge(2, 3, 1.0);
    g.add_edge(3, 4, 20.0);
    g.add_edge(0, 5, 5.0);
    g.add_edge(5, 6, 1.0);
    g.add_edge(6, 4, 20.0);
    g.add_edge(6, 3, 20.0);
    g.add_edge(5, 7, 5.0);
    g.add_edge(7, 8, 1.0);
    g.add_edge(8, 9, 1.0);
    g.add_edge(9, 4, 1.0);

    g
}

/// Directed four-cycle A -> B -> C -> D -> A with unit weights.
pub fn generate_cycle_graph() -> AdjacencyGraph<char> {
    let mut g = AdjacencyGraph::new();

    g.add_edge('A', 'B', 1.0);
    g.add_edge('B', 'C', 1.0);
    g.add_edge('C', 'D', 1.0);
    g.add_edge('D', 'A', 1.0);

    g
}

/// The direct edge A -> B is heavier than the detour over C.
pub fn generate_detour_graph() -> AdjacencyGraph<char> {
    let mut g = AdjacencyGraph::new();

    g.add_edge('A', 'B', 5.0);
    g.add_edge('A', 'C', 1.0);
    g.add_edge('C', 'B', 1.0);

    g
}
