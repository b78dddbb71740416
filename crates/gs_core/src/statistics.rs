use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use histogram::Histogram;

use crate::graph::{AdjacencyGraph, Vertex};

/// Wall-clock and work counters of a single search call.
#[derive(Debug, Default)]
pub struct SearchStats {
    pub vertices_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.vertices_settled = 0;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} vertices settled in {:?}",
            self.vertices_settled, self.duration
        )
    }
}

/// Histogram of out-degrees over all vertices of the graph.
pub fn degree_out_hist<V: Vertex>(g: &AdjacencyGraph<V>) -> Histogram {
    let hist = Histogram::new(0, 10, 30).unwrap();
    for vertex in g.vertices() {
        hist.increment(g.degree(vertex) as u64, 1).unwrap();
    }
    hist
}
