//! Benchmark parameter types.
//!
//! The `Display` forms become Criterion benchmark identifiers.

use std::fmt;

/// Parameters for a single-graph benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the complete graph.
    pub vertex_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.vertex_count)
    }
}

/// Parameters for a batch benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct BatchBenchParams {
    /// Number of vertices per graph.
    pub vertex_count: usize,
    /// Number of graphs in the batch.
    pub graph_count: usize,
}

impl fmt::Display for BatchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},graphs={}", self.vertex_count, self.graph_count)
    }
}
