//! Type definitions for MST property-based tests.

use crate::graph::MatrixGraph;

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a weight drawn from a continuous range.
    Unique,
    /// Edges share a pool of one to three integer weights, stressing ties.
    ManyIdentical,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges.
    Sparse,
    /// Spanning tree plus most of the remaining pairs.
    Dense,
    /// Two or three components with no edges between them.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Keeps the weight distribution alongside the graph so failures report how
/// the input was produced.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Generated input graph.
    pub graph: MatrixGraph,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

/// Configuration for the determinism property.
pub(super) struct RepeatConfig {
    /// Number of times to repeat the reduction per input.
    pub repetitions: usize,
}

impl RepeatConfig {
    /// Loads the configuration from the environment.
    ///
    /// `REVDEL_MST_PBT_REPEATS` controls the repetition count (default: 3).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("REVDEL_MST_PBT_REPEATS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3);
        Self { repetitions }
    }
}
