//! Random complete-graph generation.
//!
//! The random source is always supplied by the caller so that runs can be
//! reproduced from a seed.

use rand::Rng;

use crate::graph::{GraphMut, MatrixGraph};

/// Exclusive upper bound of generated edge weights.
pub const MAX_RANDOM_WEIGHT: f64 = 10.0;

/// Builds a complete undirected graph whose weights are drawn uniformly from
/// `[0, MAX_RANDOM_WEIGHT)`.
///
/// Every pair `i < j` receives an edge, so the result is connected whenever
/// `vertex_count >= 1`.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use revdel_core::{Graph, random_complete_graph};
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = random_complete_graph(5, &mut rng);
/// assert_eq!(graph.num_edges(), 10);
/// ```
#[must_use]
pub fn random_complete_graph<R: Rng + ?Sized>(vertex_count: usize, rng: &mut R) -> MatrixGraph {
    let mut graph = MatrixGraph::new(vertex_count);
    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            graph.add_edge(source, target, rng.gen_range(0.0..MAX_RANDOM_WEIGHT));
        }
    }
    graph
}
