//! Seeded graph workloads shared by the benchmarks.

use rand::{SeedableRng, rngs::SmallRng};
use revdel_core::{MatrixGraph, random_complete_graph};

use crate::error::BenchSetupError;

/// Seed used for every generated benchmark graph.
pub const SEED: u64 = 42;

/// Builds the seeded random complete graph for `vertex_count` vertices.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero.
pub fn seeded_complete_graph(vertex_count: usize) -> Result<MatrixGraph, BenchSetupError> {
    if vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    let mut rng = SmallRng::seed_from_u64(SEED);
    Ok(random_complete_graph(vertex_count, &mut rng))
}
