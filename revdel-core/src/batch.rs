//! Batch orchestration over independently generated random graphs.
//!
//! Each graph is generated, reduced and measured inside one loop iteration,
//! so it is exclusively owned for its whole lifetime.

use std::num::NonZeroUsize;

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, info, instrument};

use crate::{error::BatchError, generate::random_complete_graph, mst::reverse_delete, stats};

/// MST weights observed for a batch of random graphs.
///
/// # Examples
/// ```
/// use revdel_core::BatchReport;
///
/// let report = BatchReport::new(10, vec![4.0, 6.0]);
/// assert_eq!(report.mean_weight(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BatchReport {
    vertex_count: usize,
    weights: Vec<f64>,
}

impl BatchReport {
    /// Builds a report from per-graph MST weights.
    ///
    /// # Panics
    /// Panics when `weights` is empty.
    #[must_use]
    pub fn new(vertex_count: usize, weights: Vec<f64>) -> Self {
        assert!(!weights.is_empty(), "a batch report needs at least one graph");
        Self {
            vertex_count,
            weights,
        }
    }

    /// Returns the number of vertices of every graph in the batch.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the MST weight of each graph in generation order.
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the mean MST weight across the batch.
    #[must_use]
    pub fn mean_weight(&self) -> f64 {
        stats::mean(&self.weights).unwrap_or_default()
    }
}

/// A validated batch of random MST computations.
///
/// Construct through [`crate::BatchBuilder`].
///
/// # Examples
/// ```
/// use revdel_core::BatchBuilder;
///
/// let report = BatchBuilder::new()
///     .with_vertex_count(6)
///     .with_graph_count(4)
///     .with_seed(11)
///     .build()?
///     .run()?;
/// assert_eq!(report.weights().len(), 4);
/// assert!(report.mean_weight() >= 0.0);
/// # Ok::<(), revdel_core::BatchError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Batch {
    vertex_count: NonZeroUsize,
    graph_count: NonZeroUsize,
    seed: Option<u64>,
}

impl Batch {
    pub(crate) fn new(
        vertex_count: NonZeroUsize,
        graph_count: NonZeroUsize,
        seed: Option<u64>,
    ) -> Self {
        Self {
            vertex_count,
            graph_count,
            seed,
        }
    }

    /// Returns the number of vertices per graph.
    #[must_use]
    pub fn vertex_count(&self) -> NonZeroUsize {
        self.vertex_count
    }

    /// Returns the number of graphs in the batch.
    #[must_use]
    pub fn graph_count(&self) -> NonZeroUsize {
        self.graph_count
    }

    /// Returns the seed of the random source, if one was configured.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates every graph, reduces it and records its MST weight.
    ///
    /// All graphs draw from a single random source, seeded when a seed was
    /// configured and from OS entropy otherwise.
    ///
    /// # Errors
    /// Returns [`BatchError::Mst`] when a reduction fails.
    #[instrument(
        name = "core.batch",
        err,
        skip(self),
        fields(
            vertices = self.vertex_count.get(),
            graphs = self.graph_count.get(),
            seed = ?self.seed,
        ),
    )]
    pub fn run(&self) -> Result<BatchReport, BatchError> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut weights = Vec::with_capacity(self.graph_count.get());
        for graph_index in 0..self.graph_count.get() {
            let mut graph = random_complete_graph(self.vertex_count.get(), &mut rng);
            let summary = reverse_delete(&mut graph).map_err(|error| BatchError::Mst {
                graph: graph_index,
                error,
            })?;
            debug!(
                graph = graph_index,
                weight = summary.total_weight(),
                "graph reduced"
            );
            weights.push(summary.total_weight());
        }

        let report = BatchReport::new(self.vertex_count.get(), weights);
        info!(mean_weight = report.mean_weight(), "batch completed");
        Ok(report)
    }
}
