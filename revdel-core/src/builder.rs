//! Builder utilities for configuring random MST batches.
//!
//! Validates the batch shape before constructing [`Batch`] instances.

use std::num::NonZeroUsize;

use crate::{batch::Batch, error::BatchError};

/// Default number of vertices per generated graph.
pub const DEFAULT_VERTEX_COUNT: usize = 100;

/// Default number of graphs per batch.
pub const DEFAULT_GRAPH_COUNT: usize = 20;

/// Configures and constructs [`Batch`] instances.
///
/// # Examples
/// ```
/// use revdel_core::BatchBuilder;
///
/// let batch = BatchBuilder::new()
///     .with_vertex_count(8)
///     .with_graph_count(3)
///     .with_seed(42)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(batch.vertex_count().get(), 8);
/// assert_eq!(batch.graph_count().get(), 3);
/// assert_eq!(batch.seed(), Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct BatchBuilder {
    vertex_count: usize,
    graph_count: usize,
    seed: Option<u64>,
}

impl Default for BatchBuilder {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            graph_count: DEFAULT_GRAPH_COUNT,
            seed: None,
        }
    }
}

impl BatchBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use revdel_core::BatchBuilder;
    ///
    /// let builder = BatchBuilder::new();
    /// assert_eq!(builder.vertex_count(), 100);
    /// assert_eq!(builder.graph_count(), 20);
    /// assert_eq!(builder.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices per graph.
    #[must_use]
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Returns the configured number of vertices per graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Overrides the number of graphs in the batch.
    #[must_use]
    pub fn with_graph_count(mut self, graph_count: usize) -> Self {
        self.graph_count = graph_count;
        self
    }

    /// Returns the configured number of graphs.
    #[must_use]
    pub fn graph_count(&self) -> usize {
        self.graph_count
    }

    /// Seeds the random source so the batch is reproducible.
    ///
    /// # Examples
    /// ```
    /// use revdel_core::BatchBuilder;
    ///
    /// let builder = BatchBuilder::new().with_seed(7);
    /// assert_eq!(builder.seed(), Some(7));
    /// ```
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`Batch`].
    ///
    /// # Errors
    /// Returns [`BatchError::InvalidVertexCount`] or
    /// [`BatchError::InvalidGraphCount`] when either count is zero.
    ///
    /// # Examples
    /// ```
    /// use revdel_core::{BatchBuilder, BatchError};
    ///
    /// let err = BatchBuilder::new().with_graph_count(0).build();
    /// assert!(matches!(err, Err(BatchError::InvalidGraphCount { got: 0 })));
    /// ```
    pub fn build(self) -> Result<Batch, BatchError> {
        let vertex_count =
            NonZeroUsize::new(self.vertex_count).ok_or(BatchError::InvalidVertexCount {
                got: self.vertex_count,
            })?;
        let graph_count =
            NonZeroUsize::new(self.graph_count).ok_or(BatchError::InvalidGraphCount {
                got: self.graph_count,
            })?;

        Ok(Batch::new(vertex_count, graph_count, self.seed))
    }
}
