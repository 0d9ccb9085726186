//! Dense adjacency-matrix graph backed by contiguous row-major storage.

use tracing::warn;

use crate::error::GraphError;

use super::{Graph, GraphMut};

/// Weighted graph stored as an `n * n` matrix of optional weights.
///
/// Every lookup is O(1). In undirected mode both `(i, j)` and `(j, i)` are
/// written on every mutation, so adjacency and weights stay symmetric.
///
/// # Examples
/// ```
/// use revdel_core::{Graph, GraphMut, MatrixGraph};
///
/// let mut graph = MatrixGraph::new(4);
/// graph.add_edge(1, 3, 2.0);
/// graph.add_edge(3, 1, 5.0);
/// assert_eq!(graph.weight(1, 3), Some(5.0));
/// graph.delete_edge(1, 3);
/// assert!(!graph.is_edge(3, 1));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MatrixGraph {
    vertex_count: usize,
    directed: bool,
    weights: Vec<Option<f64>>,
}

impl MatrixGraph {
    /// Creates an undirected graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self::with_direction(vertex_count, false)
    }

    /// Creates a directed graph with `vertex_count` vertices and no edges.
    ///
    /// # Examples
    /// ```
    /// use revdel_core::{Graph, GraphMut, MatrixGraph};
    ///
    /// let mut graph = MatrixGraph::directed(2);
    /// graph.add_edge(0, 1, 1.0);
    /// assert!(graph.is_edge(0, 1));
    /// assert!(!graph.is_edge(1, 0));
    /// ```
    #[must_use]
    pub fn directed(vertex_count: usize) -> Self {
        Self::with_direction(vertex_count, true)
    }

    fn with_direction(vertex_count: usize, directed: bool) -> Self {
        Self {
            vertex_count,
            directed,
            weights: vec![None; vertex_count.saturating_mul(vertex_count)],
        }
    }

    /// Builds an undirected graph from `(source, target, weight)` triples.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when an endpoint is not below
    /// `vertex_count` and [`GraphError::NonFiniteWeight`] for NaN or infinite
    /// weights.
    ///
    /// # Examples
    /// ```
    /// use revdel_core::{Graph, GraphError, MatrixGraph};
    ///
    /// let graph = MatrixGraph::from_edges(3, &[(0, 1, 1.0), (1, 2, 2.0)])?;
    /// assert_eq!(graph.num_edges(), 2);
    ///
    /// let err = MatrixGraph::from_edges(2, &[(0, 2, 1.0)]);
    /// assert!(matches!(err, Err(GraphError::VertexOutOfRange { vertex: 2, .. })));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(usize, usize, f64)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count);
        for &(source, target, weight) in edges {
            graph.try_add_edge(source, target, weight)?;
        }
        Ok(graph)
    }

    /// Inserts an edge after validating its endpoints and weight.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an endpoint outside the
    /// graph and [`GraphError::NonFiniteWeight`] for NaN or infinite weights.
    /// The graph is unchanged on error.
    pub fn try_add_edge(
        &mut self,
        source: usize,
        target: usize,
        weight: f64,
    ) -> Result<(), GraphError> {
        for vertex in [source, target] {
            if vertex >= self.vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        if !weight.is_finite() {
            warn!(source, target, "rejecting edge with non-finite weight");
            return Err(GraphError::NonFiniteWeight {
                left: source,
                right: target,
            });
        }
        self.add_edge(source, target, weight);
        Ok(())
    }

    #[track_caller]
    fn slot(&self, source: usize, target: usize) -> usize {
        assert!(
            source < self.vertex_count && target < self.vertex_count,
            "edge ({source}, {target}) is out of range for a graph with {} vertices",
            self.vertex_count,
        );
        source * self.vertex_count + target
    }

    #[track_caller]
    fn set(&mut self, source: usize, target: usize, weight: Option<f64>) {
        let forward = self.slot(source, target);
        self.weights[forward] = weight;
        if !self.directed {
            let backward = self.slot(target, source);
            self.weights[backward] = weight;
        }
    }
}

impl Graph for MatrixGraph {
    fn num_vertices(&self) -> usize {
        self.vertex_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    /// # Panics
    /// Panics when either vertex is out of range.
    #[track_caller]
    fn weight(&self, source: usize, target: usize) -> Option<f64> {
        self.weights[self.slot(source, target)]
    }

    /// # Panics
    /// Panics when `vertex` is out of range.
    #[track_caller]
    fn neighbours(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        let start = self.slot(vertex, 0);
        self.weights[start..start + self.vertex_count]
            .iter()
            .enumerate()
            .filter_map(|(target, weight)| weight.map(|_| target))
    }
}

impl GraphMut for MatrixGraph {
    /// # Panics
    /// Panics when either vertex is out of range.
    #[track_caller]
    fn add_edge(&mut self, source: usize, target: usize, weight: f64) {
        self.set(source, target, Some(weight));
    }

    /// # Panics
    /// Panics when either vertex is out of range.
    #[track_caller]
    fn delete_edge(&mut self, source: usize, target: usize) {
        self.set(source, target, None);
    }
}
