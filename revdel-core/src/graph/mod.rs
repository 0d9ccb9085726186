//! Graph abstractions consumed by the reverse-delete engine.
//!
//! [`Graph`] exposes the read side (adjacency and weights) and [`GraphMut`]
//! adds edge insertion and deletion. The engine only ever talks to these
//! traits; [`MatrixGraph`] is the dense implementation shipped with the crate.

mod matrix;

pub use matrix::MatrixGraph;

/// Read access to a weighted graph over the fixed vertex set `0..n`.
///
/// Vertex indices outside `0..num_vertices()` are a contract violation and
/// implementations should panic rather than return a value.
///
/// # Examples
/// ```
/// use revdel_core::{Graph, GraphMut, MatrixGraph};
///
/// let mut graph = MatrixGraph::new(3);
/// graph.add_edge(0, 2, 1.5);
/// assert!(graph.is_edge(2, 0));
/// assert_eq!(graph.weight(0, 2), Some(1.5));
/// assert_eq!(graph.weight(0, 1), None);
/// assert_eq!(graph.neighbours(0).collect::<Vec<_>>(), [2]);
/// assert_eq!(graph.num_edges(), 1);
/// ```
pub trait Graph {
    /// Returns the number of vertices.
    fn num_vertices(&self) -> usize;

    /// Returns whether edges are stored with a direction.
    fn is_directed(&self) -> bool;

    /// Returns whether an edge joins `source` and `target`.
    fn is_edge(&self, source: usize, target: usize) -> bool {
        self.weight(source, target).is_some()
    }

    /// Returns the weight of the edge joining `source` and `target`, or `None`
    /// when no such edge exists.
    fn weight(&self, source: usize, target: usize) -> Option<f64>;

    /// Returns the vertices adjacent to `vertex` in ascending order.
    fn neighbours(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.num_vertices()).filter(move |&other| self.is_edge(vertex, other))
    }

    /// Returns the number of stored edges, counting each undirected edge once.
    #[must_use]
    fn num_edges(&self) -> usize {
        let n = self.num_vertices();
        let mut count = 0;
        for source in 0..n {
            let first_target = if self.is_directed() { 0 } else { source };
            count += (first_target..n)
                .filter(|&target| self.is_edge(source, target))
                .count();
        }
        count
    }
}

/// Edge mutation on top of [`Graph`].
pub trait GraphMut: Graph {
    /// Inserts an edge, overwriting the weight when it already exists.
    fn add_edge(&mut self, source: usize, target: usize, weight: f64);

    /// Removes an edge. Removing an absent edge is a no-op.
    fn delete_edge(&mut self, source: usize, target: usize);
}
