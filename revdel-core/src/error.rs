//! Error types for the revdel core library.
//!
//! Every public error enum is paired with a stable, machine-readable code enum
//! so that logs and the CLI can report failures without matching on display
//! strings.

use std::fmt;

use thiserror::Error;

/// Generates a stable code enum for an error enum, plus `code()` on the error.
///
/// Each line maps `CodeVariant => ErrorVariant [pattern] => "CODE"`.
macro_rules! define_error_codes {
    (
        $(#[$meta:meta])*
        enum $Code:ident for $Error:ident {
            $(
                $(#[$doc:meta])*
                $code_variant:ident => $error_variant:ident $( { $($fields:tt)* } )? => $text:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $Code {
            $( $(#[$doc])* $code_variant, )+
        }

        impl $Code {
            /// Every code of this enum, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$code_variant),+];

            /// Returns the stable machine-readable form of this code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$code_variant => $text,)+
                }
            }
        }

        impl fmt::Display for $Code {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $Error {
            #[doc = concat!("Returns the stable [`", stringify!($Code), "`] for this error.")]
            #[must_use]
            pub const fn code(&self) -> $Code {
                match self {
                    $(Self::$error_variant $( { $($fields)* } )? => $Code::$code_variant,)+
                }
            }
        }
    };
}

/// An error produced by the checked [`crate::MatrixGraph`] mutation API.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex index fell outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// First endpoint as supplied by the caller.
        left: usize,
        /// Second endpoint as supplied by the caller.
        right: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex index fell outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}

/// Errors returned while reducing a graph to its minimum spanning tree.
///
/// Every variant is detected before the graph is mutated, so a failed
/// reduction leaves the caller's graph exactly as it was.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// The graph has no vertices.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// The graph stores directed edges.
    #[error("reverse-delete requires an undirected graph")]
    DirectedGraph,
    /// A present edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// Smaller endpoint of the edge.
        left: usize,
        /// Larger endpoint of the edge.
        right: usize,
    },
    /// Not every vertex is reachable from vertex 0.
    #[error("graph is disconnected: {reachable} of {vertex_count} vertices reachable from vertex 0")]
    Disconnected {
        /// Number of vertices reachable from vertex 0.
        reachable: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// The graph stores directed edges.
        DirectedGraph => DirectedGraph => "MST_DIRECTED_GRAPH",
        /// A present edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "MST_NON_FINITE_WEIGHT",
        /// Not every vertex is reachable from vertex 0.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
    }
}

/// Error type produced when configuring or running a [`crate::Batch`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BatchError {
    /// Graphs must have at least one vertex.
    #[error("vertex_count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The invalid vertex count supplied by the caller.
        got: usize,
    },
    /// A batch must contain at least one graph.
    #[error("graph_count must be at least 1 (got {got})")]
    InvalidGraphCount {
        /// The invalid graph count supplied by the caller.
        got: usize,
    },
    /// Reducing one of the generated graphs failed.
    #[error("graph {graph} failed: {error}")]
    Mst {
        /// Zero-based position of the graph within the batch.
        graph: usize,
        #[source]
        /// Underlying reduction error.
        error: MstError,
    },
}

define_error_codes! {
    /// Stable codes describing [`BatchError`] variants.
    enum BatchErrorCode for BatchError {
        /// Graphs must have at least one vertex.
        InvalidVertexCount => InvalidVertexCount { .. } => "BATCH_INVALID_VERTEX_COUNT",
        /// A batch must contain at least one graph.
        InvalidGraphCount => InvalidGraphCount { .. } => "BATCH_INVALID_GRAPH_COUNT",
        /// Reducing one of the generated graphs failed.
        MstFailure => Mst { .. } => "BATCH_MST_FAILURE",
    }
}

impl BatchError {
    /// Returns the inner [`MstErrorCode`] when a graph reduction failed.
    #[must_use]
    pub const fn mst_code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Mst { error, .. } => Some(error.code()),
            _ => None,
        }
    }
}
