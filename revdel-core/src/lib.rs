//! Revdel core library: dense matrix graphs and reverse-delete MSTs.
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "random")]
mod batch;
#[cfg(feature = "random")]
mod builder;
mod connectivity;
mod error;
mod fixtures;
#[cfg(feature = "random")]
mod generate;
mod graph;
mod mst;
mod stats;

#[cfg(test)]
mod test_utils;

#[cfg(feature = "random")]
#[cfg_attr(docsrs, doc(cfg(feature = "random")))]
pub use crate::{
    batch::{Batch, BatchReport},
    builder::{BatchBuilder, DEFAULT_GRAPH_COUNT, DEFAULT_VERTEX_COUNT},
    generate::{MAX_RANDOM_WEIGHT, random_complete_graph},
};
pub use crate::{
    connectivity::{is_connected, reachable_count, reachable_from},
    error::{BatchError, BatchErrorCode, GraphError, GraphErrorCode, MstError, MstErrorCode},
    fixtures::{EXAMPLE_MST_WEIGHT, FOUR_VERTEX_MST_WEIGHT, example_graph, four_vertex_graph},
    graph::{Graph, GraphMut, MatrixGraph},
    mst::{Edge, ReverseDeleteSummary, candidate_edges, reverse_delete},
    stats::{edges, mean, total_edge_weight},
};
