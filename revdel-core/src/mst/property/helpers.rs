//! Shared helper functions for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::graph::Graph;

use super::types::MstFixture;

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Returns `true` when `actual` and `expected` agree up to summation-order
/// rounding.
pub(super) fn weights_match(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
}

/// Builds a failure carrying the fixture context.
pub(super) fn fail(fixture: &MstFixture, message: impl std::fmt::Display) -> TestCaseError {
    TestCaseError::fail(format!(
        "{message} (distribution={:?}, vertices={}, edges={})",
        fixture.distribution,
        fixture.graph.num_vertices(),
        fixture.graph.num_edges(),
    ))
}
