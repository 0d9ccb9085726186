//! Shared test utilities for `revdel-core`.

use proptest::test_runner::Config as ProptestConfig;
use revdel_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::graph::{Graph, GraphMut, MatrixGraph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROGTEST_CASES` and
/// `REVDEL_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// A mutation observed by [`RecordingGraph`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Mutation {
    Add { source: usize, target: usize },
    Delete { source: usize, target: usize },
}

/// [`MatrixGraph`] wrapper that records every mutation for assertions.
#[derive(Clone, Debug)]
pub(crate) struct RecordingGraph {
    inner: MatrixGraph,
    mutations: Vec<Mutation>,
}

impl RecordingGraph {
    #[must_use]
    pub(crate) fn new(inner: MatrixGraph) -> Self {
        Self {
            inner,
            mutations: Vec::new(),
        }
    }

    /// Returns the mutations applied so far, in order.
    #[must_use]
    pub(crate) fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    /// Returns how many times the unordered pair `{a, b}` was deleted.
    #[must_use]
    pub(crate) fn deletions_of(&self, a: usize, b: usize) -> usize {
        let key = (a.min(b), a.max(b));
        self.mutations
            .iter()
            .filter(|mutation| match **mutation {
                Mutation::Delete { source, target } => {
                    (source.min(target), source.max(target)) == key
                }
                Mutation::Add { .. } => false,
            })
            .count()
    }

    /// Returns the pairs restored by `add_edge`, in order.
    #[must_use]
    pub(crate) fn restorations(&self) -> Vec<(usize, usize)> {
        self.mutations
            .iter()
            .filter_map(|mutation| match *mutation {
                Mutation::Add { source, target } => Some((source, target)),
                Mutation::Delete { .. } => None,
            })
            .collect()
    }

    #[must_use]
    pub(crate) fn into_inner(self) -> MatrixGraph {
        self.inner
    }
}

impl Graph for RecordingGraph {
    fn num_vertices(&self) -> usize {
        self.inner.num_vertices()
    }

    fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }

    fn weight(&self, source: usize, target: usize) -> Option<f64> {
        self.inner.weight(source, target)
    }
}

impl GraphMut for RecordingGraph {
    fn add_edge(&mut self, source: usize, target: usize, weight: f64) {
        self.mutations.push(Mutation::Add { source, target });
        self.inner.add_edge(source, target, weight);
    }

    fn delete_edge(&mut self, source: usize, target: usize) {
        self.mutations.push(Mutation::Delete { source, target });
        self.inner.delete_edge(source, target);
    }
}
