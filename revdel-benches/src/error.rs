//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! inside Criterion closures.

use revdel_core::{BatchError, MstError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// A zero value was passed where a non-zero count was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// A warm-up reduction failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Batch configuration failed.
    #[error("batch configuration failed: {0}")]
    Batch(#[from] BatchError),
}
