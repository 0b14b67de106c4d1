use thiserror::Error;

/// Error types for a clustering run.
///
/// Every variant is fatal to the run that produced it: the engine recovers
/// errors only at the run boundary and never publishes partial state.
#[derive(Error, Debug)]
pub enum ClusterError {
    /// The run was misconfigured (k < 1, or the input vector set is empty)
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A vector's length disagrees with the established dimensionality
    #[error("Dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The worker pool could not be built or an assignment task failed
    #[error("Worker failure: {0}")]
    WorkerFailure(String),

    /// The run was cancelled externally before reaching a terminal state
    #[error("Clustering run was interrupted")]
    Interrupted,
}
