use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Termination criterion for the Lloyd iteration loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergencePolicy {
    /// Stop when the maximum per-centroid Euclidean movement after an update
    /// falls below `epsilon`. The default policy.
    Displacement,

    /// Stop as soon as an iteration produces zero reassignments. Terminates
    /// on its own for finite inputs, but the iteration cap still applies.
    Stability,
}

/// Configuration for a clustering run.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Number of clusters (k >= 1)
    pub k: usize,

    /// Hard cap on the number of Lloyd iterations
    pub max_iterations: usize,

    /// Which termination criterion to apply
    pub policy: ConvergencePolicy,

    /// Displacement threshold. Only consulted by the displacement policy;
    /// a negative value disables early stopping entirely.
    pub epsilon: f64,

    /// Seed for centroid initialization. `None` draws from OS entropy,
    /// so two unseeded runs may produce different clusterings.
    pub seed: Option<u64>,

    /// Worker count for the assignment stage. `None` means "auto"
    /// (the global rayon pool).
    pub parallelism: Option<usize>,

    /// Print per-iteration progress to stderr
    pub verbose: bool,

    /// Cooperative cancellation flag, checked at each iteration boundary.
    /// Setting it aborts the run with `ClusterError::Interrupted`.
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            k: 8,
            max_iterations: 100,
            policy: ConvergencePolicy::Displacement,
            epsilon: 1e-4,
            seed: None,
            parallelism: None,
            verbose: false,
            cancel_flag: None,
        }
    }
}

impl ClusterConfig {
    /// Create a new configuration with the specified number of clusters
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    /// Set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence policy
    pub fn with_policy(mut self, policy: ConvergencePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the displacement threshold
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set a deterministic seed for centroid initialization
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the worker count for the assignment stage
    pub fn with_parallelism(mut self, workers: usize) -> Self {
        self.parallelism = Some(workers);
        self
    }

    /// Set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Attach a cancellation flag shared with the caller
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(flag);
        self
    }
}
