use crate::algorithm::{run_lloyd, LloydOutcome};
use crate::config::ClusterConfig;
use crate::distance::euclidean_distance;
use crate::error::ClusterError;
use crate::vectors::VectorSet;
use ndarray::{Array2, ArrayView1};

/// One word in a cluster, with its Euclidean distance to the final centroid
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterMember {
    pub word: String,
    pub distance: f32,
}

/// Immutable output of a clustering run.
///
/// Cluster members appear in vector-enumeration order, not sorted by
/// distance; the reported distances are measured against the final
/// centroids.
#[derive(Debug, Clone)]
pub struct ClusteringResult {
    clusters: Vec<Vec<ClusterMember>>,
    centroids: Array2<f32>,
    n_iterations: usize,
    converged: bool,
}

impl ClusteringResult {
    /// Number of clusters (k, including empty clusters)
    pub fn k(&self) -> usize {
        self.clusters.len()
    }

    /// Member lists indexed by cluster id
    pub fn clusters(&self) -> &[Vec<ClusterMember>] {
        &self.clusters
    }

    /// The members of cluster `index`
    pub fn members(&self, index: usize) -> &[ClusterMember] {
        &self.clusters[index]
    }

    /// Final centroid of cluster `index`
    pub fn centroid(&self, index: usize) -> ArrayView1<'_, f32> {
        self.centroids.row(index)
    }

    /// Final (k, d) centroid matrix
    pub fn centroids(&self) -> &Array2<f32> {
        &self.centroids
    }

    /// Total member count across all clusters; always equals the input size
    pub fn total_members(&self) -> usize {
        self.clusters.iter().map(Vec::len).sum()
    }

    /// Number of Lloyd iterations the run performed
    pub fn n_iterations(&self) -> usize {
        self.n_iterations
    }

    /// Whether the convergence criterion was met before the iteration cap
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Within-cluster sum of squared distances to the final centroids
    pub fn inertia(&self) -> f64 {
        self.clusters
            .iter()
            .flatten()
            .map(|m| (m.distance as f64).powi(2))
            .sum()
    }
}

/// Cluster a set of word embeddings into `config.k` clusters.
///
/// Runs Lloyd's algorithm: random centroid initialization (uniform with
/// replacement, seedable), iterated parallel nearest-centroid assignment
/// and centroid recomputation, until the configured convergence policy or
/// the iteration cap terminates the loop.
///
/// The call is synchronous and owns all per-run state; it either returns a
/// complete result or a single error with no partial state observable.
///
/// # Errors
///
/// * `ClusterError::Configuration` — k < 1 or `vectors` is empty
/// * `ClusterError::DimensionMismatch` — inconsistent dimensionality
/// * `ClusterError::WorkerFailure` — the worker pool could not be built
/// * `ClusterError::Interrupted` — the cancel flag was raised
pub fn cluster(
    vectors: &VectorSet,
    config: &ClusterConfig,
) -> Result<ClusteringResult, ClusterError> {
    let data = vectors.data();

    let outcome = match config.parallelism {
        Some(workers) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(workers)
                .build()
                .map_err(|e| ClusterError::WorkerFailure(e.to_string()))?;
            pool.install(|| run_lloyd(&data, config))?
        }
        None => run_lloyd(&data, config)?,
    };

    Ok(aggregate(vectors, outcome))
}

/// Assemble the final per-cluster member lists from the last assignment and
/// the final centroids. Pure and non-failing.
fn aggregate(vectors: &VectorSet, outcome: LloydOutcome) -> ClusteringResult {
    let LloydOutcome {
        centroids,
        clusters,
        n_iterations,
        converged,
    } = outcome;

    let mut members: Vec<Vec<ClusterMember>> = vec![Vec::new(); centroids.nrows()];

    for (i, &cluster_idx) in clusters.iter().enumerate() {
        let distance = euclidean_distance(&vectors.vector(i), &centroids.row(cluster_idx));
        members[cluster_idx].push(ClusterMember {
            word: vectors.word(i).to_string(),
            distance,
        });
    }

    ClusteringResult {
        clusters: members,
        centroids,
        n_iterations,
        converged,
    }
}
