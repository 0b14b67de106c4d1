use crate::config::{ClusterConfig, ConvergencePolicy};
use crate::distance::{assign_to_nearest, max_centroid_displacement, Assignment};
use crate::error::ClusterError;
use ndarray::{Array2, ArrayView2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::Ordering;
use std::time::Instant;

/// Terminal status of the Lloyd iteration loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopState {
    Running,
    /// The convergence policy's criterion was met
    Converged,
    /// The iteration cap was reached first
    Exhausted,
}

/// Raw outcome of a Lloyd run, before result aggregation
pub(crate) struct LloydOutcome {
    pub centroids: Array2<f32>,
    pub clusters: Vec<usize>,
    pub n_iterations: usize,
    pub converged: bool,
}

/// Run Lloyd's algorithm to termination.
///
/// One iteration is: parallel nearest-centroid assignment over centroids
/// frozen at the start of the iteration, then serial centroid
/// recomputation, then the convergence check. Iterations are strictly
/// sequential; iteration i+1 only ever sees centroids finalized by
/// iteration i.
pub(crate) fn run_lloyd(
    data: &ArrayView2<f32>,
    config: &ClusterConfig,
) -> Result<LloydOutcome, ClusterError> {
    let n = data.nrows();
    let k = config.k;

    if k < 1 {
        return Err(ClusterError::Configuration(
            "k must be at least 1".to_string(),
        ));
    }
    if n == 0 {
        return Err(ClusterError::Configuration(
            "input vector set is empty".to_string(),
        ));
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    if config.verbose {
        eprintln!(
            "Clustering {} vectors, {} dimensions, {} clusters ({:?} policy)",
            n,
            data.ncols(),
            k,
            config.policy
        );
    }

    let mut centroids = init_centroids(data, k, &mut rng);
    let mut clusters: Option<Vec<usize>> = None;
    let mut state = LoopState::Running;
    let mut n_iterations = 0;

    for iteration in 0..config.max_iterations {
        if let Some(flag) = &config.cancel_flag {
            if flag.load(Ordering::Relaxed) {
                return Err(ClusterError::Interrupted);
            }
        }

        let iter_start = Instant::now();
        n_iterations = iteration + 1;

        let assignment = assign_to_nearest(data, &centroids.view(), clusters.as_deref())?;

        let prev_centroids = centroids.clone();
        update_centroids(data, &assignment, &mut centroids, k);

        let shift = max_centroid_displacement(&prev_centroids.view(), &centroids.view());

        match config.policy {
            ConvergencePolicy::Displacement => {
                if config.epsilon >= 0.0 && shift < config.epsilon {
                    state = LoopState::Converged;
                }
            }
            ConvergencePolicy::Stability => {
                if !assignment.changed {
                    state = LoopState::Converged;
                }
            }
        }

        if config.verbose {
            eprintln!(
                "  Iteration {}/{}: max shift = {:.6}, reassigned = {}, time = {:.4}s",
                n_iterations,
                config.max_iterations,
                shift,
                assignment.changed,
                iter_start.elapsed().as_secs_f64()
            );
        }

        clusters = Some(assignment.clusters);

        if state == LoopState::Converged {
            if config.verbose {
                eprintln!("  Converged after {} iterations", n_iterations);
            }
            break;
        }
    }

    if state == LoopState::Running {
        state = LoopState::Exhausted;
        if config.verbose {
            eprintln!("  Iteration cap reached without convergence");
        }
    }

    // clusters is always Some here: max_iterations >= 1 ran at least one
    // assignment, and max_iterations == 0 is caught by the cap loop never
    // executing, which we treat as a configuration problem
    let clusters = clusters.ok_or_else(|| {
        ClusterError::Configuration("max_iterations must be at least 1".to_string())
    })?;

    Ok(LloydOutcome {
        centroids,
        clusters,
        n_iterations,
        converged: state == LoopState::Converged,
    })
}

/// Select k initial centroids uniformly at random, with replacement.
///
/// Each centroid is an independent copy of a data row, so k may exceed the
/// number of vectors; duplicates simply become empty clusters downstream.
pub(crate) fn init_centroids(
    data: &ArrayView2<f32>,
    k: usize,
    rng: &mut ChaCha8Rng,
) -> Array2<f32> {
    let n = data.nrows();
    let mut centroids = Array2::zeros((k, data.ncols()));

    for centroid_idx in 0..k {
        let data_idx = rng.gen_range(0..n);
        centroids.row_mut(centroid_idx).assign(&data.row(data_idx));
    }

    centroids
}

/// Recompute each centroid as the component-wise mean of its members.
///
/// Clusters with zero members keep their prior centroid value: that avoids
/// a division by zero and keeps later iterations deterministic for the
/// empty cluster.
pub(crate) fn update_centroids(
    data: &ArrayView2<f32>,
    assignment: &Assignment,
    centroids: &mut Array2<f32>,
    k: usize,
) {
    let d = data.ncols();
    let mut sums: Array2<f64> = Array2::zeros((k, d));
    let mut counts = vec![0usize; k];

    for (i, &cluster_idx) in assignment.clusters.iter().enumerate() {
        counts[cluster_idx] += 1;
        let row = data.row(i);
        for j in 0..d {
            sums[[cluster_idx, j]] += row[j] as f64;
        }
    }

    for cluster_idx in 0..k {
        let count = counts[cluster_idx];
        if count > 0 {
            for j in 0..d {
                centroids[[cluster_idx, j]] = (sums[[cluster_idx, j]] / count as f64) as f32;
            }
        }
    }
}
