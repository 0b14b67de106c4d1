use crate::error::ClusterError;
use ndarray::{ArrayView1, ArrayView2};
use rayon::prelude::*;

/// Squared Euclidean distance between two vectors of equal length
#[inline]
pub fn squared_distance(a: &ArrayView1<f32>, b: &ArrayView1<f32>) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Euclidean distance `sqrt(sum((a_i - b_i)^2))`
#[inline]
pub fn euclidean_distance(a: &ArrayView1<f32>, b: &ArrayView1<f32>) -> f32 {
    squared_distance(a, b).sqrt()
}

/// Find the nearest centroid to `vector`.
///
/// Returns the centroid index and the squared distance to it. Ties are
/// broken in favor of the lowest centroid index: the scan runs in ascending
/// index order and only a strictly smaller distance replaces the current
/// best, so the result is deterministic even when centroids are duplicated.
pub fn nearest_centroid(vector: &ArrayView1<f32>, centroids: &ArrayView2<f32>) -> (usize, f32) {
    let mut best_index = 0usize;
    let mut best_dist = f32::INFINITY;

    for (index, centroid) in centroids.outer_iter().enumerate() {
        let dist = squared_distance(vector, &centroid);
        if dist < best_dist {
            best_dist = dist;
            best_index = index;
        }
    }

    (best_index, best_dist)
}

/// Maximum per-centroid Euclidean movement between two centroid sets.
///
/// This is the quantity the displacement convergence policy compares
/// against epsilon. Accumulated in f64 so tiny movements of
/// high-dimensional centroids are not lost to rounding.
pub fn max_centroid_displacement(
    old_centroids: &ArrayView2<f32>,
    new_centroids: &ArrayView2<f32>,
) -> f64 {
    let k = old_centroids.nrows();

    (0..k)
        .map(|i| {
            let old_c = old_centroids.row(i);
            let new_c = new_centroids.row(i);

            let mut diff_sq = 0.0f64;
            for j in 0..old_c.len() {
                let d = (new_c[j] - old_c[j]) as f64;
                diff_sq += d * d;
            }
            diff_sq.sqrt()
        })
        .fold(0.0f64, f64::max)
}

/// Output of one assignment pass: a total mapping from vector index to
/// cluster index, the Euclidean distance to each assigned centroid, and
/// whether any vector moved cluster relative to the previous iteration.
pub struct Assignment {
    pub clusters: Vec<usize>,
    pub distances: Vec<f32>,
    pub changed: bool,
}

/// Assign every vector to its nearest centroid in parallel.
///
/// Fan-out: each vector's search is an independent task over the read-only
/// centroid set and owns a disjoint output slot. Fan-in: the parallel pass
/// is a barrier, so callers observe only the complete assignment. The
/// "changed" flag is combined by a map/reduce OR over per-task results,
/// never through a shared mutable flag.
///
/// # Errors
///
/// Returns `ClusterError::DimensionMismatch` before any work is dispatched
/// if the data and centroid dimensionalities disagree; no partial
/// assignment is published.
pub fn assign_to_nearest(
    data: &ArrayView2<f32>,
    centroids: &ArrayView2<f32>,
    previous: Option<&[usize]>,
) -> Result<Assignment, ClusterError> {
    if data.ncols() != centroids.ncols() {
        return Err(ClusterError::DimensionMismatch {
            expected: centroids.ncols(),
            found: data.ncols(),
        });
    }

    let n = data.nrows();

    let slots: Vec<(usize, f32)> = (0..n)
        .into_par_iter()
        .map(|i| {
            let (cluster, dist_sq) = nearest_centroid(&data.row(i), centroids);
            (cluster, dist_sq.sqrt())
        })
        .collect();

    let changed = match previous {
        // First iteration: everything is a fresh assignment
        None => true,
        Some(prev) => slots
            .par_iter()
            .zip(prev.par_iter())
            .map(|((cluster, _), prev_cluster)| cluster != prev_cluster)
            .reduce(|| false, |a, b| a | b),
    };

    let mut clusters = Vec::with_capacity(n);
    let mut distances = Vec::with_capacity(n);
    for (cluster, distance) in slots {
        clusters.push(cluster);
        distances.push(distance);
    }

    Ok(Assignment {
        clusters,
        distances,
        changed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_squared_distance() {
        let a = array![1.0f32, 2.0, 3.0];
        let b = array![4.0f32, 6.0, 3.0];

        assert_relative_eq!(squared_distance(&a.view(), &b.view()), 25.0, epsilon = 1e-6);
        assert_relative_eq!(euclidean_distance(&a.view(), &b.view()), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_nearest_centroid_tie_breaks_low_index() {
        let v = array![5.0f32, 5.0];
        // Centroids 1 and 2 are identical and equidistant from v
        let centroids = array![[100.0f32, 100.0], [0.0, 0.0], [0.0, 0.0]];

        let (index, _) = nearest_centroid(&v.view(), &centroids.view());
        assert_eq!(index, 1);
    }

    #[test]
    fn test_max_centroid_displacement() {
        let old = array![[0.0f32, 0.0], [1.0, 1.0]];
        let new = array![[3.0f32, 4.0], [1.0, 1.5]];

        // Movements are 5.0 and 0.5; the maximum wins
        let shift = max_centroid_displacement(&old.view(), &new.view());
        assert_relative_eq!(shift, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn test_assign_to_nearest() {
        let data = array![[0.0f32, 0.0], [10.0, 10.0], [0.5, 0.5]];
        let centroids = array![[0.0f32, 0.0], [10.0, 10.0]];

        let assignment = assign_to_nearest(&data.view(), &centroids.view(), None).unwrap();

        assert_eq!(assignment.clusters, vec![0, 1, 0]);
        assert!(assignment.changed);
        assert_relative_eq!(assignment.distances[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(assignment.distances[2], 0.5f32.hypot(0.5), epsilon = 1e-6);
    }

    #[test]
    fn test_assign_changed_flag_settles() {
        let data = array![[0.0f32, 0.0], [10.0, 10.0]];
        let centroids = array![[0.0f32, 0.0], [10.0, 10.0]];

        let first = assign_to_nearest(&data.view(), &centroids.view(), None).unwrap();
        let second =
            assign_to_nearest(&data.view(), &centroids.view(), Some(&first.clusters)).unwrap();

        assert!(first.changed);
        assert!(!second.changed);
    }

    #[test]
    fn test_assign_dimension_mismatch() {
        let data = array![[0.0f32, 0.0, 0.0]];
        let centroids = array![[0.0f32, 0.0]];

        let result = assign_to_nearest(&data.view(), &centroids.view(), None);
        assert!(matches!(
            result,
            Err(ClusterError::DimensionMismatch {
                expected: 2,
                found: 3
            })
        ));
    }
}
