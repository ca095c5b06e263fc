//! Efficient frontier sampling over a three-asset weight grid.
//!
//! The sampler enumerates fully-invested weight combinations across the
//! first three assets of the snapshot — every remaining asset is pinned at
//! weight zero. This restricted subspace is deliberate and preserved from the
//! dashboard this engine was extracted from; it is a raw scatter, not a
//! convex-hull frontier: dominated points, duplicates and boundary-degenerate
//! combinations are all retained.
//!
//! For `w1` over `resolution` evenly spaced values in `[0, 1]` and `w2` over
//! `resolution` evenly spaced values in `[0, 1 - w1]`, the third weight is
//! `w3 = 1 - w1 - w2`, so every sampled combination is fully invested. The
//! output always holds exactly `resolution²` points. Grids are
//! endpoint-inclusive, and a single-value grid collapses to the start point,
//! so `resolution == 1` yields the lone combination `(0, 0, 1, 0, ...)`.

use crate::metrics::{portfolio_return, portfolio_volatility};
use crate::snapshot::StatisticsSnapshot;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Grid resolution used when the caller does not specify one.
pub const DEFAULT_GRID_RESOLUTION: usize = 30;

/// Number of leading assets spanned by the sampling grid.
pub const SAMPLED_ASSETS: usize = 3;

/// Errors raised by the frontier sampler.
#[derive(Debug, Error)]
pub enum FrontierError {
    /// Grid resolution of zero would produce an empty, contract-violating
    /// point cloud
    #[error("Grid resolution must be at least 1")]
    ZeroResolution,

    /// Snapshot covers fewer assets than the sampled subspace
    #[error("Frontier sampling needs at least {required} assets, snapshot covers {actual}")]
    InsufficientAssets {
        /// Assets required by the sampling grid
        required: usize,
        /// Assets present in the snapshot
        actual: usize,
    },
}

/// One sampled (risk, return) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrontierPoint {
    /// Annualized volatility of the sampled weight combination.
    pub risk: f64,

    /// Annualized expected return of the sampled weight combination.
    pub expected_return: f64,
}

/// Enumerate the frontier point cloud for a snapshot.
///
/// Pure and fully deterministic: the same snapshot and resolution always
/// produce the same points in the same order. Uses the same return, variance
/// and volatility formulas (including the negative-variance clamp) as
/// [`compute_metrics`](crate::compute_metrics).
///
/// # Errors
///
/// Returns [`FrontierError::ZeroResolution`] for a zero resolution and
/// [`FrontierError::InsufficientAssets`] when the snapshot covers fewer than
/// [`SAMPLED_ASSETS`] assets.
pub fn sample_frontier(
    snapshot: &StatisticsSnapshot,
    resolution: usize,
) -> Result<Vec<FrontierPoint>, FrontierError> {
    if resolution == 0 {
        return Err(FrontierError::ZeroResolution);
    }
    let n = snapshot.n_assets();
    if n < SAMPLED_ASSETS {
        return Err(FrontierError::InsufficientAssets {
            required: SAMPLED_ASSETS,
            actual: n,
        });
    }

    let mut points = Vec::with_capacity(resolution * resolution);
    // Indices 3.. stay zero for every sample; only the first three are
    // rewritten per iteration.
    let mut weights = Array1::<f64>::zeros(n);

    for &w1 in Array1::linspace(0.0, 1.0, resolution).iter() {
        for &w2 in Array1::linspace(0.0, 1.0 - w1, resolution).iter() {
            weights[0] = w1;
            weights[1] = w2;
            weights[2] = 1.0 - w1 - w2;

            points.push(FrontierPoint {
                risk: portfolio_volatility(&weights, snapshot.covariance()),
                expected_return: portfolio_return(&weights, snapshot.expected_returns()),
            });
        }
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{Array2, arr2};
    use rstest::rstest;

    fn table_snapshot() -> StatisticsSnapshot {
        let expected_returns = Array1::from_vec(vec![0.0211, 0.0412, 0.0808, 0.0983, 0.1105]);
        let std_devs = Array1::from_vec(vec![0.0351, 0.0847, 0.1514, 0.1761, 0.2300]);
        let correlation = arr2(&[
            [1.00, 0.52, -0.05, -0.03, -0.05],
            [0.52, 1.00, 0.17, 0.40, 0.29],
            [-0.05, 0.17, 1.00, 0.85, 0.75],
            [-0.03, 0.40, 0.85, 1.00, 0.87],
            [-0.05, 0.29, 0.75, 0.87, 1.00],
        ]);
        StatisticsSnapshot::new(expected_returns, std_devs, correlation).unwrap()
    }

    #[rstest]
    #[case(1, 1)]
    #[case(2, 4)]
    #[case(5, 25)]
    #[case(30, 900)]
    fn test_point_count_is_resolution_squared(#[case] resolution: usize, #[case] expected: usize) {
        let snapshot = table_snapshot();
        let points = sample_frontier(&snapshot, resolution).unwrap();

        assert_eq!(points.len(), expected);
    }

    #[test]
    fn test_resolution_one_collapses_to_third_asset() {
        let snapshot = table_snapshot();
        let points = sample_frontier(&snapshot, 1).unwrap();

        // A single-value grid is [0], so w1 = w2 = 0 and w3 = 1: the lone
        // point is all weight on the third asset.
        assert_eq!(points.len(), 1);
        assert_abs_diff_eq!(points[0].expected_return, 0.0808, epsilon = 1e-12);
        assert_abs_diff_eq!(points[0].risk, 0.1514, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_resolution_rejected() {
        let snapshot = table_snapshot();
        let result = sample_frontier(&snapshot, 0);

        assert!(matches!(result, Err(FrontierError::ZeroResolution)));
    }

    #[test]
    fn test_insufficient_assets_rejected() {
        let snapshot = StatisticsSnapshot::new(
            Array1::from_vec(vec![0.02, 0.05]),
            Array1::from_vec(vec![0.03, 0.08]),
            Array2::<f64>::eye(2),
        )
        .unwrap();

        let result = sample_frontier(&snapshot, 10);

        assert!(matches!(
            result,
            Err(FrontierError::InsufficientAssets { required: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_points_bounded_by_sampled_assets() {
        let snapshot = table_snapshot();
        let points = sample_frontier(&snapshot, 30).unwrap();

        let returns: Vec<f64> = snapshot.expected_returns().iter().take(3).copied().collect();
        let min_ret = returns.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_ret = returns.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        for point in &points {
            // Every combination is fully invested in the first three assets,
            // so returns are convex combinations of those assets' returns.
            assert!(point.expected_return >= min_ret - 1e-12);
            assert!(point.expected_return <= max_ret + 1e-12);
            assert!(point.risk >= 0.0);
        }
    }

    #[test]
    fn test_deterministic() {
        let snapshot = table_snapshot();

        let first = sample_frontier(&snapshot, 15).unwrap();
        let second = sample_frontier(&snapshot, 15).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_matches_metrics_formulas() {
        let snapshot = table_snapshot();
        let points = sample_frontier(&snapshot, 2).unwrap();

        // resolution = 2 enumerates w1 in {0, 1}, w2 in {0, 1 - w1}. The
        // final sample (w1 = 1, w2 = 0, w3 = 0) is all weight on the first
        // asset.
        let last = points.last().unwrap();
        assert_abs_diff_eq!(last.risk, snapshot.std_devs()[0], epsilon = 1e-12);
        assert_abs_diff_eq!(
            last.expected_return,
            snapshot.expected_returns()[0],
            epsilon = 1e-12
        );
    }
}
