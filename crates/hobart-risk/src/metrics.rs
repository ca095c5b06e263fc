//! Portfolio metrics: return, risk, Sharpe ratio and diversification benefit.
//!
//! All functions here are pure and referentially transparent: the same weight
//! vector and snapshot always produce the same metrics, so results are safe
//! to memoize and calls are safe to issue from multiple threads.
//!
//! Two numeric policies apply throughout the crate:
//! - variance computed as slightly negative (possible when upstream
//!   statistics are not positive semi-definite) is clamped to zero before the
//!   square root;
//! - the Sharpe ratio is undefined ([`None`]) when portfolio volatility does
//!   not exceed [`MIN_VOLATILITY`], instead of dividing by zero.

use crate::snapshot::StatisticsSnapshot;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Volatility at or below this threshold is treated as zero when forming
/// ratios.
pub const MIN_VOLATILITY: f64 = 1e-12;

/// Errors raised by the metrics calculator.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// Weight vector length differs from the snapshot's asset count
    #[error("Dimension mismatch: snapshot covers {expected} assets, weight vector has {actual}")]
    DimensionMismatch {
        /// Number of assets in the snapshot
        expected: usize,
        /// Length of the supplied weight vector
        actual: usize,
    },
}

/// Scalar metrics for one weight vector against one statistics snapshot.
///
/// Fully determined by its inputs; there is no hidden state. Weights are used
/// literally — a vector that does not sum to 1 still produces metrics, and
/// surfacing that condition is the presentation layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Annualized expected portfolio return.
    pub expected_return: f64,

    /// Annualized portfolio volatility, from the full covariance quadratic
    /// form.
    pub standard_deviation: f64,

    /// Excess return over the risk-free rate per unit of risk. `None` when
    /// the portfolio volatility is below [`MIN_VOLATILITY`] and the ratio is
    /// undefined.
    pub sharpe_ratio: Option<f64>,

    /// Weighted average of the individual asset volatilities, ignoring
    /// correlation.
    pub undiversified_risk: f64,

    /// Risk reduction from imperfect correlation: undiversified risk minus
    /// portfolio volatility. Non-negative for any valid correlation input.
    pub diversification_benefit: f64,
}

/// Expected portfolio return: the dot product of weights and expected
/// returns.
///
/// # Panics
///
/// Panics if the vector lengths differ.
pub fn portfolio_return(weights: &Array1<f64>, expected_returns: &Array1<f64>) -> f64 {
    weights.dot(expected_returns)
}

/// Portfolio variance via the full quadratic form `wᵀ Σ w`.
///
/// Cross-asset covariance terms are always included; the matrix is never
/// assumed diagonal.
///
/// # Panics
///
/// Panics if the weight vector length differs from the matrix dimension.
pub fn portfolio_variance(weights: &Array1<f64>, covariance: &Array2<f64>) -> f64 {
    weights.dot(&covariance.dot(weights))
}

/// Portfolio volatility: square root of the quadratic-form variance.
///
/// Variance is mathematically non-negative for a positive-semidefinite
/// covariance matrix, but degenerate upstream statistics can push the
/// computed value slightly below zero; it is clamped to zero before the
/// square root so the result is always a valid volatility.
///
/// # Panics
///
/// Panics if the weight vector length differs from the matrix dimension.
pub fn portfolio_volatility(weights: &Array1<f64>, covariance: &Array2<f64>) -> f64 {
    portfolio_variance(weights, covariance).max(0.0).sqrt()
}

/// Compute the full metrics bundle for one weight vector against one
/// snapshot.
///
/// # Errors
///
/// Returns [`MetricsError::DimensionMismatch`] if the weight vector length
/// differs from the snapshot's asset count. Weights are never truncated or
/// padded.
pub fn compute_metrics(
    weights: &Array1<f64>,
    snapshot: &StatisticsSnapshot,
    risk_free_rate: f64,
) -> Result<PortfolioMetrics, MetricsError> {
    if weights.len() != snapshot.n_assets() {
        return Err(MetricsError::DimensionMismatch {
            expected: snapshot.n_assets(),
            actual: weights.len(),
        });
    }

    let expected_return = portfolio_return(weights, snapshot.expected_returns());
    let standard_deviation = portfolio_volatility(weights, snapshot.covariance());

    let sharpe_ratio = (standard_deviation > MIN_VOLATILITY)
        .then(|| (expected_return - risk_free_rate) / standard_deviation);

    let undiversified_risk = weights.dot(snapshot.std_devs());
    let diversification_benefit = undiversified_risk - standard_deviation;

    Ok(PortfolioMetrics {
        expected_return,
        standard_deviation,
        sharpe_ratio,
        undiversified_risk,
        diversification_benefit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    /// The five-asset long-term table used across the workspace tests.
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

    fn one_hot(n: usize, i: usize) -> Array1<f64> {
        let mut weights = Array1::<f64>::zeros(n);
        weights[i] = 1.0;
        weights
    }

    #[test]
    fn test_equal_weight_expected_return() {
        let snapshot = table_snapshot();
        let weights = Array1::from_elem(5, 0.2);

        let metrics = compute_metrics(&weights, &snapshot, 0.02).unwrap();

        // 0.2 * (0.0211 + 0.0412 + 0.0808 + 0.0983 + 0.1105) = 0.07038
        assert_abs_diff_eq!(metrics.expected_return, 0.07038, epsilon = 1e-4);
    }

    #[test]
    fn test_expected_return_is_dot_product() {
        let snapshot = table_snapshot();
        let weights = Array1::from_vec(vec![0.1, 0.0, 0.4, 0.3, 0.2]);

        let metrics = compute_metrics(&weights, &snapshot, 0.02).unwrap();

        assert_abs_diff_eq!(
            metrics.expected_return,
            weights.dot(snapshot.expected_returns()),
            epsilon = 1e-15
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    #[case(4)]
    fn test_one_hot_reproduces_asset_volatility(#[case] asset: usize) {
        let snapshot = table_snapshot();
        let weights = one_hot(5, asset);

        let metrics = compute_metrics(&weights, &snapshot, 0.02).unwrap();

        // With all weight on one asset there is no mixing: portfolio risk is
        // the asset's own volatility and diversification buys nothing.
        assert_abs_diff_eq!(
            metrics.standard_deviation,
            snapshot.std_devs()[asset],
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(metrics.diversification_benefit, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_all_us_bonds_scenario() {
        let snapshot = table_snapshot();
        let weights = one_hot(5, 0);

        let metrics = compute_metrics(&weights, &snapshot, 0.02).unwrap();

        assert_abs_diff_eq!(metrics.standard_deviation, 0.0351, epsilon = 1e-12);
        assert_abs_diff_eq!(metrics.diversification_benefit, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_diversification_benefit_non_negative() {
        let snapshot = table_snapshot();
        let weights = Array1::from_elem(5, 0.2);

        let metrics = compute_metrics(&weights, &snapshot, 0.02).unwrap();

        // All pairwise correlations in the table are below 1, so mixing must
        // not increase risk above the weighted average.
        assert!(metrics.diversification_benefit >= -1e-12);
        assert!(metrics.diversification_benefit > 0.0);
        assert_abs_diff_eq!(
            metrics.undiversified_risk,
            weights.dot(snapshot.std_devs()),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_variance_invariant_under_permutation() {
        let snapshot = table_snapshot();
        let mut rng = StdRng::seed_from_u64(42);
        let weights = Array1::from_iter((0..5).map(|_| rng.gen_range(0.0..1.0)));

        let perm = [2usize, 0, 4, 1, 3];
        let permuted_weights = Array1::from_iter(perm.iter().map(|&i| weights[i]));
        let permuted_returns =
            Array1::from_iter(perm.iter().map(|&i| snapshot.expected_returns()[i]));
        let permuted_stds = Array1::from_iter(perm.iter().map(|&i| snapshot.std_devs()[i]));
        let mut permuted_corr = Array2::<f64>::zeros((5, 5));
        for (a, &i) in perm.iter().enumerate() {
            for (b, &j) in perm.iter().enumerate() {
                permuted_corr[[a, b]] = snapshot.correlation()[[i, j]];
            }
        }
        let permuted =
            StatisticsSnapshot::new(permuted_returns, permuted_stds, permuted_corr).unwrap();

        let original = compute_metrics(&weights, &snapshot, 0.02).unwrap();
        let shuffled = compute_metrics(&permuted_weights, &permuted, 0.02).unwrap();

        assert_abs_diff_eq!(
            original.standard_deviation,
            shuffled.standard_deviation,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            original.expected_return,
            shuffled.expected_return,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_weights_used_literally_when_sum_is_not_one() {
        let snapshot = table_snapshot();
        let weights = Array1::from_vec(vec![0.5, 0.0, 0.0, 0.0, 0.0]);

        let metrics = compute_metrics(&weights, &snapshot, 0.02).unwrap();

        assert_abs_diff_eq!(metrics.expected_return, 0.5 * 0.0211, epsilon = 1e-15);
        assert_abs_diff_eq!(metrics.standard_deviation, 0.5 * 0.0351, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_weights_give_undefined_sharpe() {
        let snapshot = table_snapshot();
        let weights = Array1::<f64>::zeros(5);

        let metrics = compute_metrics(&weights, &snapshot, 0.02).unwrap();

        assert_abs_diff_eq!(metrics.standard_deviation, 0.0, epsilon = 1e-15);
        assert_eq!(metrics.sharpe_ratio, None);
    }

    #[test]
    fn test_sharpe_ratio_formula() {
        let snapshot = table_snapshot();
        let weights = Array1::from_elem(5, 0.2);

        let metrics = compute_metrics(&weights, &snapshot, 0.02).unwrap();
        let sharpe = metrics.sharpe_ratio.unwrap();

        assert_abs_diff_eq!(
            sharpe,
            (metrics.expected_return - 0.02) / metrics.standard_deviation,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_negative_variance_clamped_to_zero() {
        // A "correlation" far outside [-1, 1] makes the quadratic form
        // negative for mixed weights. The engine accepts the garbage input
        // and clamps the variance rather than taking sqrt of a negative.
        let expected_returns = Array1::from_vec(vec![0.05, 0.05]);
        let std_devs = Array1::from_vec(vec![1.0, 1.0]);
        let correlation = arr2(&[[1.0, -3.0], [-3.0, 1.0]]);
        let snapshot = StatisticsSnapshot::new(expected_returns, std_devs, correlation).unwrap();
        let weights = Array1::from_vec(vec![0.5, 0.5]);

        assert!(portfolio_variance(&weights, snapshot.covariance()) < 0.0);

        let metrics = compute_metrics(&weights, &snapshot, 0.02).unwrap();

        assert_abs_diff_eq!(metrics.standard_deviation, 0.0, epsilon = 1e-15);
        assert_eq!(metrics.sharpe_ratio, None);
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let snapshot = table_snapshot();
        let weights = Array1::from_vec(vec![0.5, 0.5]);

        let result = compute_metrics(&weights, &snapshot, 0.02);

        assert!(matches!(
            result,
            Err(MetricsError::DimensionMismatch { expected: 5, actual: 2 })
        ));
    }

    #[test]
    fn test_covariance_round_trip_via_one_hot() {
        let snapshot = table_snapshot();

        for i in 0..5 {
            let weights = one_hot(5, i);
            let vol = portfolio_volatility(&weights, snapshot.covariance());
            assert_abs_diff_eq!(vol, snapshot.std_devs()[i], epsilon = 1e-12);
        }
    }
}
