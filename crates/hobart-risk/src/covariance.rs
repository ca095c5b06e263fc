//! Covariance construction from volatilities and correlations.

use ndarray::{Array1, Array2};

/// Build a covariance matrix from per-asset volatilities and a correlation
/// matrix.
///
/// `cov[i][j] = std_devs[i] * std_devs[j] * correlation[i][j]` — the outer
/// product of the volatility vector, scaled element-wise by the correlation.
/// The correlation matrix is taken as given: symmetry and a unit diagonal are
/// the producer's responsibility and are not checked here. A valid correlation
/// input yields a symmetric positive-semidefinite result.
///
/// # Panics
///
/// Panics if `correlation` is not square with one row per entry of
/// `std_devs`. [`StatisticsSnapshot::new`](crate::StatisticsSnapshot::new) is
/// the validated entry point.
pub fn covariance_from_correlation(
    std_devs: &Array1<f64>,
    correlation: &Array2<f64>,
) -> Array2<f64> {
    let n = std_devs.len();
    assert_eq!(
        correlation.nrows(),
        n,
        "correlation rows must match volatility vector length"
    );
    assert_eq!(
        correlation.ncols(),
        n,
        "correlation columns must match volatility vector length"
    );

    let mut covariance = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            covariance[[i, j]] = std_devs[i] * std_devs[j] * correlation[[i, j]];
        }
    }

    covariance
}
