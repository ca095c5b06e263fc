//! Market statistics snapshot consumed by the portfolio engine.
//!
//! A snapshot bundles per-asset expected returns, volatilities and the
//! correlation matrix for a fixed, ordered asset universe, along with the
//! covariance matrix derived from them. It is produced once per session or
//! data refresh and consumed read-only by the metrics calculator and the
//! frontier sampler.

use crate::covariance::covariance_from_correlation;
use ndarray::{Array1, Array2};
use thiserror::Error;

/// Errors raised when assembling a statistics snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Input vectors/matrix do not agree on the number of assets
    #[error("Dimension mismatch: expected {expected} assets, got {actual}")]
    DimensionMismatch {
        /// Number of assets implied by the expected-return vector
        expected: usize,
        /// Number of assets in the disagreeing input
        actual: usize,
    },

    /// Correlation matrix is not square
    #[error("Correlation matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// Snapshot covers no assets
    #[error("Snapshot must cover at least one asset")]
    Empty,
}

/// Immutable bundle of market statistics for an ordered asset universe.
///
/// Index `i` refers to the same asset in every field. Construction validates
/// that all inputs agree on the number of assets and derives the covariance
/// matrix once; a snapshot with inconsistent dimensions cannot exist.
/// Symmetry and the unit diagonal of the correlation input are the producer's
/// responsibility and are not validated.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSnapshot {
    expected_returns: Array1<f64>,
    std_devs: Array1<f64>,
    correlation: Array2<f64>,
    covariance: Array2<f64>,
}

impl StatisticsSnapshot {
    /// Assemble a snapshot from annualized statistics, deriving the
    /// covariance matrix.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the inputs disagree on the number of
    /// assets, the correlation matrix is not square, or the universe is
    /// empty.
    pub fn new(
        expected_returns: Array1<f64>,
        std_devs: Array1<f64>,
        correlation: Array2<f64>,
    ) -> Result<Self, SnapshotError> {
        let n = expected_returns.len();
        if n == 0 {
            return Err(SnapshotError::Empty);
        }
        if std_devs.len() != n {
            return Err(SnapshotError::DimensionMismatch {
                expected: n,
                actual: std_devs.len(),
            });
        }
        if correlation.nrows() != correlation.ncols() {
            return Err(SnapshotError::NotSquare {
                rows: correlation.nrows(),
                cols: correlation.ncols(),
            });
        }
        if correlation.nrows() != n {
            return Err(SnapshotError::DimensionMismatch {
                expected: n,
                actual: correlation.nrows(),
            });
        }

        let covariance = covariance_from_correlation(&std_devs, &correlation);

        Ok(Self {
            expected_returns,
            std_devs,
            correlation,
            covariance,
        })
    }

    /// Number of assets covered by the snapshot.
    pub fn n_assets(&self) -> usize {
        self.expected_returns.len()
    }

    /// Annualized expected returns, one per asset.
    pub const fn expected_returns(&self) -> &Array1<f64> {
        &self.expected_returns
    }

    /// Annualized volatilities, one per asset.
    pub const fn std_devs(&self) -> &Array1<f64> {
        &self.std_devs
    }

    /// Pairwise correlation matrix as supplied by the producer.
    pub const fn correlation(&self) -> &Array2<f64> {
        &self.correlation
    }

    /// Covariance matrix derived at construction.
    pub const fn covariance(&self) -> &Array2<f64> {
        &self.covariance
    }
}
