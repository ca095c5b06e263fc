//! Long-term capital market assumptions for five broad asset classes.
//!
//! Annualized expected returns, volatilities and correlations. The table is
//! ordered and index-aligned with the default universe: U.S. Bonds, Global
//! Bonds, U.S. Stocks, Global Stocks, Emerging Market Stocks.

use crate::error::Result;
use crate::provider::StatisticsProvider;
use hobart_risk::StatisticsSnapshot;
use ndarray::{Array1, Array2, arr2};

/// A single asset-class row of the assumptions table.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetAssumption {
    /// Display label for the asset class.
    pub label: &'static str,
    /// Annualized expected return.
    pub expected_return: f64,
    /// Annualized volatility.
    pub std_dev: f64,
}

impl AssetAssumption {
    /// Create a new assumption row.
    pub const fn new(label: &'static str, expected_return: f64, std_dev: f64) -> Self {
        Self {
            label,
            expected_return,
            std_dev,
        }
    }
}

/// Static long-term capital market assumptions.
///
/// The zero-I/O statistics provider: `statistics()` completes immediately
/// with a snapshot built from the table.
#[derive(Debug, Clone)]
pub struct CapitalMarketAssumptions {
    assumptions: Vec<AssetAssumption>,
    correlation: Array2<f64>,
}

impl CapitalMarketAssumptions {
    /// The built-in five-asset-class table.
    pub fn new() -> Self {
        let assumptions = vec![
            AssetAssumption::new("U.S. Bonds", 0.0211, 0.0351),
            AssetAssumption::new("Global Bonds", 0.0412, 0.0847),
            AssetAssumption::new("U.S. Stocks", 0.0808, 0.1514),
            AssetAssumption::new("Global Stocks", 0.0983, 0.1761),
            AssetAssumption::new("Emerging Market Stocks", 0.1105, 0.2300),
        ];
        let correlation = arr2(&[
            [1.00, 0.52, -0.05, -0.03, -0.05],
            [0.52, 1.00, 0.17, 0.40, 0.29],
            [-0.05, 0.17, 1.00, 0.85, 0.75],
            [-0.03, 0.40, 0.85, 1.00, 0.87],
            [-0.05, 0.29, 0.75, 0.87, 1.00],
        ]);

        Self {
            assumptions,
            correlation,
        }
    }

    /// All assumption rows, in universe order.
    pub fn assumptions(&self) -> &[AssetAssumption] {
        &self.assumptions
    }

    /// Display labels, in universe order.
    pub fn labels(&self) -> Vec<String> {
        self.assumptions.iter().map(|a| a.label.to_string()).collect()
    }

    /// Pairwise correlation matrix.
    pub const fn correlation(&self) -> &Array2<f64> {
        &self.correlation
    }

    /// Number of asset classes in the table.
    pub fn n_assets(&self) -> usize {
        self.assumptions.len()
    }

    /// Build the statistics snapshot for the table.
    ///
    /// # Errors
    ///
    /// Returns a snapshot assembly error if the table dimensions disagree;
    /// the built-in table always assembles.
    pub fn snapshot(&self) -> Result<StatisticsSnapshot> {
        let expected_returns =
            Array1::from_iter(self.assumptions.iter().map(|a| a.expected_return));
        let std_devs = Array1::from_iter(self.assumptions.iter().map(|a| a.std_dev));

        Ok(StatisticsSnapshot::new(
            expected_returns,
            std_devs,
            self.correlation.clone(),
        )?)
    }
}

impl Default for CapitalMarketAssumptions {
    fn default() -> Self {
        Self::new()
    }
}

impl StatisticsProvider for CapitalMarketAssumptions {
    async fn statistics(&self) -> Result<StatisticsSnapshot> {
        self.snapshot()
    }
}
