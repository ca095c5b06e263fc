//! Allocation summary and advisory warnings.
//!
//! Bundles the literal weights an analysis ran with, the resulting metrics,
//! and the non-fatal conditions worth surfacing alongside them.

use hobart_risk::PortfolioMetrics;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance when checking whether weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Advisory conditions surfaced alongside the metrics.
///
/// Warnings never block computation: the engine runs with the literal
/// weights it was given, and these exist so the presentation layer can say
/// so.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AllocationWarning {
    /// Weights do not sum to 1.0.
    UnbalancedWeights {
        /// Sum of the supplied weights.
        total: f64,
    },
}

impl fmt::Display for AllocationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbalancedWeights { total } => {
                write!(f, "Total weights must sum to 1.0. Current total: {total:.2}")
            }
        }
    }
}

/// Metrics plus advisories for one allocation, ready for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationSummary {
    /// Asset labels, aligned with `weights`.
    pub labels: Vec<String>,

    /// The literal weights the metrics were computed with.
    pub weights: Vec<f64>,

    /// Computed portfolio metrics.
    pub metrics: PortfolioMetrics,
}

impl AllocationSummary {
    /// Create a new summary.
    ///
    /// # Panics
    ///
    /// Panics if `labels` and `weights` have different lengths.
    pub fn new(labels: Vec<String>, weights: Vec<f64>, metrics: PortfolioMetrics) -> Self {
        assert_eq!(
            labels.len(),
            weights.len(),
            "labels and weights must be aligned"
        );

        Self {
            labels,
            weights,
            metrics,
        }
    }

    /// Sum of the supplied weights.
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Advisory warnings for this allocation.
    pub fn warnings(&self) -> Vec<AllocationWarning> {
        let mut warnings = Vec::new();

        let total = self.total_weight();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            warnings.push(AllocationWarning::UnbalancedWeights { total });
        }

        warnings
    }

    /// Whether the portfolio's expected return meets a target.
    pub fn meets_target(&self, target_return: f64) -> bool {
        self.metrics.expected_return >= target_return
    }

    /// Render the allocation and its metrics as an ASCII table.
    pub fn to_ascii_table(&self) -> String {
        let mut out = String::new();

        out.push_str("Asset Allocation\n");
        out.push_str("----------------------------------------------\n");
        for (label, weight) in self.labels.iter().zip(&self.weights) {
            out.push_str(&format!("{label:<30} {:>8.1}%\n", weight * 100.0));
        }
        out.push_str("----------------------------------------------\n");
        out.push_str(&format!("{:<30} {:>8.1}%\n\n", "Total", self.total_weight() * 100.0));

        out.push_str("Portfolio Metrics\n");
        out.push_str("----------------------------------------------\n");
        out.push_str(&format!(
            "{:<30} {:>9.2}%\n",
            "Expected Return",
            self.metrics.expected_return * 100.0
        ));
        out.push_str(&format!(
            "{:<30} {:>9.2}%\n",
            "Standard Deviation",
            self.metrics.standard_deviation * 100.0
        ));
        match self.metrics.sharpe_ratio {
            Some(sharpe) => {
                out.push_str(&format!("{:<30} {sharpe:>10.2}\n", "Sharpe Ratio"));
            }
            None => {
                out.push_str(&format!("{:<30} {:>10}\n", "Sharpe Ratio", "n/a"));
            }
        }
        out.push_str(&format!(
            "{:<30} {:>9.2}%\n",
            "Undiversified Risk",
            self.metrics.undiversified_risk * 100.0
        ));
        out.push_str(&format!(
            "{:<30} {:>9.2}%\n",
            "Diversification Benefit",
            self.metrics.diversification_benefit * 100.0
        ));

        for warning in self.warnings() {
            out.push_str(&format!("\nWarning: {warning}\n"));
        }

        out
    }
}

impl fmt::Display for AllocationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sharpe = self
            .metrics
            .sharpe_ratio
            .map_or_else(|| "n/a".to_string(), |s| format!("{s:.2}"));

        write!(
            f,
            "return {:.2}%, risk {:.2}%, sharpe {}, diversification benefit {:.2}%",
            self.metrics.expected_return * 100.0,
            self.metrics.standard_deviation * 100.0,
            sharpe,
            self.metrics.diversification_benefit * 100.0
        )
    }
}
