//! Historical statistics estimation from daily price series.
//!
//! For each symbol the estimator fetches daily adjusted closes, computes
//! daily simple returns, and inner-joins the per-symbol series on date so
//! every statistic is estimated over the same trading days. Sample means are
//! annualized with ×252, sample standard deviations (n − 1 denominator) with
//! ×√252, and the correlation matrix is the pairwise sample Pearson
//! correlation of the aligned series.

use crate::error::{DataError, Result};
use crate::provider::StatisticsProvider;
use crate::yahoo::PriceHistoryProvider;
use chrono::{DateTime, Utc};
use hobart_risk::StatisticsSnapshot;
use ndarray::{Array1, Array2};
use polars::prelude::*;

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Minimum aligned daily observations required for sample statistics.
pub const MIN_OBSERVATIONS: usize = 2;

/// Estimates a statistics snapshot from historical daily prices.
///
/// The snapshot's asset order is the constructor's symbol order.
#[derive(Debug)]
pub struct HistoricalEstimator {
    symbols: Vec<String>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    quotes: PriceHistoryProvider,
}

impl HistoricalEstimator {
    /// Create an estimator over the given symbols and date range.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty symbol list or if the underlying quote
    /// provider cannot be built.
    pub fn new(symbols: Vec<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(DataError::InvalidSymbol("Empty symbol list".to_string()));
        }

        Ok(Self {
            symbols,
            start,
            end,
            quotes: PriceHistoryProvider::new()?,
        })
    }

    /// Symbols covered by this estimator, in snapshot order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Fetch and align the daily return series for all symbols.
    ///
    /// Returns a DataFrame with a `date` column plus one return column per
    /// symbol, restricted to the trading days shared by every series.
    async fn aligned_returns(&self) -> Result<DataFrame> {
        let mut frames = Vec::with_capacity(self.symbols.len());
        for symbol in &self.symbols {
            let prices = self
                .quotes
                .fetch_adjusted_close(symbol, self.start, self.end)
                .await?;
            frames.push(daily_returns(prices, symbol)?);
        }

        align_on_date(frames)
    }
}

impl StatisticsProvider for HistoricalEstimator {
    async fn statistics(&self) -> Result<StatisticsSnapshot> {
        let aligned = self.aligned_returns().await?;
        let returns = returns_matrix(&aligned, &self.symbols)?;
        estimate_snapshot(&returns)
    }
}

/// Compute daily simple returns from a price frame.
///
/// Input columns: date, adjusted_close. Output columns: date plus one return
/// column named after the symbol; the first observation is dropped since it
/// has no predecessor.
///
/// # Errors
///
/// Returns an error if the frame cannot be evaluated.
pub fn daily_returns(prices: DataFrame, symbol: &str) -> Result<DataFrame> {
    let returns = prices
        .lazy()
        .sort(["date"], Default::default())
        .with_column(
            (col("adjusted_close") / col("adjusted_close").shift(lit(1)) - lit(1.0))
                .alias(symbol),
        )
        .filter(col(symbol).is_not_null())
        .select([col("date"), col(symbol)])
        .collect()?;

    Ok(returns)
}

/// Inner-join per-symbol return frames on date.
///
/// # Errors
///
/// Returns an error when given no frames or when the join cannot be
/// evaluated.
pub fn align_on_date(frames: Vec<DataFrame>) -> Result<DataFrame> {
    let mut iter = frames.into_iter();
    let first = iter.next().ok_or_else(|| DataError::MissingData {
        symbol: "universe".to_string(),
        reason: "No return series to align".to_string(),
    })?;

    let mut joined = first.lazy();
    for frame in iter {
        joined = joined.join(
            frame.lazy(),
            [col("date")],
            [col("date")],
            JoinArgs::new(JoinType::Inner),
        );
    }

    Ok(joined.sort(["date"], Default::default()).collect()?)
}

/// Extract the aligned return columns into a T×N matrix, one column per
/// symbol.
///
/// # Errors
///
/// Returns an error if a symbol column is missing, non-numeric, or holds
/// nulls.
pub fn returns_matrix(aligned: &DataFrame, symbols: &[String]) -> Result<Array2<f64>> {
    let rows = aligned.height();
    let mut matrix = Array2::<f64>::zeros((rows, symbols.len()));

    for (j, symbol) in symbols.iter().enumerate() {
        let series = aligned.column(symbol)?.f64()?;
        for i in 0..rows {
            matrix[[i, j]] = series
                .get(i)
                .ok_or_else(|| DataError::Parse(format!("Missing return for {symbol}")))?;
        }
    }

    Ok(matrix)
}

/// Pairwise sample Pearson correlation across the columns of a return
/// matrix.
///
/// The diagonal is exactly 1. A zero-variance series carries no correlation
/// information; its off-diagonal entries are defined as 0 rather than
/// propagating NaN.
pub fn sample_correlation(returns: &Array2<f64>) -> Array2<f64> {
    let (rows, cols) = returns.dim();
    let means: Vec<f64> = (0..cols)
        .map(|j| returns.column(j).mean().unwrap_or(0.0))
        .collect();

    let mut correlation = Array2::<f64>::eye(cols);
    for i in 0..cols {
        for j in (i + 1)..cols {
            let mut cov = 0.0;
            let mut var_i = 0.0;
            let mut var_j = 0.0;
            for t in 0..rows {
                let di = returns[[t, i]] - means[i];
                let dj = returns[[t, j]] - means[j];
                cov += di * dj;
                var_i += di * di;
                var_j += dj * dj;
            }

            let denom = (var_i * var_j).sqrt();
            let value = if denom > 0.0 { cov / denom } else { 0.0 };
            correlation[[i, j]] = value;
            correlation[[j, i]] = value;
        }
    }

    correlation
}

/// Annualize sample statistics over aligned daily returns and assemble the
/// snapshot.
///
/// # Errors
///
/// Returns [`DataError::InsufficientHistory`] when fewer than
/// [`MIN_OBSERVATIONS`] aligned observations are available.
pub fn estimate_snapshot(returns: &Array2<f64>) -> Result<StatisticsSnapshot> {
    let (rows, cols) = returns.dim();
    if rows < MIN_OBSERVATIONS {
        return Err(DataError::InsufficientHistory {
            required: MIN_OBSERVATIONS,
            actual: rows,
        });
    }

    let mut expected_returns = Array1::<f64>::zeros(cols);
    let mut std_devs = Array1::<f64>::zeros(cols);
    for j in 0..cols {
        let column = returns.column(j);
        expected_returns[j] = column.mean().unwrap_or(0.0) * TRADING_DAYS_PER_YEAR;
        std_devs[j] = column.std(1.0) * TRADING_DAYS_PER_YEAR.sqrt();
    }

    let correlation = sample_correlation(returns);

    Ok(StatisticsSnapshot::new(
        expected_returns,
        std_devs,
        correlation,
    )?)
}
