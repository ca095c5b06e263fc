//! The statistics provider contract.

use crate::error::Result;
use hobart_risk::StatisticsSnapshot;

/// Source of market statistics for a fixed, ordered asset universe.
///
/// The portfolio engine never performs I/O itself: it consumes a completed
/// [`StatisticsSnapshot`] and is indifferent to where it came from. An
/// implementation owns every failure mode on the way to a snapshot — network
/// problems, missing series, misaligned history — and must never hand the
/// engine partially-populated statistics.
pub trait StatisticsProvider {
    /// Produce a statistics snapshot.
    ///
    /// May involve network I/O; the static table variant completes
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns a [`DataError`](crate::DataError) when the underlying data
    /// cannot be fetched or does not support a well-formed snapshot.
    #[allow(async_fn_in_trait)]
    async fn statistics(&self) -> Result<StatisticsSnapshot>;
}
