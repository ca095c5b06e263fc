#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobartlabs/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod covariance;
pub mod frontier;
pub mod metrics;
pub mod snapshot;

// Re-export main types
pub use covariance::covariance_from_correlation;
pub use frontier::{DEFAULT_GRID_RESOLUTION, FrontierError, FrontierPoint, sample_frontier};
pub use metrics::{MIN_VOLATILITY, MetricsError, PortfolioMetrics, compute_metrics};
pub use snapshot::{SnapshotError, StatisticsSnapshot};
