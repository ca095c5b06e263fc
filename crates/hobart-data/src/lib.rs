#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobartlabs/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod assumptions;
pub mod error;
pub mod history;
pub mod provider;
pub mod yahoo;

pub use assumptions::{AssetAssumption, CapitalMarketAssumptions};
pub use error::{DataError, Result};
pub use history::HistoricalEstimator;
pub use provider::StatisticsProvider;
pub use yahoo::PriceHistoryProvider;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
