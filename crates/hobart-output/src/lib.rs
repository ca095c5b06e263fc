#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/hobartlabs/hobart/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod summary;

pub use export::{
    ExportError, ExportFormat, export_frontier, export_metrics, frontier_to_string,
    metrics_to_string,
};
pub use summary::{AllocationSummary, AllocationWarning, WEIGHT_SUM_TOLERANCE};
