//! CSV and JSON export of portfolio metrics and frontier point clouds.

use hobart_risk::{FrontierPoint, PortfolioMetrics};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid format error.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Serialized output is not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }

    /// Infer the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidFormat`] for anything other than `csv`
    /// or `json`.
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| ExportError::InvalidFormat(path.display().to_string()))?;

        extension.parse()
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "pretty-json" | "pretty_json" => Ok(Self::PrettyJson),
            other => Err(ExportError::InvalidFormat(other.to_string())),
        }
    }
}

fn records_to_string<T: Serialize>(records: &[T], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
            let bytes = writer
                .into_inner()
                .map_err(|e| ExportError::Io(io::Error::other(e.to_string())))?;
            Ok(String::from_utf8(bytes)?)
        }
        ExportFormat::Json => Ok(serde_json::to_string(records)?),
        ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(records)?),
    }
}

/// Serialize a frontier point cloud to a string.
///
/// # Errors
///
/// Returns an [`ExportError`] if serialization fails.
pub fn frontier_to_string(
    points: &[FrontierPoint],
    format: ExportFormat,
) -> Result<String, ExportError> {
    records_to_string(points, format)
}

/// Write a frontier point cloud to a file.
///
/// # Errors
///
/// Returns an [`ExportError`] if serialization or the write fails.
pub fn export_frontier(
    points: &[FrontierPoint],
    path: &Path,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let content = frontier_to_string(points, format)?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

/// Serialize a metrics record to a string.
///
/// # Errors
///
/// Returns an [`ExportError`] if serialization fails.
pub fn metrics_to_string(
    metrics: &PortfolioMetrics,
    format: ExportFormat,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => records_to_string(std::slice::from_ref(metrics), format),
        ExportFormat::Json => Ok(serde_json::to_string(metrics)?),
        ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(metrics)?),
    }
}

/// Write a metrics record to a file.
///
/// # Errors
///
/// Returns an [`ExportError`] if serialization or the write fails.
pub fn export_metrics(
    metrics: &PortfolioMetrics,
    path: &Path,
    format: ExportFormat,
) -> Result<(), ExportError> {
    let content = metrics_to_string(metrics, format)?;
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
