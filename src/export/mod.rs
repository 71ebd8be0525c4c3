//! Trajectory and report export
//!
//! Writes projection results to CSV (for spreadsheet plotting) or JSON
//! (for downstream tooling). Formats are selected by name at the CLI.

use std::path::Path;
use thiserror::Error;

use crate::models::Trajectory;

pub mod csv;
pub mod json;

/// Export format types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Result<Self, ExportError> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Export a trajectory in the requested format
pub fn export_trajectory<P: AsRef<Path>>(
    trajectory: &Trajectory,
    output_path: P,
    format: ExportFormat,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => csv::export_trajectory(trajectory, output_path),
        ExportFormat::Json => json::export_json(trajectory, output_path),
    }
}
