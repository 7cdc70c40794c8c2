//! Error types for loading price data and configuring an analysis.

use thiserror::Error;

/// Problems with the input price table. Any of these aborts the analysis.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("CSV must contain a '{column}' column")]
    MissingColumn { column: String },

    #[error("Price data contains no rows")]
    EmptySeries,

    #[error("Row {row}: cannot parse timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("Row {row}: price '{value}' is not a finite positive number")]
    InvalidPrice { row: usize, value: String },

    #[error("Row {row}: duplicate timestamp {timestamp}")]
    DuplicateTimestamp { row: usize, timestamp: String },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read price data: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid user-supplied settings.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Risk thresholds must satisfy 0 <= low < high (got low {low}, high {high})")]
    InvalidThresholds { low: f64, high: f64 },

    #[error("Delimiter must be a single ASCII character (got '{0}')")]
    InvalidDelimiter(char),
}
