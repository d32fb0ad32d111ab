//! Error taxonomy for analytics operations.

use thiserror::Error;

/// Errors that can occur while loading unit data or computing reports.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Aggregation was attempted over zero units. Averages over an empty
    /// set are rejected rather than silently producing NaN.
    #[error("cannot aggregate an empty set of units")]
    EmptyInput,

    /// Lookup by identifier found no matching unit.
    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    /// Failed to read or parse a ward CSV file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error while opening a data file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
