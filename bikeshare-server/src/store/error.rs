//! Trip data error types.

/// Errors from reading or querying trip data.
///
/// These always propagate to the caller; the store never retries.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Opening or reading the data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV stream itself is unreadable (not a per-row data problem)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A backing source could not answer the query
    #[error("trip source unavailable: {message}")]
    Unavailable { message: String },
}

/// Why a single CSV row was rejected during loading.
///
/// Rejected rows are skipped and counted; they never abort the load.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRecord {
    /// A required column is absent or blank
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The duration is not a non-negative whole number of seconds
    #[error("invalid duration: {0:?}")]
    InvalidDuration(String),
}
